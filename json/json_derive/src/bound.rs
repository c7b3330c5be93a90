use syn::{parse_quote, GenericParam, Generics, TypeParamBound, WhereClause};

/// Where clause of `generics` extended with `T: bound` for every type
/// parameter `T`.
pub fn where_clause_with_bound(generics: &Generics, bound: TypeParamBound) -> WhereClause {
    let new_predicates = generics.params.iter().filter_map(|param| match param {
        GenericParam::Type(param) => {
            let ident = &param.ident;
            Some::<syn::WherePredicate>(parse_quote!(#ident: #bound))
        }
        _ => None,
    });

    let mut generics = generics.clone();
    generics.make_where_clause().predicates.extend(new_predicates);
    generics.where_clause.unwrap_or_else(|| parse_quote!(where))
}
