use crate::{attr, bound};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse_quote, Data, DataEnum, DataStruct, DeriveInput, Error, Fields, FieldsNamed, Result};

pub fn derive(input: DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => derive_struct(&input, fields),
        Data::Enum(enumeration) => derive_enum(&input, enumeration),
        _ => Err(Error::new(
            Span::call_site(),
            "only named fields structs and variants enums are supported",
        )),
    }
}

fn derive_struct(input: &DeriveInput, fields: &FieldsNamed) -> Result<TokenStream> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();

    let mut fieldname = Vec::new();
    let mut fieldstr = Vec::new();
    for field in &fields.named {
        if attr::is_skipped(field)? {
            continue;
        }
        fieldname.push(&field.ident);
        fieldstr.push(attr::name_of_field(field)?);
    }

    let bound = parse_quote!(::core::convert::Into<::json::Value>);
    let bounded_where_clause = bound::where_clause_with_bound(&input.generics, bound);

    Ok(quote! {
        impl #impl_generics ::core::convert::From<#ident #ty_generics> for ::json::Value #bounded_where_clause {
            #[allow(unused_mut)]
            fn from(data: #ident #ty_generics) -> Self {
                let mut object = ::json::Object::new();
                #(
                    object.insert(#fieldstr, data.#fieldname);
                )*
                ::json::Value::Object(object)
            }
        }
    })
}

fn derive_enum(input: &DeriveInput, enumeration: &DataEnum) -> Result<TokenStream> {
    if input.generics.lt_token.is_some() || input.generics.where_clause.is_some() {
        return Err(Error::new(Span::call_site(), "Enums with generics are not supported"));
    }

    let ident = &input.ident;

    let var_idents = enumeration
        .variants
        .iter()
        .map(|variant| match variant.fields {
            Fields::Unit => Ok(&variant.ident),
            _ => Err(Error::new_spanned(
                variant,
                "Invalid variant: only simple enum variants without fields are supported",
            )),
        })
        .collect::<Result<Vec<_>>>()?;
    let names = enumeration
        .variants
        .iter()
        .map(attr::name_of_variant)
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        impl ::core::convert::From<#ident> for ::json::Value {
            fn from(data: #ident) -> Self {
                match data {
                    #(
                        #ident::#var_idents => ::json::Value::String(::std::string::String::from(#names)),
                    )*
                }
            }
        }
    })
}
