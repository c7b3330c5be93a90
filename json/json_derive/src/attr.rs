use syn::{Attribute, Field, LitStr, Result, Variant};

#[derive(Default)]
struct JsonAttrs {
    rename: Option<String>,
    skip: bool,
}

fn parse(attrs: &[Attribute]) -> Result<JsonAttrs> {
    let mut parsed = JsonAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("json")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(name.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported json attribute, expected `rename` or `skip`"))
            }
        })?;
    }
    Ok(parsed)
}

pub fn name_of_field(field: &Field) -> Result<String> {
    let attrs = parse(&field.attrs)?;
    match (attrs.rename, &field.ident) {
        (Some(name), _) => Ok(name),
        (None, Some(ident)) => Ok(ident.to_string()),
        (None, None) => Err(syn::Error::new_spanned(field, "field has no name")),
    }
}

pub fn is_skipped(field: &Field) -> Result<bool> {
    Ok(parse(&field.attrs)?.skip)
}

pub fn name_of_variant(var: &Variant) -> Result<String> {
    let attrs = parse(&var.attrs)?;
    Ok(attrs.rename.unwrap_or_else(|| var.ident.to_string()))
}
