mod attr;
mod bound;
mod ser;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive `From<T> for json::Value`.
///
/// Structs with named fields become objects with one member per field, in
/// declaration order. Enums with unit variants become the variant name.
#[proc_macro_derive(IntoValue, attributes(json))]
pub fn derive_into_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ser::derive(input).unwrap_or_else(|err| err.to_compile_error()).into()
}
