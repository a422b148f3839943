//! Procedural macros for the propmeta crate.

/// Shared attribute parsing and validation.
mod core;
/// Derive support for property lists.
mod properties;

#[proc_macro_derive(Properties, attributes(propmeta))]
/// Derive a `Properties` implementation listing the named fields of a struct.
pub fn derive_properties(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    match properties::expand_derive_properties(&input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[cfg(test)]
mod tests;
