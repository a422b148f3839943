use darling::{FromDeriveInput, ast};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Expr, parse_quote};

use super::core;

pub fn expand_derive_properties(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = core::PropertiesContainer::from_derive_input(input)?;
    core::check_container_attrs(&container)?;
    // `supports(struct_named)` has already rejected every other shape
    let ast::Data::Struct(fields) = &container.data else {
        unreachable!("darling only accepts structs with named fields");
    };
    expand_struct(&container, fields)
}

fn expand_struct(
    container: &core::PropertiesContainer,
    fields: &ast::Fields<core::PropertyField>,
) -> syn::Result<TokenStream> {
    let ident = &container.ident;

    let mut generics = container.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }

    let field_entries = fields.iter().filter(|f| !f.skip).filter_map(|field| {
        let name = core::property_name(container, field)?;
        let ty = &field.ty;
        let has_setter = !(container.read_only || field.read_only);
        Some::<Expr>(parse_quote!(
            propmeta::PropertyDescriptor::of::<#ty>(#name, #has_setter)
        ))
    });

    let computed_entries = container.computed.iter().map(|computed| -> Expr {
        let name = &computed.name;
        let ty = &computed.ty;
        let has_setter = !(container.read_only || computed.read_only);
        parse_quote!(propmeta::PropertyDescriptor::of::<#ty>(#name, #has_setter))
    });

    let entries: Vec<Expr> = field_entries.chain(computed_entries).collect();

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote!(
        #[automatically_derived]
        impl #impl_generics propmeta::Properties for #ident #ty_generics #where_clause {
            fn properties() -> ::std::vec::Vec<propmeta::PropertyDescriptor> {
                ::std::vec![
                    #(#entries),*
                ]
            }
        }
    ))
}
