use darling::{FromDeriveInput, FromField, FromMeta, ast, util};
use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::Type;

/// Build an `Err` pointing at the offending attribute or type.
macro_rules! span_err {
    ($t:expr, $err:expr) => {
        Err(syn::Error::new_spanned($t, $err))
    };
}

#[allow(unused)]
pub(crate) use span_err;

/// Check that an expansion failed with a message containing `$m`.
#[allow(unused)]
macro_rules! assert_errors_with {
    ($e:expr, $m:expr) => {
        let e = $e.expect_err("expected the derive to be rejected");
        assert!(
            e.to_string().contains($m),
            "expected error containing {:?}, got {:?}",
            $m,
            e.to_string()
        );
    };
}

#[allow(unused)]
pub(crate) use assert_errors_with;

/// Naming rule applied to every field by `#[propmeta(rename_all = "...")]`.
///
/// Property names are the field identifiers unless a rule is requested.
#[derive(Default, Debug, Copy, Clone, FromMeta)]
pub enum RenameAll {
    #[default]
    Verbatim,
    SnakeCase,
    LowerCase,
    UpperCase,
    ScreamingSnakeCase,
    KebabCase,
    /// `firstName`
    CamelCase,
    /// `FirstName`
    PascalCase,
}

impl RenameAll {
    pub(crate) fn rename(self, s: &str) -> String {
        match self {
            Self::Verbatim => s.to_owned(),
            Self::SnakeCase => s.to_snake_case(),
            Self::LowerCase => s.to_lowercase(),
            Self::UpperCase => s.to_uppercase(),
            Self::ScreamingSnakeCase => s.to_shouty_snake_case(),
            Self::KebabCase => s.to_kebab_case(),
            Self::CamelCase => s.to_lower_camel_case(),
            Self::PascalCase => s.to_upper_camel_case(),
        }
    }
}

/// Parsed inputs for `Properties` derives.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(propmeta))]
#[darling(supports(struct_named))]
pub struct PropertiesContainer {
    /// Type identifier.
    pub ident: syn::Ident,
    /// Generic parameters.
    pub generics: syn::Generics,
    /// Parsed field data.
    pub data: ast::Data<util::Ignored, PropertyField>,

    /// Rename rule to apply to fields.
    #[darling(default)]
    pub rename_all: RenameAll,
    /// Mark every property as having no setter.
    #[darling(default)]
    pub read_only: bool,
    /// Properties with no backing field.
    #[darling(multiple, rename = "property")]
    pub computed: Vec<ComputedProperty>,
}

/// Parsed attributes for a single field.
#[derive(Debug, FromField)]
#[darling(attributes(propmeta))]
pub struct PropertyField {
    /// Field identifier.
    pub ident: Option<syn::Ident>,
    /// Field type.
    pub ty: Type,

    /// Optional explicit rename.
    pub rename: Option<String>,
    /// Whether to skip the field.
    #[darling(default)]
    pub skip: bool,
    /// Whether the property has no setter.
    #[darling(default)]
    pub read_only: bool,
}

/// A `property(name = "...", ty = "...")` entry on the container.
#[derive(Debug, FromMeta)]
pub struct ComputedProperty {
    pub name: String,
    pub ty: Type,
    #[darling(default)]
    pub read_only: bool,
}

/// Returns the property name of a field after applying any `rename`
/// attribute or container level `rename_all` rule.
pub fn property_name(container: &PropertiesContainer, field: &PropertyField) -> Option<String> {
    if let Some(rename) = &field.rename {
        return Some(rename.clone());
    }
    let id = field.ident.as_ref()?.to_string();
    Some(container.rename_all.rename(id.trim_start_matches("r#")))
}

/// Validate that field attributes are compatible.
pub fn check_field_attrs(field: &PropertyField) -> syn::Result<()> {
    if field.skip {
        if field.rename.is_some() {
            span_err!(&field.ty, "`skip` cannot be combined with `rename`")?;
        }
        if field.read_only {
            span_err!(&field.ty, "`skip` cannot be combined with `read_only`")?;
        }
    }
    Ok(())
}

/// Validate container-level attributes.
pub fn check_container_attrs(container: &PropertiesContainer) -> syn::Result<()> {
    if let Some(lt) = container.generics.lifetimes().next() {
        span_err!(lt, "lifetime parameters are not supported")?;
    }
    if let ast::Data::Struct(fields) = &container.data {
        for f in fields.iter() {
            check_field_attrs(f)?;
        }
    }
    for computed in &container.computed {
        if computed.name.is_empty() {
            span_err!(&computed.ty, "computed property names cannot be empty")?;
        }
    }
    Ok(())
}
