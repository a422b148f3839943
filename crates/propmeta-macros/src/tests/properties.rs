use syn::parse_str;

use crate::{core::assert_errors_with, properties::expand_derive_properties};

fn expand(txt: &str) -> String {
    expand_derive_properties(&parse_str(txt).unwrap())
        .unwrap()
        .to_string()
}

#[test]
fn derive_struct() {
    let s = expand("struct Foo { name: String, age: i32 }");
    assert!(s.contains("impl propmeta :: Properties for Foo"));
    assert!(s.contains("PropertyDescriptor :: of :: < String >"));
    assert!(s.contains("\"name\""));
    assert!(s.contains("\"age\""));
    assert!(!s.contains("false"));
}

#[test]
fn derive_keeps_field_order() {
    let s = expand("struct Foo { zeta: u8, alpha: u8 }");
    let zeta = s.find("\"zeta\"").unwrap();
    let alpha = s.find("\"alpha\"").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn derive_struct_with_generics() {
    let s = expand("struct Foo<T> { a: T }");
    assert!(s.contains("impl < T : 'static > propmeta :: Properties for Foo < T >"));
}

#[test]
fn derive_read_only_field() {
    let s = expand("struct Foo { #[propmeta(read_only)] id: i64 }");
    assert!(s.contains("(\"id\" , false)"));
}

#[test]
fn derive_read_only_container() {
    let s = expand(
        r#"
        #[propmeta(read_only)]
        struct Foo { a: i32, b: i32 }
        "#,
    );
    assert!(!s.contains("true"));
}

#[test]
fn derive_skip_and_rename() {
    let s = expand(
        r#"
        #[propmeta(rename_all = "pascal_case")]
        struct Foo {
            user_name: String,
            #[propmeta(rename = "mail")]
            email: String,
            #[propmeta(skip)]
            cache: Vec<u8>,
        }
        "#,
    );
    assert!(s.contains("\"UserName\""));
    assert!(s.contains("\"mail\""));
    assert!(!s.contains("cache"));
}

#[test]
fn derive_computed_property() {
    let s = expand(
        r#"
        #[propmeta(property(name = "total", ty = "u64", read_only))]
        struct Foo { a: u32 }
        "#,
    );
    let a = s.find("\"a\"").unwrap();
    let total = s.find("\"total\"").unwrap();
    assert!(a < total);
    assert!(s.contains("PropertyDescriptor :: of :: < u64 >"));
}

#[test]
fn error_on_tuple_struct() {
    let e = expand_derive_properties(&parse_str("struct Foo(i32, String);").unwrap());
    assert_errors_with!(e, "Unsupported shape");
}

#[test]
fn error_on_unit_struct() {
    let e = expand_derive_properties(&parse_str("struct Foo;").unwrap());
    assert_errors_with!(e, "Unsupported shape");
}

#[test]
fn error_on_enum() {
    let e = expand_derive_properties(&parse_str("enum Foo { A, B }").unwrap());
    assert_errors_with!(e, "Unsupported shape");
}

#[test]
fn error_on_lifetime() {
    let e = expand_derive_properties(&parse_str("struct Foo<'a> { a: &'a str }").unwrap());
    assert_errors_with!(e, "lifetime parameters are not supported");
}

#[test]
fn derive_keeps_field_spelling() {
    let s = expand(
        r#"
        #[allow(non_snake_case)]
        struct Legacy { firstName: String, HTTPCode: u16 }
        "#,
    );
    assert!(s.contains("\"firstName\""));
    assert!(s.contains("\"HTTPCode\""));
    assert!(!s.contains("first_name"));
}

#[test]
fn error_on_skip_with_read_only() {
    let e = expand_derive_properties(
        &parse_str("struct Foo { #[propmeta(skip, read_only)] a: i32 }").unwrap(),
    );
    assert_errors_with!(e, "`skip` cannot be combined with `read_only`");
}
