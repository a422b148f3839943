use propmeta::{Properties, PropertyMetadata, ResultSetMetadata};

#[derive(Properties)]
#[propmeta(rename_all = "camel_case")]
#[propmeta(property(name = "displayName", ty = "String", read_only))]
struct Account {
    account_id: u64,
    #[propmeta(read_only)]
    created_at: i64,
    #[propmeta(skip)]
    dirty: bool,
}

fn main() {
    let meta = PropertyMetadata::of::<Account>();
    assert_eq!(meta.column_count(), 3);
}
