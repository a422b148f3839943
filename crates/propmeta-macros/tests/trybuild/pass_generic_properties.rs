use propmeta::Properties;

#[derive(Properties)]
struct Envelope<T: Clone> {
    id: u32,
    payload: T,
}

fn main() {
    let props = <Envelope<String> as Properties>::properties();
    assert_eq!(props.len(), 2);
}
