#![allow(dead_code)]

use propmeta::Properties;

#[derive(Properties)]
struct Account {
    #[propmeta(skip, rename = "cache")]
    scratch: u64,
}

fn main() {}
