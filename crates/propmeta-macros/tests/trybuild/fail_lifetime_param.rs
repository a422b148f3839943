#![allow(dead_code)]

use propmeta::Properties;

#[derive(Properties)]
struct Borrowed<'a> {
    name: &'a str,
}

fn main() {}
