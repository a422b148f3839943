#![allow(dead_code)]

use propmeta::Properties;

#[derive(Properties)]
struct Pair(i32, String);

fn main() {}
