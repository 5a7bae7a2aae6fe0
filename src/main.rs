#![allow(non_snake_case)]

fn main() {
    bethel_connect::run_app();
}
