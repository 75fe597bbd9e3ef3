#[macro_use]
extern crate criterion;
extern crate zonescan;

mod scanner;
mod token;

criterion_main!(scanner::scanner, token::token);
