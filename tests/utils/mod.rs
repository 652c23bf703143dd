#![allow(dead_code)]

#[macro_use]
mod macros;
mod upstream;

pub use upstream::*;
