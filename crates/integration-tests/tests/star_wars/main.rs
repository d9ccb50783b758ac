#![allow(unused_crate_dependencies, clippy::panic)]

mod arguments;
mod errors;
mod fragments;
mod search;
mod variables;
