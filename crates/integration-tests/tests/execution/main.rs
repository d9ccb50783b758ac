#![allow(unused_crate_dependencies, clippy::panic)]

mod concurrency;
mod limits;
mod mutation;
