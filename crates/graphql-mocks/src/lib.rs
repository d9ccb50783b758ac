//! Schemas and data sets shared by the engine tests and demos.

pub mod counter;
pub mod star_wars;
