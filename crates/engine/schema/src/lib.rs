//! Schema side of the engine: the [`TypeRegistry`] holding every named type, the field
//! definitions with their resolvers and the values resolvers exchange with the engine.

mod arguments;
mod definitions;
mod error;
mod input_value;
mod registry;
mod resolver;
mod type_ref;
mod value;

pub use arguments::BoundArguments;
pub use definitions::*;
pub use error::*;
pub use input_value::{InputValueError, ValueKind};
pub use registry::TypeRegistry;
pub use resolver::*;
pub use type_ref::TypeRef;
pub use value::{ResolvedValue, SourceObject};
pub use wrapping::{ListWrapping, Wrapping};
