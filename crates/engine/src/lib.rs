//! Executes operations against a [`TypeRegistry`](schema::TypeRegistry) of resolvers.
//!
//! A [`Schema`] wraps a finalized registry with its [`ExecutionConfig`]. Each call to
//! [`Schema::execute`] validates the operation, binds field arguments, runs the resolvers and
//! assembles the [`Response`].

mod bind;
mod config;
mod engine;
mod execution;
mod prepare;
mod request;
mod response;

pub use bind::ArgumentError;
pub use config::{ExecutionConfig, FieldConcurrency};
pub use engine::Schema;
pub use error::{ErrorCode, ErrorPath, ErrorPathSegment, GraphqlError};
pub use prepare::RequestError;
pub use request::Request;
pub use response::{Response, ResponseValue};
