use error::{ErrorCode, GraphqlError};
use schema::InputValueError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Found an invalid value for the argument '{argument}': {source}")]
    Type { argument: String, source: InputValueError },
    #[error("Missing required argument named '{argument}' of type {expected}")]
    Missing { argument: String, expected: String },
    #[error("Unknown argument named '{argument}'")]
    Unknown { argument: String },
}

impl ArgumentError {
    pub fn argument(&self) -> &str {
        match self {
            ArgumentError::Type { argument, .. }
            | ArgumentError::Missing { argument, .. }
            | ArgumentError::Unknown { argument } => argument,
        }
    }
}

impl From<ArgumentError> for GraphqlError {
    fn from(err: ArgumentError) -> Self {
        GraphqlError::new(err.to_string(), ErrorCode::ArgumentError)
    }
}
