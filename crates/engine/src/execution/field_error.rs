use error::GraphqlError;

use crate::ArgumentError;

/// Failure of a position in the response while it is being completed.
#[derive(Debug)]
pub(super) enum FieldError {
    /// Not recorded yet, it will be at the path of the failing position.
    Error(GraphqlError),
    /// The resolver was abandoned at the deadline.
    TimedOut,
    /// Recorded further down, only the null propagation is left.
    Propagate,
}

impl From<GraphqlError> for FieldError {
    fn from(err: GraphqlError) -> Self {
        FieldError::Error(err)
    }
}

impl From<ArgumentError> for FieldError {
    fn from(err: ArgumentError) -> Self {
        FieldError::Error(err.into())
    }
}
