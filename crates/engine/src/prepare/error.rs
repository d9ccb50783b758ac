use error::{ErrorCode, GraphqlError};

/// Operation-level failures. Nothing is executed and `data` is null.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Subscriptions are not supported")]
    SubscriptionsNotSupported,
    #[error("Schema does not define a mutation root type")]
    NoMutationRoot,
    #[error("Could not find a field named {field} on {root}")]
    UnknownRootField { root: String, field: String },
    #[error("Unknown fragment named '{0}'")]
    UnknownFragment(String),
    #[error("Fragment '{0}' spreads itself")]
    FragmentCycle(String),
    #[error("Query is nested too deep: {depth} levels where at most {max_depth} are allowed")]
    DepthLimitExceeded { depth: usize, max_depth: usize },
    #[error("Unknown directive '@{0}'")]
    UnknownDirective(String),
    #[error("Directive '@{0}' expects a Boolean value for its argument 'if'")]
    InvalidDirectiveArgument(String),
}

impl From<RequestError> for GraphqlError {
    fn from(err: RequestError) -> Self {
        GraphqlError::new(err.to_string(), ErrorCode::OperationValidationError)
    }
}
