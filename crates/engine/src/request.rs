use operation::{Operation, Variables};

#[derive(Debug, Clone)]
pub struct Request {
    pub operation: Operation,
    pub variables: Variables,
}

impl Request {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            variables: Variables::default(),
        }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

impl From<Operation> for Request {
    fn from(operation: Operation) -> Self {
        Self::new(operation)
    }
}
