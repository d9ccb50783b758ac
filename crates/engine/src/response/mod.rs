mod builder;
mod value;

use error::GraphqlError;

pub(crate) use builder::ResponseBuilder;
pub use value::ResponseValue;

/// Result of an execution: `{"data": ..., "errors": [...]}`, errors being omitted when there
/// are none.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Response {
    pub data: Option<ResponseValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl Response {
    pub(crate) fn request_error(error: impl Into<GraphqlError>) -> Self {
        Self {
            data: None,
            errors: vec![error.into()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.message.as_ref()).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
