use std::time::Duration;

/// Execution settings of a [`Schema`](crate::Schema). Deserializable from the `[execution]` table
/// of a TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Deadline for the whole operation. Resolvers still running when it expires are abandoned.
    #[serde(deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
    pub field_concurrency: FieldConcurrency,
    /// Deepest field nesting accepted, root fields being at depth 1.
    pub max_depth: Option<usize>,
}

impl ExecutionConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_field_concurrency(mut self, field_concurrency: FieldConcurrency) -> Self {
        self.field_concurrency = field_concurrency;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// How sibling fields of a query are resolved. Mutation root fields are always resolved serially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldConcurrency {
    #[default]
    Concurrent,
    Serial,
}

impl FieldConcurrency {
    pub fn is_serial(self) -> bool {
        matches!(self, FieldConcurrency::Serial)
    }
}
