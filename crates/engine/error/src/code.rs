#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // Field arguments could not be bound.
    ArgumentError,
    // A resolver returned an error.
    ResolverError,
    // A resolved value didn't fit its declared type.
    ExecutionError,
    // The operation can't be executed at all.
    OperationValidationError,
    Timeout,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn display_matches_serialization() {
        for code in ErrorCode::iter() {
            let serialized = serde_json::to_value(code).unwrap();
            assert_eq!(serialized, serde_json::Value::String(code.to_string()));
        }
        assert_eq!(ErrorCode::OperationValidationError.as_ref(), "OPERATION_VALIDATION_ERROR");
    }
}
