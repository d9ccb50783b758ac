use error::{ErrorCode, GraphqlError};
use operation::ConstValue;
use schema::{BuiltinScalar, EnumType, ResolvedValue, ScalarType, ValueKind};

use crate::ResponseValue;

pub(super) fn kind_of(value: &ResolvedValue) -> ValueKind {
    match value {
        ResolvedValue::Null => ValueKind::Null,
        ResolvedValue::Scalar(value) => value.into(),
        ResolvedValue::List(_) => ValueKind::List,
        ResolvedValue::Object(_) => ValueKind::Object,
    }
}

/// Output coercion of a non-null scalar value.
pub(super) fn coerce_scalar(scalar: &ScalarType, value: ResolvedValue) -> Result<ResponseValue, GraphqlError> {
    let Some(builtin) = scalar.builtin() else {
        // Custom scalars are rendered as they are.
        return Ok(match value {
            ResolvedValue::Scalar(value) => value.into(),
            value => ResponseValue::from_json(value.to_json()),
        });
    };

    let value = match value {
        ResolvedValue::Scalar(value) => value,
        value => return Err(incorrect_scalar_type(kind_of(&value), &scalar.name)),
    };

    match (builtin, value) {
        (BuiltinScalar::String, ConstValue::String(value)) => Ok(ResponseValue::String(value)),
        (BuiltinScalar::Boolean, ConstValue::Boolean(value)) => Ok(ResponseValue::Boolean(value)),
        (BuiltinScalar::Float, ConstValue::Number(value)) => Ok(ResponseValue::Number(value)),
        (BuiltinScalar::ID, ConstValue::String(value)) => Ok(ResponseValue::String(value)),
        (BuiltinScalar::ID, ConstValue::Number(value)) if value.is_i64() || value.is_u64() => {
            Ok(ResponseValue::String(value.to_string()))
        }
        (BuiltinScalar::Int, ConstValue::Number(value)) => as_int(&value)
            .map(|value| ResponseValue::Number(value.into()))
            .ok_or_else(|| {
                GraphqlError::new(
                    format!("Found value {value} which cannot be coerced into an Int scalar"),
                    ErrorCode::ExecutionError,
                )
            }),
        (_, value) => Err(incorrect_scalar_type((&value).into(), &scalar.name)),
    }
}

/// Output coercion of a non-null enum value, given either as an enum literal or a string.
pub(super) fn coerce_enum(enum_type: &EnumType, value: ResolvedValue) -> Result<ResponseValue, GraphqlError> {
    let name = match value {
        ResolvedValue::Scalar(ConstValue::Enum(name)) => name.to_string(),
        ResolvedValue::Scalar(ConstValue::String(name)) => name,
        value => {
            return Err(GraphqlError::new(
                format!(
                    "Found a {} value where we expected a {} enum value",
                    kind_of(&value),
                    enum_type.name
                ),
                ErrorCode::ExecutionError,
            ));
        }
    };

    if enum_type.has_value(&name) {
        Ok(ResponseValue::String(name))
    } else {
        Err(GraphqlError::new(
            format!("Found an unknown enum value '{name}' for the enum {}", enum_type.name),
            ErrorCode::ExecutionError,
        ))
    }
}

fn as_int(value: &serde_json::Number) -> Option<i32> {
    if let Some(value) = value.as_i64() {
        return i32::try_from(value).ok();
    }
    let value = value.as_f64()?;
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    (in_range && value.fract() == 0.0).then_some(value as i32)
}

fn incorrect_scalar_type(actual: ValueKind, expected: &str) -> GraphqlError {
    GraphqlError::new(
        format!("Found a {actual} value where we expected a {expected} scalar"),
        ErrorCode::ExecutionError,
    )
}
