use operation::ConstValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputValueError {
    #[error("Found a null where we expected a {expected}{path}")]
    UnexpectedNull { expected: String, path: String },
    #[error("Found a {actual} value where we expected a {expected}{path}")]
    MissingList {
        actual: ValueKind,
        expected: String,
        path: String,
    },
    #[error("Found a {actual} value where we expected a {expected} scalar{path}")]
    IncorrectScalarType {
        actual: ValueKind,
        expected: String,
        path: String,
    },
    #[error("Found value {actual} which cannot be coerced into a {expected} scalar{path}")]
    IncorrectScalarValue {
        actual: String,
        expected: String,
        path: String,
    },
    #[error("Found a {actual} value where we expected a {r#enum} enum value{path}")]
    IncorrectEnumValueType {
        r#enum: String,
        actual: ValueKind,
        path: String,
    },
    #[error("Found an unknown enum value '{value}' for the enum {r#enum}{path}")]
    UnknownEnumValue {
        r#enum: String,
        value: String,
        path: String,
    },
    #[error("Type '{name}' cannot be used for an input value")]
    NotAnInputType { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ValueKind {
    String,
    Integer,
    Enum,
    Float,
    Object,
    Boolean,
    List,
    Binary,
    Null,
}

impl From<&ConstValue> for ValueKind {
    fn from(value: &ConstValue) -> Self {
        match value {
            ConstValue::String(_) => ValueKind::String,
            ConstValue::Number(number) if number.is_f64() => ValueKind::Float,
            ConstValue::Number(_) => ValueKind::Integer,
            ConstValue::Boolean(_) => ValueKind::Boolean,
            ConstValue::Null => ValueKind::Null,
            ConstValue::List(_) => ValueKind::List,
            ConstValue::Object(_) => ValueKind::Object,
            ConstValue::Enum(_) => ValueKind::Enum,
            ConstValue::Binary(_) => ValueKind::Binary,
        }
    }
}

impl From<ConstValue> for ValueKind {
    fn from(value: ConstValue) -> Self {
        (&value).into()
    }
}
