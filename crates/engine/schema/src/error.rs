use crate::input_value::InputValueError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Type '{0}' is already registered")]
    DuplicateType(String),
    #[error("Unknown type '{0}'")]
    UnknownType(String),
    #[error("Invalid type notation '{0}'")]
    InvalidTypeNotation(String),
    #[error("Schema is not consistent:\n{}", display_violations(.0))]
    SchemaIntegrity(Vec<SchemaViolation>),
}

fn display_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("- {violation}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single problem found by [`crate::TypeRegistry::finalize`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("The {operation} root type '{name}' is not defined")]
    MissingRootType { operation: &'static str, name: String },
    #[error("The {operation} root type '{name}' must be an object, found {kind}")]
    RootTypeNotAnObject {
        operation: &'static str,
        name: String,
        kind: crate::TypeKind,
    },
    #[error("{location} references the unknown type '{name}'")]
    UnknownTypeReference { location: String, name: String },
    #[error("{object} implements '{name}' which is not an interface")]
    NotAnInterface { object: String, name: String },
    #[error("Union {union} has member '{member}' which is not an object")]
    UnionMemberNotAnObject { union: String, member: String },
    #[error("{object} does not define the field '{field}' required by the interface {interface}")]
    MissingInterfaceField {
        object: String,
        interface: String,
        field: String,
    },
    #[error("{object}.{field} has type {actual} which is not compatible with {interface}.{field}: {expected}")]
    IncompatibleInterfaceField {
        object: String,
        interface: String,
        field: String,
        expected: String,
        actual: String,
    },
    #[error("{object}.{field} does not accept the argument '{argument}' defined by the interface {interface}")]
    MissingInterfaceFieldArgument {
        object: String,
        interface: String,
        field: String,
        argument: String,
    },
    #[error("{location} uses '{name}' as argument type, which is not a scalar or an enum")]
    NotAnInputType { location: String, name: String },
    #[error("Default value of {location} is invalid: {error}")]
    InvalidDefaultValue { location: String, error: InputValueError },
    #[error("{parent} declares the field '{field}' more than once")]
    DuplicateField { parent: String, field: String },
    #[error("Union {union} lists the member '{member}' more than once")]
    DuplicateUnionMember { union: String, member: String },
    #[error("Union {0} has no members")]
    EmptyUnion(String),
    #[error("Enum {0} has no values")]
    EmptyEnum(String),
}
