mod error;

pub use error::*;
use operation::{ConstValue, Name};
use wrapping::{ListWrapping, Wrapping};

use crate::{BuiltinScalar, EnumType, ScalarType, TypeDefinition, TypeRef, TypeRegistry};

impl<C> TypeRegistry<C> {
    /// Coerces an input value, an argument for example, into the given type.
    ///
    /// Enum values are returned as `ConstValue::Enum`, IDs as strings and a single value
    /// provided for a list is wrapped into a list.
    pub fn coerce_input_value(&self, ty: &TypeRef, value: ConstValue) -> Result<ConstValue, InputValueError> {
        let mut ctx = InputCoercionContext {
            registry: self,
            name: &ty.name,
            value_path: Vec::new(),
        };
        ctx.coerce_input_value(ty.wrapping, value)
    }
}

struct InputCoercionContext<'a, C> {
    registry: &'a TypeRegistry<C>,
    name: &'a str,
    value_path: Vec<usize>,
}

impl<C> InputCoercionContext<'_, C> {
    fn coerce_input_value(&mut self, wrapping: Wrapping, value: ConstValue) -> Result<ConstValue, InputValueError> {
        if wrapping.is_list() && !matches!(value, ConstValue::List(_) | ConstValue::Null) {
            let mut value = self.coerce_named_type(wrapping, value)?;
            for _ in 0..wrapping.list_wrappings().len() {
                value = ConstValue::List(vec![value]);
            }
            return Ok(value);
        }

        self.coerce_list(wrapping, value)
    }

    fn coerce_list(&mut self, wrapping: Wrapping, value: ConstValue) -> Result<ConstValue, InputValueError> {
        let (Some(item_wrapping), Some(list_wrapping)) = (wrapping.without_list(), wrapping.outermost_list_wrapping())
        else {
            return self.coerce_named_type(wrapping, value);
        };

        match (value, list_wrapping) {
            (ConstValue::Null, ListWrapping::RequiredList) => Err(InputValueError::UnexpectedNull {
                expected: wrapping.type_display(self.name),
                path: self.path(),
            }),
            (ConstValue::Null, ListWrapping::NullableList) => Ok(ConstValue::Null),
            (ConstValue::List(items), _) => {
                let mut coerced = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    self.value_path.push(index);
                    coerced.push(self.coerce_list(item_wrapping, item)?);
                    self.value_path.pop();
                }
                Ok(ConstValue::List(coerced))
            }
            (value, _) => Err(InputValueError::MissingList {
                actual: value.into(),
                expected: wrapping.type_display(self.name),
                path: self.path(),
            }),
        }
    }

    fn coerce_named_type(&mut self, wrapping: Wrapping, value: ConstValue) -> Result<ConstValue, InputValueError> {
        if matches!(value, ConstValue::Null) {
            if wrapping.inner_is_required() {
                return Err(InputValueError::UnexpectedNull {
                    expected: Wrapping::required().type_display(self.name),
                    path: self.path(),
                });
            }
            return Ok(ConstValue::Null);
        }

        match self.registry.get(self.name) {
            Some(TypeDefinition::Scalar(scalar)) => self.coerce_scalar(scalar, value),
            Some(TypeDefinition::Enum(r#enum)) => self.coerce_enum(r#enum, value),
            _ => Err(InputValueError::NotAnInputType {
                name: self.name.to_string(),
            }),
        }
    }

    fn coerce_enum(&self, r#enum: &EnumType, value: ConstValue) -> Result<ConstValue, InputValueError> {
        let name = match &value {
            ConstValue::Enum(value) => value.as_str(),
            ConstValue::String(value) => value.as_str(),
            value => {
                return Err(InputValueError::IncorrectEnumValueType {
                    r#enum: r#enum.name.clone(),
                    actual: value.into(),
                    path: self.path(),
                })
            }
        };

        if !r#enum.has_value(name) {
            return Err(InputValueError::UnknownEnumValue {
                r#enum: r#enum.name.clone(),
                value: name.to_string(),
                path: self.path(),
            });
        }

        Ok(ConstValue::Enum(Name::new(name)))
    }

    fn coerce_scalar(&self, scalar: &ScalarType, value: ConstValue) -> Result<ConstValue, InputValueError> {
        let Some(builtin) = scalar.builtin() else {
            // Custom scalars are opaque to the engine.
            return Ok(value);
        };

        match (value, builtin) {
            (ConstValue::Number(number), BuiltinScalar::Int) if !number.is_f64() => {
                let Some(value) = number.as_i64().and_then(|n| i32::try_from(n).ok()) else {
                    return Err(InputValueError::IncorrectScalarValue {
                        actual: number.to_string(),
                        expected: scalar.name.clone(),
                        path: self.path(),
                    });
                };
                Ok(ConstValue::Number(value.into()))
            }
            (ConstValue::Number(number), BuiltinScalar::Float) => Ok(ConstValue::Number(number)),
            (ConstValue::Number(number), BuiltinScalar::ID) if !number.is_f64() => {
                Ok(ConstValue::String(number.to_string()))
            }
            (ConstValue::String(value), BuiltinScalar::String | BuiltinScalar::ID) => Ok(ConstValue::String(value)),
            (ConstValue::Boolean(value), BuiltinScalar::Boolean) => Ok(ConstValue::Boolean(value)),
            (actual, _) => Err(InputValueError::IncorrectScalarType {
                actual: actual.into(),
                expected: scalar.name.clone(),
                path: self.path(),
            }),
        }
    }

    fn path(&self) -> String {
        if self.value_path.is_empty() {
            return String::new();
        }
        let path = self
            .value_path
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(".");
        format!(" at path '.{path}'")
    }
}
