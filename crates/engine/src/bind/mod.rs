mod error;

use std::convert::Infallible;

use operation::{ConstValue, Field, Name, Value, Variables};
use schema::{BoundArguments, FieldDefinition, TypeRegistry};

pub use error::ArgumentError;

/// Binds the arguments supplied to a field against its definition.
///
/// Supplied values are coerced to the declared types, defaults fill in the arguments that were
/// left out and omitted nullable arguments stay absent. A top-level variable that has no value
/// counts as an omitted argument, nested ones are read as null.
pub(crate) fn bind_arguments<C>(
    registry: &TypeRegistry<C>,
    definition: &FieldDefinition<C>,
    field: &Field,
    variables: &Variables,
) -> Result<BoundArguments, ArgumentError> {
    if let Some((name, _)) = field
        .arguments
        .iter()
        .find(|(name, _)| definition.get_argument(name).is_none())
    {
        return Err(ArgumentError::Unknown {
            argument: name.to_string(),
        });
    }

    let mut arguments = BoundArguments::default();
    for argument in &definition.arguments {
        let value = match field
            .argument(&argument.name)
            .and_then(|value| resolve_variables(value, variables))
        {
            Some(value) => value,
            None => match &argument.default_value {
                Some(default_value) => default_value.clone(),
                None if argument.ty.is_required() => {
                    return Err(ArgumentError::Missing {
                        argument: argument.name.clone(),
                        expected: argument.ty.to_string(),
                    });
                }
                None => continue,
            },
        };

        let value = registry
            .coerce_input_value(&argument.ty, value)
            .map_err(|source| ArgumentError::Type {
                argument: argument.name.clone(),
                source,
            })?;
        arguments.insert(Name::new(&argument.name), value);
    }

    Ok(arguments)
}

fn resolve_variables(value: &Value, variables: &Variables) -> Option<ConstValue> {
    match value {
        Value::Variable(name) => variables.get_value(name).cloned(),
        value => value
            .clone()
            .into_const_with(|name| {
                Ok::<_, Infallible>(variables.get_value(&name).cloned().unwrap_or(ConstValue::Null))
            })
            .ok(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use schema::{EnumType, InputValueDefinition, ObjectType, TypeRef};

    use super::*;

    fn registry() -> TypeRegistry<()> {
        let mut registry = TypeRegistry::new();
        registry
            .register(EnumType::new("Episode", ["NEWHOPE", "EMPIRE", "JEDI"]))
            .unwrap();
        registry.register(ObjectType::<()>::new("Query")).unwrap();
        registry
    }

    fn search() -> FieldDefinition<()> {
        FieldDefinition::new("search", "[SearchResult]".parse().unwrap())
            .argument(
                InputValueDefinition::new("query", TypeRef::named("String").non_null())
                    .default_value(ConstValue::String("R2-D2".into())),
            )
            .argument(InputValueDefinition::new("episode", TypeRef::named("Episode")))
    }

    fn droid() -> FieldDefinition<()> {
        FieldDefinition::new("droid", TypeRef::named("Droid"))
            .argument(InputValueDefinition::new("id", TypeRef::named("ID").non_null()))
    }

    fn bind(
        definition: &FieldDefinition<()>,
        field: &Field,
        variables: &Variables,
    ) -> Result<BoundArguments, ArgumentError> {
        bind_arguments(&registry(), definition, field, variables)
    }

    #[test]
    fn defaults_apply_and_nullable_arguments_stay_absent() {
        let arguments = bind(&search(), &Field::new("search"), &Variables::default()).unwrap();
        assert_eq!(
            arguments,
            BoundArguments::default().with("query", ConstValue::String("R2-D2".into()))
        );
        assert!(!arguments.contains("episode"));
    }

    #[test]
    fn supplied_values_are_coerced() {
        let field = Field::new("search")
            .with_argument("query", Value::String("R2".into()))
            .with_argument("episode", Value::Enum(Name::new("EMPIRE")));
        let arguments = bind(&search(), &field, &Variables::default()).unwrap();
        assert_eq!(arguments.get("episode"), Some(&ConstValue::Enum(Name::new("EMPIRE"))));
        assert_eq!(arguments.get("query"), Some(&ConstValue::String("R2".into())));

        let field = Field::new("droid").with_argument("id", Value::Number(2001.into()));
        let arguments = bind(&droid(), &field, &Variables::default()).unwrap();
        assert_eq!(arguments.get("id"), Some(&ConstValue::String("2001".into())));
    }

    #[test]
    fn variables() {
        let field = Field::new("search").with_argument("query", Value::Variable(Name::new("text")));

        let variables = Variables::default().with("text", ConstValue::String("Tat".into()));
        let arguments = bind(&search(), &field, &variables).unwrap();
        assert_eq!(arguments.get("query"), Some(&ConstValue::String("Tat".into())));

        // No value for the variable, the default of the argument applies.
        let arguments = bind(&search(), &field, &Variables::default()).unwrap();
        assert_eq!(arguments.get("query"), Some(&ConstValue::String("R2-D2".into())));
    }

    #[test]
    fn errors() {
        let error = bind(&droid(), &Field::new("droid"), &Variables::default()).unwrap_err();
        assert_eq!(error.to_string(), "Missing required argument named 'id' of type ID!");

        let field = Field::new("droid")
            .with_argument("id", Value::String("2001".into()))
            .with_argument("name", Value::String("R2-D2".into()));
        let error = bind(&droid(), &field, &Variables::default()).unwrap_err();
        assert_eq!(error, ArgumentError::Unknown { argument: "name".into() });

        let field = Field::new("search").with_argument("episode", Value::Enum(Name::new("PHANTOM")));
        let error = bind(&search(), &field, &Variables::default()).unwrap_err();
        assert_eq!(error.argument(), "episode");
        assert!(matches!(error, ArgumentError::Type { .. }));

        let field = Field::new("search").with_argument("query", Value::Null);
        let error = bind(&search(), &field, &Variables::default()).unwrap_err();
        assert!(matches!(error, ArgumentError::Type { .. }), "{error}");
    }
}
