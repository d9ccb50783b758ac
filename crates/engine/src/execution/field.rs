use error::{ErrorCode, GraphqlError, ResponsePath};
use futures_util::future::{join_all, BoxFuture, FutureExt};
use operation::{Field, SelectionSet};
use schema::{BoundArguments, FieldResolver, ResolvedValue, TypeDefinition, Wrapping};

use super::{
    coercion::{coerce_enum, coerce_scalar, kind_of},
    collect::GroupedFields,
    field_error::FieldError,
    ExecutionContext,
};
use crate::{bind::bind_arguments, ResponseValue};

impl<'a, C> ExecutionContext<'a, C>
where
    C: Send + Sync + 'static,
{
    /// Resolves the fields of an object. Siblings run concurrently unless `serial` is set, the
    /// output keeps the query order either way.
    pub(super) fn resolve_fields(
        self,
        object_type: &'a str,
        parent: ResolvedValue,
        fields: GroupedFields<'a>,
        path: ResponsePath,
        serial: bool,
    ) -> BoxFuture<'a, Result<ResponseValue, FieldError>> {
        async move {
            let parent = &parent;
            let path = &path;
            let futures = fields.into_iter().enumerate().map(|(rank, (key, fields))| async move {
                let value = self.resolve_field(object_type, parent, &fields, path.field(rank, key)).await;
                (key, value)
            });

            let results = if serial {
                let mut results = Vec::new();
                for future in futures {
                    results.push(future.await);
                }
                results
            } else {
                join_all(futures).await
            };

            let mut object = Vec::with_capacity(results.len());
            for (key, value) in results {
                object.push((key.clone(), value?));
            }
            Ok(ResponseValue::Object(object))
        }
        .boxed()
    }

    async fn resolve_field(
        self,
        object_type: &'a str,
        parent: &ResolvedValue,
        fields: &[&'a Field],
        path: ResponsePath,
    ) -> Result<ResponseValue, FieldError> {
        let Some(field) = fields.first() else {
            return Ok(ResponseValue::Null);
        };
        if field.name.as_str() == "__typename" {
            return Ok(ResponseValue::String(object_type.to_string()));
        }

        let Some(definition) = self
            .registry
            .object(object_type)
            .and_then(|object| object.get_field(&field.name))
        else {
            self.response.push_error(
                &path,
                GraphqlError::new(
                    format!("Could not find a field named {} on {object_type}", field.name),
                    ErrorCode::ExecutionError,
                ),
            );
            return Ok(ResponseValue::Null);
        };

        tracing::trace!("Resolving {object_type}.{} at {path}", field.name);
        let selection_sets = fields.iter().map(|field| &field.selection_set).collect::<Vec<_>>();
        let result = async {
            let arguments = bind_arguments(self.registry, definition, field, self.variables)?;
            let value = self.run_resolver(&definition.resolver, parent, &arguments).await?;
            self.complete_value(&definition.ty.name, definition.ty.wrapping, &selection_sets, value, path.clone())
                .await
        }
        .await;

        result.or_else(|err| self.handle_failure(err, definition.ty.wrapping, &path))
    }

    async fn run_resolver(
        self,
        resolver: &FieldResolver<C>,
        parent: &ResolvedValue,
        arguments: &BoundArguments,
    ) -> Result<ResolvedValue, FieldError> {
        if self.deadline.is_some_and(|deadline| tokio::time::Instant::now() >= deadline) {
            return Err(FieldError::TimedOut);
        }

        let future = resolver.resolve(parent, self.context, arguments);
        let result = match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, future)
                .await
                .map_err(|_| FieldError::TimedOut)?,
            None => future.await,
        };
        result.map_err(|err| FieldError::Error(GraphqlError::new(err.to_string(), ErrorCode::ResolverError)))
    }

    /// Completes a resolved value against the declared type of its position: null checks, list
    /// fan-out, leaf coercion and object recursion.
    fn complete_value<'b>(
        self,
        type_name: &'a str,
        wrapping: Wrapping,
        selection_sets: &'b [&'a SelectionSet],
        value: ResolvedValue,
        path: ResponsePath,
    ) -> BoxFuture<'b, Result<ResponseValue, FieldError>>
    where
        'a: 'b,
    {
        async move {
            if value.is_null() {
                if wrapping.is_required() {
                    return Err(GraphqlError::non_null_violation(&wrapping.type_display(type_name)).into());
                }
                return Ok(ResponseValue::Null);
            }

            if let Some(item_wrapping) = wrapping.without_list() {
                let ResolvedValue::List(items) = value else {
                    return Err(GraphqlError::new(
                        format!("Encountered a {} where we expected a list", kind_of(&value)),
                        ErrorCode::ExecutionError,
                    )
                    .into());
                };
                return self
                    .complete_list(type_name, item_wrapping, selection_sets, items, path)
                    .await;
            }

            let Some(definition) = self.registry.get(type_name) else {
                return Err(GraphqlError::new(format!("Unknown type {type_name}"), ErrorCode::ExecutionError).into());
            };

            match definition {
                TypeDefinition::Scalar(scalar) => coerce_scalar(scalar, value).map_err(FieldError::from),
                TypeDefinition::Enum(enum_type) => coerce_enum(enum_type, value).map_err(FieldError::from),
                TypeDefinition::Object(object) => {
                    self.complete_object(&object.name, selection_sets, value, path)
                        .await
                }
                TypeDefinition::Interface(_) | TypeDefinition::Union(_) => {
                    let object_type = self.runtime_type(type_name, &value)?;
                    self.complete_object(object_type, selection_sets, value, path).await
                }
            }
        }
        .boxed()
    }

    async fn complete_list(
        self,
        type_name: &'a str,
        item_wrapping: Wrapping,
        selection_sets: &[&'a SelectionSet],
        items: Vec<ResolvedValue>,
        path: ResponsePath,
    ) -> Result<ResponseValue, FieldError> {
        let path = &path;
        let futures = items.into_iter().enumerate().map(|(index, item)| async move {
            let path = path.index(index);
            self.complete_value(type_name, item_wrapping, selection_sets, item, path.clone())
                .await
                .or_else(|err| self.handle_failure(err, item_wrapping, &path))
        });

        let items = if self.config.field_concurrency.is_serial() {
            let mut items = Vec::new();
            for future in futures {
                items.push(future.await);
            }
            items
        } else {
            join_all(futures).await
        };

        items
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map(ResponseValue::List)
    }

    async fn complete_object(
        self,
        object_type: &'a str,
        selection_sets: &[&'a SelectionSet],
        value: ResolvedValue,
        path: ResponsePath,
    ) -> Result<ResponseValue, FieldError> {
        if !matches!(value, ResolvedValue::Object(_)) {
            return Err(GraphqlError::new(
                format!(
                    "Found a {} value where we expected a {object_type} object",
                    kind_of(&value)
                ),
                ErrorCode::ExecutionError,
            )
            .into());
        }

        let fields = self.collect_fields(object_type, selection_sets.iter().copied());
        self.resolve_fields(
            object_type,
            value,
            fields,
            path,
            self.config.field_concurrency.is_serial(),
        )
        .await
    }

    /// Concrete object type of a value at an interface or union position, taken from the type
    /// name its source object carries.
    fn runtime_type(self, abstract_type: &str, value: &ResolvedValue) -> Result<&'a str, GraphqlError> {
        let Some(type_name) = value.as_object().and_then(|object| object.type_name()) else {
            return Err(GraphqlError::new(
                format!("Could not determine the runtime type of a {abstract_type} value"),
                ErrorCode::ExecutionError,
            ));
        };

        match self.registry.object(type_name) {
            Some(object) if self.registry.is_possible_type(abstract_type, &object.name) => Ok(&object.name),
            _ => Err(GraphqlError::new(
                format!("Type {type_name} is not a possible type of {abstract_type}"),
                ErrorCode::ExecutionError,
            )),
        }
    }

    /// Records the failure of a position, unless it already was, and nulls it. A non-null
    /// position propagates the null to its parent instead.
    fn handle_failure(
        self,
        err: FieldError,
        wrapping: Wrapping,
        path: &ResponsePath,
    ) -> Result<ResponseValue, FieldError> {
        match err {
            FieldError::Error(error) => self.response.push_error(path, error),
            FieldError::TimedOut => self.response.set_timed_out(),
            FieldError::Propagate => {}
        }

        if wrapping.is_nullable() {
            Ok(ResponseValue::Null)
        } else {
            Err(FieldError::Propagate)
        }
    }
}
