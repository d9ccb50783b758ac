use std::sync::Arc;

use operation::Variables;
use schema::{RegistryError, ResolvedValue, TypeRegistry};
use tracing::Instrument;

use crate::{
    execution::{execute_operation, ExecutionContext},
    prepare::validate_operation,
    response::ResponseBuilder,
    ExecutionConfig, Request, Response,
};

/// A finalized type registry ready to execute operations. Cheap to clone and shared across
/// concurrent executions.
pub struct Schema<C> {
    inner: Arc<SchemaInner<C>>,
}

struct SchemaInner<C> {
    registry: TypeRegistry<C>,
    config: ExecutionConfig,
}

impl<C> Clone for Schema<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> Schema<C> {
    pub fn new(registry: TypeRegistry<C>) -> Result<Self, RegistryError> {
        Self::with_config(registry, ExecutionConfig::default())
    }

    pub fn with_config(mut registry: TypeRegistry<C>, config: ExecutionConfig) -> Result<Self, RegistryError> {
        registry.finalize()?;
        Ok(Self {
            inner: Arc::new(SchemaInner { registry, config }),
        })
    }

    pub fn registry(&self) -> &TypeRegistry<C> {
        &self.inner.registry
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.inner.config
    }
}

impl<C> Schema<C>
where
    C: Send + Sync + 'static,
{
    /// Executes an operation from the given root value.
    ///
    /// Never fails as such: request errors produce a response with null data and field errors
    /// are reported next to the partial data. The configured timeout requires a tokio runtime
    /// with the time driver enabled.
    pub async fn execute(&self, request: impl Into<Request>, root: ResolvedValue, context: &C) -> Response {
        let Request { operation, variables } = request.into();
        let span = tracing::debug_span!(
            "execute",
            operation.name = operation.name.as_deref().unwrap_or_default(),
            operation.ty = %operation.ty,
        );

        async {
            let variables = with_default_values(&operation, variables);
            if let Err(err) = validate_operation(self.registry(), &operation, &variables, self.config()) {
                tracing::debug!("Operation rejected: {err}");
                return Response::request_error(err);
            }

            let response = ResponseBuilder::default();
            let ctx = ExecutionContext {
                registry: self.registry(),
                operation: &operation,
                variables: &variables,
                context,
                config: self.config(),
                response: &response,
                deadline: self.config().timeout.map(|timeout| tokio::time::Instant::now() + timeout),
            };
            let data = execute_operation(ctx, root).await;
            response.build(data)
        }
        .instrument(span)
        .await
    }
}

fn with_default_values(operation: &operation::Operation, mut variables: Variables) -> Variables {
    for definition in &operation.variable_definitions {
        if let Some(default_value) = &definition.default_value {
            if variables.get_value(&definition.name).is_none() {
                variables.insert(definition.name.clone(), default_value.clone());
            }
        }
    }
    variables
}
