mod coercion;
mod collect;
mod field;
mod field_error;

use error::ResponsePath;
use operation::{Operation, OperationType, Variables};
use schema::{ResolvedValue, TypeRegistry};
use tokio::time::Instant;

use crate::{response::ResponseBuilder, ExecutionConfig, ResponseValue};

/// Everything the resolution of a single operation needs. Copied into every field future.
pub(crate) struct ExecutionContext<'a, C> {
    pub registry: &'a TypeRegistry<C>,
    pub operation: &'a Operation,
    pub variables: &'a Variables,
    pub context: &'a C,
    pub config: &'a ExecutionConfig,
    pub response: &'a ResponseBuilder,
    pub deadline: Option<Instant>,
}

impl<C> Clone for ExecutionContext<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ExecutionContext<'_, C> {}

/// Resolves the root selection set. `None` when a non-null root field failed, in which case the
/// error has already been recorded.
pub(crate) async fn execute_operation<C>(ctx: ExecutionContext<'_, C>, root: ResolvedValue) -> Option<ResponseValue>
where
    C: Send + Sync + 'static,
{
    let (root_type, serial) = match ctx.operation.ty {
        OperationType::Mutation => (ctx.registry.mutation_type()?, true),
        _ => (ctx.registry.query_type(), ctx.config.field_concurrency.is_serial()),
    };
    let root_type = ctx.registry.get(root_type)?.name();

    let fields = ctx.collect_fields(root_type, [&ctx.operation.selection_set]);
    ctx.resolve_fields(root_type, root, fields, ResponsePath::default(), serial)
        .await
        .ok()
}
