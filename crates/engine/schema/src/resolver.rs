use std::{fmt, sync::Arc};

use crate::{BoundArguments, ResolvedValue};

/// Error returned by a resolver. The engine records it at the position of the field and keeps
/// resolving its siblings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ResolverError {
    message: String,
}

impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for ResolverError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ResolverError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Resolves a field from its parent value, the caller's context and the bound arguments.
#[async_trait::async_trait]
pub trait Resolver<C>: Send + Sync {
    async fn resolve(
        &self,
        parent: &ResolvedValue,
        context: &C,
        arguments: &BoundArguments,
    ) -> Result<ResolvedValue, ResolverError>;
}

/// Adapts a synchronous function into a [`Resolver`].
pub struct FnResolver<F>(F);

#[async_trait::async_trait]
impl<C, F> Resolver<C> for FnResolver<F>
where
    C: Sync,
    F: Fn(&ResolvedValue, &C, &BoundArguments) -> Result<ResolvedValue, ResolverError> + Send + Sync,
{
    async fn resolve(
        &self,
        parent: &ResolvedValue,
        context: &C,
        arguments: &BoundArguments,
    ) -> Result<ResolvedValue, ResolverError> {
        (self.0)(parent, context, arguments)
    }
}

pub enum FieldResolver<C> {
    /// Reads the property with this name on the parent object.
    Property(String),
    Custom(Arc<dyn Resolver<C>>),
}

impl<C> FieldResolver<C> {
    pub fn property(name: impl Into<String>) -> Self {
        FieldResolver::Property(name.into())
    }
}

impl<C: Sync + 'static> FieldResolver<C> {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&ResolvedValue, &C, &BoundArguments) -> Result<ResolvedValue, ResolverError> + Send + Sync + 'static,
    {
        FieldResolver::Custom(Arc::new(FnResolver(f)))
    }

    pub fn custom(resolver: impl Resolver<C> + 'static) -> Self {
        FieldResolver::Custom(Arc::new(resolver))
    }

    pub async fn resolve(
        &self,
        parent: &ResolvedValue,
        context: &C,
        arguments: &BoundArguments,
    ) -> Result<ResolvedValue, ResolverError> {
        match self {
            FieldResolver::Property(name) => parent.property(name),
            FieldResolver::Custom(resolver) => resolver.resolve(parent, context, arguments).await,
        }
    }
}

impl<C> Clone for FieldResolver<C> {
    fn clone(&self) -> Self {
        match self {
            FieldResolver::Property(name) => FieldResolver::Property(name.clone()),
            FieldResolver::Custom(resolver) => FieldResolver::Custom(Arc::clone(resolver)),
        }
    }
}

impl<C> fmt::Debug for FieldResolver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldResolver::Property(name) => f.debug_tuple("Property").field(name).finish(),
            FieldResolver::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
