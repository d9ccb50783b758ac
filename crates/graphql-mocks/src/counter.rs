//! A schema with slow resolvers and a mutation, recording how its resolvers were scheduled.

use std::{
    sync::{
        atomic::{AtomicI64, AtomicUsize, Ordering},
        Mutex, PoisonError,
    },
    time::Duration,
};

use engine::{ExecutionConfig, Schema};
use operation::ConstValue;
use schema::{
    BoundArguments, FieldDefinition, FieldResolver, InputValueDefinition, ObjectType, RegistryError, ResolvedValue,
    Resolver, ResolverError, TypeRef, TypeRegistry,
};

/// Context of the counter schema.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicI64,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    completed: Mutex<Vec<String>>,
}

impl Counter {
    pub fn value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    /// Highest number of resolvers that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Labels of the resolvers in the order they completed.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    async fn track<T>(&self, label: String, delay: Duration, f: impl FnOnce() -> T) -> T {
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        tokio::time::sleep(delay).await;
        let output = f();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(label);
        output
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DelayedArguments {
    label: String,
    #[serde(default)]
    delay_ms: u64,
}

/// Returns its label after sleeping.
struct Echo;

#[async_trait::async_trait]
impl Resolver<Counter> for Echo {
    async fn resolve(
        &self,
        _: &ResolvedValue,
        counter: &Counter,
        arguments: &BoundArguments,
    ) -> Result<ResolvedValue, ResolverError> {
        let DelayedArguments { label, delay_ms } = arguments.deserialize()?;
        let value = counter
            .track(label.clone(), Duration::from_millis(delay_ms), || label)
            .await;
        Ok(value.into())
    }
}

/// Adds `by` to the counter after sleeping and returns the new value.
struct Increment;

#[async_trait::async_trait]
impl Resolver<Counter> for Increment {
    async fn resolve(
        &self,
        _: &ResolvedValue,
        counter: &Counter,
        arguments: &BoundArguments,
    ) -> Result<ResolvedValue, ResolverError> {
        let DelayedArguments { label, delay_ms } = arguments.deserialize()?;
        let by: i64 = arguments.get_as("by")?;
        let value = counter
            .track(label, Duration::from_millis(delay_ms), || {
                counter.value.fetch_add(by, Ordering::SeqCst) + by
            })
            .await;
        Ok(ResolvedValue::Scalar(ConstValue::Number(value.into())))
    }
}

pub fn schema() -> Result<Schema<Counter>, RegistryError> {
    Schema::new(registry()?)
}

pub fn schema_with_config(config: ExecutionConfig) -> Result<Schema<Counter>, RegistryError> {
    Schema::with_config(registry()?, config)
}

pub fn registry() -> Result<TypeRegistry<Counter>, RegistryError> {
    let mut registry = TypeRegistry::new().with_mutation_type("Mutation");

    registry.register(
        ObjectType::new("Query")
            .field(
                FieldDefinition::new("value", TypeRef::named("Int").non_null()).resolve_with(|_, counter: &Counter, _| {
                    Ok(ResolvedValue::Scalar(ConstValue::Number(counter.value().into())))
                }),
            )
            .field(
                delayed(FieldDefinition::new("echo", TypeRef::named("String").non_null()))
                    .resolver(FieldResolver::custom(Echo)),
            ),
    )?;

    registry.register(
        ObjectType::new("Mutation").field(
            delayed(FieldDefinition::new("increment", TypeRef::named("Int").non_null()))
                .argument(InputValueDefinition::new("by", TypeRef::named("Int").non_null()))
                .resolver(FieldResolver::custom(Increment)),
        ),
    )?;

    Ok(registry)
}

fn delayed(field: FieldDefinition<Counter>) -> FieldDefinition<Counter> {
    field
        .argument(InputValueDefinition::new("label", TypeRef::named("String").non_null()))
        .argument(InputValueDefinition::new("delayMs", TypeRef::named("Int")))
}
