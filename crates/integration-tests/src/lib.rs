#![allow(unused_crate_dependencies, clippy::panic)]

mod selection;

use std::sync::OnceLock;

use engine::{ExecutionConfig, Request, Response};
use graphql_mocks::{counter, star_wars};
use schema::ResolvedValue;
use tokio::runtime::Runtime;

pub use selection::*;

#[ctor::ctor]
fn setup_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .parse(std::env::var("RUST_LOG").unwrap_or("engine=debug".to_string()))
        .unwrap();
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .without_time()
        .init();
}

pub fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap()
    })
}

/// The Star Wars schema along with a fresh store.
pub struct StarWars {
    schema: engine::Schema<star_wars::StarWarsStore>,
    store: star_wars::StarWarsStore,
}

impl StarWars {
    pub fn new() -> Self {
        Self::with_config(ExecutionConfig::default())
    }

    pub fn with_config(config: ExecutionConfig) -> Self {
        StarWars {
            schema: star_wars::schema_with_config(config).unwrap(),
            store: Default::default(),
        }
    }

    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        self.schema.execute(request, ResolvedValue::Null, &self.store).await
    }

    pub async fn post(&self, request: impl Into<Request>) -> serde_json::Value {
        self.execute(request).await.to_json()
    }
}

impl Default for StarWars {
    fn default() -> Self {
        Self::new()
    }
}

/// The counter schema along with the counter its resolvers update.
pub struct Counter {
    pub schema: engine::Schema<counter::Counter>,
    pub counter: counter::Counter,
}

impl Counter {
    pub fn with_config(config: ExecutionConfig) -> Self {
        Counter {
            schema: counter::schema_with_config(config).unwrap(),
            counter: Default::default(),
        }
    }

    pub async fn post(&self, request: impl Into<Request>) -> serde_json::Value {
        self.schema
            .execute(request, ResolvedValue::Null, &self.counter)
            .await
            .to_json()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::with_config(ExecutionConfig::default())
    }
}
