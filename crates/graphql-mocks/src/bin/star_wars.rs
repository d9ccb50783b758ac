//! Runs the Star Wars search query and prints the response.
//!
//! An optional path to a TOML file with an `[execution]` table configures the engine.

use engine::ExecutionConfig;
use graphql_mocks::star_wars::{self, StarWarsStore};
use operation::{Field, InlineFragment, Operation, Selection, Value};
use schema::ResolvedValue;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    execution: ExecutionConfig,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("engine=info"));
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .without_time()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => toml::from_str::<Config>(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(async move {
        let schema = star_wars::schema_with_config(config.execution)?;
        let response = schema
            .execute(search_query(), ResolvedValue::Null, &StarWarsStore::default())
            .await;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok::<_, anyhow::Error>(())
    })
}

fn search_query() -> Operation {
    let name = || -> Selection { Field::new("name").into() };
    Operation::query([Field::new("search")
        .with_argument("query", Value::String("R2".into()))
        .with_selection_set([
            Field::new("__typename").into(),
            InlineFragment::on("Planet", [name()]).into(),
            InlineFragment::on("Human", [name()]).into(),
            InlineFragment::on("Droid", [name()]).into(),
        ])
        .into()])
}
