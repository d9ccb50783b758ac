use engine::{ExecutionConfig, FieldConcurrency};
use integration_tests::{int, leaf, object, runtime, string, Counter, StarWars};
use operation::{Field, Operation, Selection};
use pretty_assertions::assert_eq;
use serde_json::json;

fn echo(label: &str, delay_ms: i32) -> Selection {
    Field::new("echo")
        .with_alias(label)
        .with_argument("label", string(label))
        .with_argument("delayMs", int(delay_ms))
        .into()
}

fn slow_echoes() -> Operation {
    Operation::query([echo("a", 90), echo("b", 60), echo("c", 30)])
}

#[test]
fn sibling_fields_run_concurrently() {
    runtime().block_on(async {
        let counter = Counter::default();

        let response = counter.post(slow_echoes()).await;
        assert_eq!(response, json!({"data": {"a": "a", "b": "b", "c": "c"}}));
        assert_eq!(counter.counter.completed(), ["c", "b", "a"]);
        assert_eq!(counter.counter.max_in_flight(), 3);
    });
}

#[test]
fn serial_field_concurrency() {
    runtime().block_on(async {
        let counter = Counter::with_config(ExecutionConfig::default().with_field_concurrency(FieldConcurrency::Serial));

        let response = counter.post(slow_echoes()).await;
        assert_eq!(response, json!({"data": {"a": "a", "b": "b", "c": "c"}}));
        assert_eq!(counter.counter.completed(), ["a", "b", "c"]);
        assert_eq!(counter.counter.max_in_flight(), 1);
    });
}

#[test]
fn list_items_keep_their_order() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("human")
            .with_argument("id", string("1002"))
            .with_selection_set([object("friends", [leaf("name"), object("friends", [leaf("id")])])])
            .into()]);

        let response = StarWars::new().post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": {
                    "human": {
                        "friends": [
                            {
                                "name": "Luke Skywalker",
                                "friends": [{"id": "1002"}, {"id": "1003"}, {"id": "2000"}, {"id": "2001"}]
                            },
                            {
                                "name": "Leia Organa",
                                "friends": [{"id": "1000"}, {"id": "1002"}, {"id": "2000"}, {"id": "2001"}]
                            },
                            {"name": "R2-D2", "friends": [{"id": "1000"}, {"id": "1002"}, {"id": "1003"}]}
                        ]
                    }
                }
            })
        );
    });
}

#[test]
fn schema_is_shared_between_executions() {
    runtime().block_on(async {
        let star_wars = StarWars::new();
        let queries = ["1000", "1001", "1002", "1003", "1004"].map(|id| {
            Operation::query([Field::new("human")
                .with_argument("id", string(id))
                .with_selection_set([leaf("name")])
                .into()])
        });

        let responses = futures_util::future::join_all(queries.into_iter().map(|query| star_wars.post(query))).await;
        let names = responses
            .iter()
            .map(|response| response["data"]["human"]["name"].as_str().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            ["Luke Skywalker", "Darth Vader", "Han Solo", "Leia Organa", "Wilhuff Tarkin"]
        );
    });
}
