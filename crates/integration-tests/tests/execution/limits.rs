use std::time::Duration;

use engine::ExecutionConfig;
use integration_tests::{int, leaf, object, runtime, string, Counter, StarWars};
use operation::{Field, Operation};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn timeout() {
    runtime().block_on(async {
        let counter = Counter::with_config(ExecutionConfig::default().with_timeout(Duration::from_millis(50)));

        let operation = Operation::query([
            Field::new("echo")
                .with_alias("fast")
                .with_argument("label", string("fast"))
                .into(),
            Field::new("echo")
                .with_alias("slow")
                .with_argument("label", string("slow"))
                .with_argument("delayMs", int(500))
                .into(),
        ]);
        let response = counter.post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": null,
                "errors": [{"message": "Execution timed out", "extensions": {"code": "TIMEOUT"}}]
            })
        );
        assert_eq!(counter.counter.completed(), ["fast"]);
    });
}

#[test]
fn executions_within_the_timeout_complete() {
    runtime().block_on(async {
        let star_wars = StarWars::with_config(ExecutionConfig::default().with_timeout(Duration::from_secs(5)));

        let response = star_wars.post(Operation::query([object("hero", [leaf("name")])])).await;
        assert_eq!(response, json!({"data": {"hero": {"name": "R2-D2"}}}));
    });
}

#[test]
fn depth_limit() {
    runtime().block_on(async {
        let star_wars = StarWars::with_config(ExecutionConfig::default().with_max_depth(2));

        let response = star_wars.post(Operation::query([object("hero", [leaf("name")])])).await;
        assert_eq!(response, json!({"data": {"hero": {"name": "R2-D2"}}}));

        let operation = Operation::query([object("hero", [object("friends", [object("friends", [leaf("name")])])])]);
        let response = star_wars.post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": null,
                "errors": [{
                    "message": "Query is nested too deep: 4 levels where at most 2 are allowed",
                    "extensions": {"code": "OPERATION_VALIDATION_ERROR"}
                }]
            })
        );
    });
}
