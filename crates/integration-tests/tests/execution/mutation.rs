use integration_tests::{int, leaf, runtime, string, Counter};
use operation::{Field, Operation, Selection};
use pretty_assertions::assert_eq;
use serde_json::json;

fn increment(label: &str, by: i32, delay_ms: i32) -> Selection {
    Field::new("increment")
        .with_alias(label)
        .with_argument("label", string(label))
        .with_argument("by", int(by))
        .with_argument("delayMs", int(delay_ms))
        .into()
}

#[test]
fn mutation_root_fields_run_serially() {
    runtime().block_on(async {
        let counter = Counter::default();

        let operation = Operation::mutation([increment("a", 1, 90), increment("b", 2, 60), increment("c", 3, 0)]);
        let response = counter.post(operation).await;
        assert_eq!(response, json!({"data": {"a": 1, "b": 3, "c": 6}}));
        assert_eq!(counter.counter.completed(), ["a", "b", "c"]);
        assert_eq!(counter.counter.max_in_flight(), 1);

        let response = counter.post(Operation::query([leaf("value")])).await;
        assert_eq!(response, json!({"data": {"value": 6}}));
    });
}

#[test]
fn mutation_errors_do_not_stop_later_fields() {
    runtime().block_on(async {
        let counter = Counter::default();

        let operation = Operation::mutation([
            increment("a", 1, 0),
            Field::new("increment")
                .with_alias("b")
                .with_argument("label", string("b"))
                .into(),
            increment("c", 3, 0),
        ]);
        let response = counter.post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": null,
                "errors": [{
                    "message": "Missing required argument named 'by' of type Int!",
                    "path": ["b"],
                    "extensions": {"code": "ARGUMENT_ERROR"}
                }]
            })
        );
        assert_eq!(counter.counter.value(), 4);
    });
}
