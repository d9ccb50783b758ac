use integration_tests::{enum_value, int, leaf, runtime, string, StarWars};
use operation::{Field, Operation, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn human_greeting(username: Value) -> Operation {
    Operation::query([Field::new("human")
        .with_argument("id", string("1003"))
        .with_selection_set([Field::new("greeting").with_argument("username", username).into()])
        .into()])
}

#[test]
fn greeting() {
    runtime().block_on(async {
        let response = StarWars::new().post(human_greeting(string("Han"))).await;
        assert_eq!(
            response,
            json!({"data": {"human": {"greeting": "Hi, Han! I'm Leia Organa"}}})
        );
    });
}

#[test]
fn integer_ids_are_coerced() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("droid")
            .with_argument("id", int(2001))
            .with_selection_set([leaf("name")])
            .into()]);
        let response = StarWars::new().post(operation).await;
        assert_eq!(response, json!({"data": {"droid": {"name": "R2-D2"}}}));
    });
}

#[test]
fn enum_argument_given_as_string() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("hero")
            .with_argument("episode", string("EMPIRE"))
            .with_selection_set([leaf("name")])
            .into()]);
        let response = StarWars::new().post(operation).await;
        assert_eq!(response, json!({"data": {"hero": {"name": "Luke Skywalker"}}}));
    });
}

#[rstest]
#[case::unknown_enum_value(
    "hero",
    "episode",
    enum_value("PHANTOM"),
    "Found an invalid value for the argument 'episode': Found an unknown enum value 'PHANTOM' for the enum Episode"
)]
#[case::wrong_scalar(
    "hero",
    "episode",
    int(4),
    "Found an invalid value for the argument 'episode': Found a Integer value where we expected a Episode enum value"
)]
#[case::explicit_null(
    "search",
    "query",
    Value::Null,
    "Found an invalid value for the argument 'query': Found a null where we expected a String!"
)]
#[case::unknown_argument("hero", "season", int(4), "Unknown argument named 'season'")]
fn argument_errors(#[case] field: &str, #[case] argument: &str, #[case] value: Value, #[case] message: &str) {
    runtime().block_on(async {
        let operation = Operation::query([Field::new(field)
            .with_argument(argument, value)
            .with_selection_set([leaf("__typename")])
            .into()]);
        let response = StarWars::new().post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": {field: null},
                "errors": [{
                    "message": message,
                    "path": [field],
                    "extensions": {"code": "ARGUMENT_ERROR"}
                }]
            })
        );
    });
}
