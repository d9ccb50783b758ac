use integration_tests::{const_string, leaf, runtime, variable, StarWars};
use operation::{ConstValue, Field, Name, Operation, VariableDefinition, Variables};
use pretty_assertions::assert_eq;
use serde_json::json;

fn hero_of(episode_default: Option<&str>) -> Operation {
    let mut definition = VariableDefinition::new("episode");
    if let Some(episode) = episode_default {
        definition = definition.with_default_value(ConstValue::Enum(Name::new(episode)));
    }
    Operation::query([Field::new("hero")
        .with_argument("episode", variable("episode"))
        .with_selection_set([leaf("name")])
        .into()])
    .with_name("HeroOf")
    .with_variable(definition)
}

#[test]
fn variable_values() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("human")
            .with_argument("id", variable("id"))
            .with_selection_set([leaf("name")])
            .into()])
        .with_variable(VariableDefinition::new("id"));
        let variables = Variables::from_json(json!({"id": "1004"}));

        let response = StarWars::new()
            .post(engine::Request::new(operation).with_variables(variables))
            .await;
        assert_eq!(response, json!({"data": {"human": {"name": "Wilhuff Tarkin"}}}));
    });
}

#[test]
fn variable_defaults() {
    runtime().block_on(async {
        let star_wars = StarWars::new();

        let response = star_wars.post(hero_of(Some("EMPIRE"))).await;
        assert_eq!(response, json!({"data": {"hero": {"name": "Luke Skywalker"}}}));

        // A provided value wins over the default, strings are accepted for enums.
        let request = engine::Request::new(hero_of(Some("EMPIRE")))
            .with_variables(Variables::default().with("episode", const_string("JEDI")));
        let response = star_wars.post(request).await;
        assert_eq!(response, json!({"data": {"hero": {"name": "R2-D2"}}}));

        // Without value nor default the argument is omitted.
        let response = star_wars.post(hero_of(None)).await;
        assert_eq!(response, json!({"data": {"hero": {"name": "R2-D2"}}}));
    });
}

#[test]
fn missing_variables_fall_back_to_argument_defaults() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("search")
            .with_argument("query", variable("text"))
            .with_selection_set([leaf("__typename")])
            .into()]);

        let response = StarWars::new().post(operation).await;
        assert_eq!(response, json!({"data": {"search": [{"__typename": "Droid"}]}}));
    });
}

#[test]
fn null_variable_for_a_required_argument() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("droid")
            .with_argument("id", variable("id"))
            .with_selection_set([leaf("name")])
            .into()]);
        let variables = Variables::default().with("id", ConstValue::Null);

        let response = StarWars::new()
            .execute(engine::Request::new(operation).with_variables(variables))
            .await;
        assert_eq!(
            response.error_messages(),
            ["Found an invalid value for the argument 'id': Found a null where we expected a ID!"]
        );
        assert_eq!(response.to_json()["data"], json!({"droid": null}));
    });
}
