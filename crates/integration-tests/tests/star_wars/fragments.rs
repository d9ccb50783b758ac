use integration_tests::{leaf, leaves, object, on, runtime, spread, string, variable, StarWars};
use operation::{
    ConstValue, Directive, Field, FragmentDefinition, FragmentSpread, InlineFragment, Operation, Value, Variables,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn named_fragments() {
    runtime().block_on(async {
        let operation = Operation::query([
            object("hero", [spread("CharacterFields")]),
            Field::new("human")
                .with_argument("id", string("1001"))
                .with_selection_set([spread("CharacterFields"), leaf("__typename")])
                .into(),
        ])
        .with_fragment(
            "CharacterFields",
            FragmentDefinition::new(
                "Character",
                [
                    leaf("name"),
                    on("Droid", [leaf("primaryFunction")]),
                    on("Human", [object("homePlanet", [leaf("name")])]),
                ],
            ),
        );

        let response = StarWars::new().post(operation).await;
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": {
            "hero": {
              "name": "R2-D2",
              "primaryFunction": "Astromech"
            },
            "human": {
              "name": "Darth Vader",
              "homePlanet": {
                "name": "Tatooine"
              },
              "__typename": "Human"
            }
          }
        }
        "#);
    });
}

#[test]
fn fragments_on_other_types_are_ignored() {
    runtime().block_on(async {
        let operation = Operation::query([object(
            "hero",
            [
                on("Human", [leaf("id")]),
                spread("PlanetFields"),
                InlineFragment::new([leaf("name")]).into(),
            ],
        )])
        .with_fragment("PlanetFields", FragmentDefinition::new("Planet", [leaf("diameter")]));

        let response = StarWars::new().post(operation).await;
        assert_eq!(response, json!({"data": {"hero": {"name": "R2-D2"}}}));
    });
}

#[test]
fn aliases_and_merged_selections() {
    runtime().block_on(async {
        let operation = Operation::query([
            Field::new("human")
                .with_alias("luke")
                .with_argument("id", string("1000"))
                .with_selection_set([leaf("name")])
                .into(),
            Field::new("human")
                .with_alias("leia")
                .with_argument("id", string("1003"))
                .with_selection_set([leaf("name")])
                .into(),
            object("hero", [leaf("name")]),
            object("hero", [leaf("id"), Field::new("name").with_alias("callSign").into()]),
        ]);

        let response = StarWars::new().post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": {
                    "luke": {"name": "Luke Skywalker"},
                    "leia": {"name": "Leia Organa"},
                    "hero": {"name": "R2-D2", "id": "2001", "callSign": "R2-D2"}
                }
            })
        );
    });
}

#[test]
fn skip_and_include() {
    runtime().block_on(async {
        let operation = Operation::query([object(
            "hero",
            [
                leaf("name"),
                Field::new("id").with_directive(Directive::skip(Value::Boolean(true))).into(),
                Field::new("friends")
                    .with_directive(Directive::include(variable("withFriends")))
                    .with_selection_set(leaves(["name"]))
                    .into(),
                InlineFragment::on("Droid", [leaf("primaryFunction")])
                    .with_directive(Directive::skip(variable("withFriends")))
                    .into(),
                FragmentSpread::new("Appearances")
                    .with_directive(Directive::include(Value::Boolean(false)))
                    .into(),
            ],
        )])
        .with_fragment("Appearances", FragmentDefinition::new("Character", [leaf("appearsIn")]));

        let star_wars = StarWars::new();

        let request = engine::Request::new(operation.clone())
            .with_variables(Variables::default().with("withFriends", ConstValue::Boolean(false)));
        let response = star_wars.post(request).await;
        assert_eq!(
            response,
            json!({"data": {"hero": {"name": "R2-D2", "primaryFunction": "Astromech"}}})
        );

        let request = engine::Request::new(operation)
            .with_variables(Variables::default().with("withFriends", ConstValue::Boolean(true)));
        let response = star_wars.post(request).await;
        assert_eq!(
            response,
            json!({
                "data": {
                    "hero": {
                        "name": "R2-D2",
                        "friends": [{"name": "Luke Skywalker"}, {"name": "Han Solo"}, {"name": "Leia Organa"}]
                    }
                }
            })
        );
    });
}

#[test]
fn invalid_directives() {
    runtime().block_on(async {
        let star_wars = StarWars::new();

        let operation = Operation::query([object(
            "hero",
            [Field::new("name").with_directive(Directive::new("deprecated")).into()],
        )]);
        let response = star_wars.post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": null,
                "errors": [{
                    "message": "Unknown directive '@deprecated'",
                    "extensions": {"code": "OPERATION_VALIDATION_ERROR"}
                }]
            })
        );

        let operation = Operation::query([object(
            "hero",
            [Field::new("name").with_directive(Directive::skip(variable("hidden"))).into()],
        )]);
        let response = star_wars.execute(operation).await;
        assert_eq!(
            response.error_messages(),
            ["Directive '@skip' expects a Boolean value for its argument 'if'"]
        );
    });
}

#[test]
fn fragment_cycles_are_rejected() {
    runtime().block_on(async {
        let operation = Operation::query([object("hero", [spread("A")])])
            .with_fragment("A", FragmentDefinition::new("Character", [leaf("name"), spread("B")]))
            .with_fragment("B", FragmentDefinition::new("Character", [object("friends", [spread("A")])]));

        let response = StarWars::new().execute(operation).await;
        assert!(response.data.is_none());
        assert_eq!(response.error_messages(), ["Fragment 'A' spreads itself"]);
    });
}
