use integration_tests::{leaf, leaves, object, runtime, spread, string, StarWars};
use operation::{Field, Operation, OperationType};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn secret_backstory() {
    runtime().block_on(async {
        let response = StarWars::new()
            .post(Operation::query([object("hero", leaves(["id", "name", "secretBackstory"]))]))
            .await;
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": {
            "hero": {
              "id": "2001",
              "name": "R2-D2",
              "secretBackstory": null
            }
          },
          "errors": [
            {
              "message": "secretBackstory is secret.",
              "path": [
                "hero",
                "secretBackstory"
              ],
              "extensions": {
                "code": "RESOLVER_ERROR"
              }
            }
          ]
        }
        "#);
    });
}

#[test]
fn secret_backstory_of_every_friend() {
    runtime().block_on(async {
        let response = StarWars::new()
            .post(Operation::query([object(
                "hero",
                [leaf("name"), object("friends", leaves(["name", "secretBackstory"]))],
            )]))
            .await;
        assert_eq!(
            response,
            json!({
                "data": {
                    "hero": {
                        "name": "R2-D2",
                        "friends": [
                            {"name": "Luke Skywalker", "secretBackstory": null},
                            {"name": "Han Solo", "secretBackstory": null},
                            {"name": "Leia Organa", "secretBackstory": null}
                        ]
                    }
                },
                "errors": [
                    {
                        "message": "secretBackstory is secret.",
                        "path": ["hero", "friends", 0, "secretBackstory"],
                        "extensions": {"code": "RESOLVER_ERROR"}
                    },
                    {
                        "message": "secretBackstory is secret.",
                        "path": ["hero", "friends", 1, "secretBackstory"],
                        "extensions": {"code": "RESOLVER_ERROR"}
                    },
                    {
                        "message": "secretBackstory is secret.",
                        "path": ["hero", "friends", 2, "secretBackstory"],
                        "extensions": {"code": "RESOLVER_ERROR"}
                    }
                ]
            })
        );
    });
}

#[test]
fn unknown_root_field() {
    runtime().block_on(async {
        let response = StarWars::new()
            .post(Operation::query([leaf("__typename"), object("villain", [leaf("name")])]))
            .await;
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": null,
          "errors": [
            {
              "message": "Could not find a field named villain on Query",
              "extensions": {
                "code": "OPERATION_VALIDATION_ERROR"
              }
            }
          ]
        }
        "#);
    });
}

#[test]
fn unknown_nested_field() {
    runtime().block_on(async {
        let response = StarWars::new()
            .post(Operation::query([object("hero", leaves(["name", "lightsaber"]))]))
            .await;
        assert_eq!(
            response,
            json!({
                "data": {"hero": {"name": "R2-D2", "lightsaber": null}},
                "errors": [{
                    "message": "Could not find a field named lightsaber on Droid",
                    "path": ["hero", "lightsaber"],
                    "extensions": {"code": "EXECUTION_ERROR"}
                }]
            })
        );
    });
}

#[test]
fn request_errors() {
    runtime().block_on(async {
        let star_wars = StarWars::new();
        let message = |response: engine::Response| {
            assert!(response.data.is_none());
            assert_eq!(response.errors.len(), 1);
            assert_eq!(response.errors[0].code, engine::ErrorCode::OperationValidationError);
            response.errors[0].message.to_string()
        };

        let response = star_wars.execute(Operation::mutation([leaf("__typename")])).await;
        assert_eq!(message(response), "Schema does not define a mutation root type");

        let response = star_wars
            .execute(Operation::new(OperationType::Subscription, [leaf("__typename")]))
            .await;
        assert_eq!(message(response), "Subscriptions are not supported");

        let response = star_wars
            .execute(Operation::query([object("hero", [spread("HeroFields")])]))
            .await;
        assert_eq!(message(response), "Unknown fragment named 'HeroFields'");
    });
}

#[test]
fn non_null_field_errors_null_the_parent() {
    runtime().block_on(async {
        // greeting is a String! and its username argument is missing.
        let operation = Operation::query([
            Field::new("human")
                .with_argument("id", string("1002"))
                .with_selection_set(leaves(["name", "greeting"]))
                .into(),
            object("hero", [leaf("name")]),
        ]);
        let response = StarWars::new().post(operation).await;
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": {
            "human": null,
            "hero": {
              "name": "R2-D2"
            }
          },
          "errors": [
            {
              "message": "Missing required argument named 'username' of type String!",
              "path": [
                "human",
                "greeting"
              ],
              "extensions": {
                "code": "ARGUMENT_ERROR"
              }
            }
          ]
        }
        "#);
    });
}
