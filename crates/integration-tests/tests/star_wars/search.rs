use integration_tests::{enum_value, leaf, leaves, object, on, runtime, string, StarWars};
use operation::{Field, Operation};
use pretty_assertions::assert_eq;
use serde_json::json;

fn search(query: Option<&str>) -> Operation {
    let mut search = Field::new("search");
    if let Some(query) = query {
        search = search.with_argument("query", string(query));
    }
    Operation::query([search
        .with_selection_set([
            leaf("__typename"),
            on("Planet", [leaf("name")]),
            on("Human", [leaf("name")]),
            on("Droid", [leaf("name")]),
        ])
        .into()])
}

#[test]
fn search_r2() {
    runtime().block_on(async {
        let response = StarWars::new().post(search(Some("R2"))).await;
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"data":{"search":[{"__typename":"Droid","name":"R2-D2"}]}}"#
        );
    });
}

#[test]
fn search_defaults_to_r2d2() {
    runtime().block_on(async {
        let star_wars = StarWars::new();
        let omitted = star_wars.post(search(None)).await;
        let supplied = star_wars.post(search(Some("R2-D2"))).await;
        assert_eq!(omitted, supplied);
        assert_eq!(omitted, json!({"data": {"search": [{"__typename": "Droid", "name": "R2-D2"}]}}));
    });
}

#[test]
fn search_filters_by_runtime_type() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("search")
            .with_argument("query", string("o"))
            .with_selection_set([
                leaf("__typename"),
                on("Planet", [leaf("diameter")]),
                on("Character", [leaf("name")]),
            ])
            .into()]);
        let response = StarWars::new().post(operation).await;
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": {
            "search": [
              {
                "__typename": "Planet",
                "diameter": 10465
              },
              {
                "__typename": "Human",
                "name": "Han Solo"
              },
              {
                "__typename": "Human",
                "name": "Leia Organa"
              },
              {
                "__typename": "Droid",
                "name": "C-3PO"
              }
            ]
          }
        }
        "#);
    });
}

#[test]
fn hero_depends_on_the_episode() {
    runtime().block_on(async {
        let operation = Operation::query([
            Field::new("hero")
                .with_alias("empireHero")
                .with_argument("episode", enum_value("EMPIRE"))
                .with_selection_set(leaves(["__typename", "name"]))
                .into(),
            Field::new("hero")
                .with_alias("jediHero")
                .with_argument("episode", enum_value("JEDI"))
                .with_selection_set(leaves(["__typename", "name"]))
                .into(),
            object("hero", leaves(["__typename", "name"])),
        ]);
        let response = StarWars::new().post(operation).await;
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": {
            "empireHero": {
              "__typename": "Human",
              "name": "Luke Skywalker"
            },
            "jediHero": {
              "__typename": "Droid",
              "name": "R2-D2"
            },
            "hero": {
              "__typename": "Droid",
              "name": "R2-D2"
            }
          }
        }
        "#);
    });
}

#[test]
fn relations() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("human")
            .with_argument("id", string("1000"))
            .with_selection_set([
                leaf("name"),
                leaf("appearsIn"),
                object("homePlanet", [leaf("name"), object("residents", [leaf("name")])]),
                object("friends", leaves(["__typename", "name"])),
            ])
            .into()]);
        let response = StarWars::new().post(operation).await;
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": {
            "human": {
              "name": "Luke Skywalker",
              "appearsIn": [
                "NEWHOPE",
                "EMPIRE",
                "JEDI"
              ],
              "homePlanet": {
                "name": "Tatooine",
                "residents": [
                  {
                    "name": "Luke Skywalker"
                  },
                  {
                    "name": "Darth Vader"
                  }
                ]
              },
              "friends": [
                {
                  "__typename": "Human",
                  "name": "Han Solo"
                },
                {
                  "__typename": "Human",
                  "name": "Leia Organa"
                },
                {
                  "__typename": "Droid",
                  "name": "C-3PO"
                },
                {
                  "__typename": "Droid",
                  "name": "R2-D2"
                }
              ]
            }
          }
        }
        "#);
    });
}

#[test]
fn planets_and_droids() {
    runtime().block_on(async {
        let operation = Operation::query([
            Field::new("droid")
                .with_argument("id", string("2000"))
                .with_selection_set(leaves(["id", "name", "primaryFunction"]))
                .into(),
            Field::new("search")
                .with_argument("query", string("alderaan"))
                .with_selection_set([on(
                    "Planet",
                    [
                        leaf("id"),
                        leaf("rotationPeriod"),
                        leaf("orbitalPeriod"),
                        object("residents", [leaf("name")]),
                    ],
                )])
                .into(),
        ]);
        let response = StarWars::new().post(operation).await;
        assert_eq!(
            response,
            json!({
                "data": {
                    "droid": {"id": "2000", "name": "C-3PO", "primaryFunction": "Protocol"},
                    "search": [{
                        "id": "10002",
                        "rotationPeriod": 24,
                        "orbitalPeriod": 364,
                        "residents": [{"name": "Han Solo"}, {"name": "Leia Organa"}, {"name": "Wilhuff Tarkin"}]
                    }]
                }
            })
        );
    });
}

#[test]
fn unknown_ids_are_null() {
    runtime().block_on(async {
        let operation = Operation::query([Field::new("human")
            .with_argument("id", string("3000"))
            .with_selection_set([leaf("name")])
            .into()]);
        let response = StarWars::new().post(operation).await;
        assert_eq!(response, json!({"data": {"human": null}}));
    });
}
