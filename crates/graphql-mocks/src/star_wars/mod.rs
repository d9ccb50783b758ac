//! The Star Wars schema: a `Character` interface implemented by humans and droids, the planets
//! they live on and a `SearchResult` union over all three.

mod data;
mod resolvers;

use engine::{ExecutionConfig, Schema};
use operation::ConstValue;
use schema::{
    EnumType, FieldDefinition, FieldResolver, InputValueDefinition, InterfaceType, ObjectType, RegistryError,
    TypeRef, TypeRegistry, UnionType,
};

pub use data::{Character, Droid, Episode, Human, Planet, SearchResult, StarWarsStore};

pub fn schema() -> Result<Schema<StarWarsStore>, RegistryError> {
    Schema::new(registry()?)
}

pub fn schema_with_config(config: ExecutionConfig) -> Result<Schema<StarWarsStore>, RegistryError> {
    Schema::with_config(registry()?, config)
}

/// The type registry, not finalized yet.
pub fn registry() -> Result<TypeRegistry<StarWarsStore>, RegistryError> {
    let mut registry = TypeRegistry::new();

    registry.register(EnumType::new("Episode", ["NEWHOPE", "EMPIRE", "JEDI"]))?;

    registry.register(
        InterfaceType::new("Character")
            .field(FieldDefinition::new("id", required("ID")))
            .field(FieldDefinition::new("name", required("String")))
            .field(FieldDefinition::new("friends", TypeRef::named("Character").list()))
            .field(FieldDefinition::new("appearsIn", required_list("Episode")))
            .field(FieldDefinition::new("secretBackstory", TypeRef::named("String"))),
    )?;

    registry.register(
        ObjectType::new("Planet")
            .field(FieldDefinition::new("id", required("ID")))
            .field(FieldDefinition::new("name", required("String")))
            .field(FieldDefinition::new("diameter", required("Int")))
            .field(FieldDefinition::new("rotationPeriod", required("Int")))
            .field(FieldDefinition::new("orbitalPeriod", required("Int")))
            .field(FieldDefinition::new("residents", required_list("Human")).resolve_with(resolvers::residents)),
    )?;

    registry.register(
        ObjectType::new("Human")
            .implements("Character")
            .field(FieldDefinition::new("id", required("ID")))
            .field(FieldDefinition::new("name", required("String")))
            .field(friends())
            .field(FieldDefinition::new("appearsIn", required_list("Episode")))
            .field(secret_backstory())
            .field(FieldDefinition::new("homePlanet", TypeRef::named("Planet")).resolve_with(resolvers::home_planet))
            .field(
                FieldDefinition::new("greeting", required("String"))
                    .argument(InputValueDefinition::new("username", required("String")))
                    .resolve_with(resolvers::greeting),
            ),
    )?;

    registry.register(
        ObjectType::new("Droid")
            .implements("Character")
            .field(FieldDefinition::new("id", required("ID")))
            .field(FieldDefinition::new("name", required("String")))
            .field(friends())
            .field(FieldDefinition::new("appearsIn", required_list("Episode")))
            .field(secret_backstory())
            .field(FieldDefinition::new("primaryFunction", required("String"))),
    )?;

    registry.register(UnionType::new("SearchResult", ["Planet", "Human", "Droid"]))?;

    registry.register(
        ObjectType::new("Query")
            .field(
                FieldDefinition::new("hero", TypeRef::named("Character"))
                    .argument(InputValueDefinition::new("episode", TypeRef::named("Episode")))
                    .resolve_with(resolvers::hero),
            )
            .field(
                FieldDefinition::new("human", TypeRef::named("Human"))
                    .argument(InputValueDefinition::new("id", required("ID")))
                    .resolve_with(resolvers::human),
            )
            .field(
                FieldDefinition::new("droid", TypeRef::named("Droid"))
                    .argument(InputValueDefinition::new("id", required("ID")))
                    .resolve_with(resolvers::droid),
            )
            .field(
                FieldDefinition::new("search", TypeRef::named("SearchResult").list())
                    .argument(
                        InputValueDefinition::new("query", required("String"))
                            .default_value(ConstValue::String("R2-D2".into())),
                    )
                    .resolve_with(resolvers::search),
            ),
    )?;

    Ok(registry)
}

fn required(name: &str) -> TypeRef {
    TypeRef::named(name).non_null()
}

fn required_list(name: &str) -> TypeRef {
    TypeRef::named(name).non_null().list().non_null()
}

fn friends() -> FieldDefinition<StarWarsStore> {
    FieldDefinition::new("friends", TypeRef::named("Character").list())
        .resolver(FieldResolver::custom(resolvers::Friends))
}

fn secret_backstory() -> FieldDefinition<StarWarsStore> {
    FieldDefinition::new("secretBackstory", TypeRef::named("String")).resolve_with(resolvers::secret_backstory)
}
