use schema::{BoundArguments, ResolvedValue, Resolver, ResolverError};

use super::{Episode, StarWarsStore};

type ResolverResult = Result<ResolvedValue, ResolverError>;

fn parent_property<'a>(parent: &'a ResolvedValue, name: &str) -> Result<&'a str, ResolverError> {
    parent
        .as_object()
        .and_then(|object| object.property(name))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| ResolverError::new(format!("Parent value has no '{name}'")))
}

pub(super) fn hero(_: &ResolvedValue, store: &StarWarsStore, arguments: &BoundArguments) -> ResolverResult {
    let episode: Option<Episode> = arguments.get_as("episode")?;
    match store.hero(episode) {
        Some(hero) => hero.to_value(),
        None => Ok(ResolvedValue::Null),
    }
}

pub(super) fn human(_: &ResolvedValue, store: &StarWarsStore, arguments: &BoundArguments) -> ResolverResult {
    let id: String = arguments.get_as("id")?;
    match store.human(&id) {
        Some(human) => human.to_value(),
        None => Ok(ResolvedValue::Null),
    }
}

pub(super) fn droid(_: &ResolvedValue, store: &StarWarsStore, arguments: &BoundArguments) -> ResolverResult {
    let id: String = arguments.get_as("id")?;
    match store.droid(&id) {
        Some(droid) => droid.to_value(),
        None => Ok(ResolvedValue::Null),
    }
}

pub(super) fn search(_: &ResolvedValue, store: &StarWarsStore, arguments: &BoundArguments) -> ResolverResult {
    #[derive(serde::Deserialize)]
    struct SearchArguments {
        query: String,
    }

    let SearchArguments { query } = arguments.deserialize()?;
    store
        .search(&query)
        .into_iter()
        .map(|result| result.to_value())
        .collect::<Result<Vec<_>, _>>()
        .map(ResolvedValue::List)
}

pub(super) fn home_planet(parent: &ResolvedValue, store: &StarWarsStore, _: &BoundArguments) -> ResolverResult {
    let id = parent_property(parent, "id")?;
    match store.human(id).and_then(|human| store.planet(&human.home_planet)) {
        Some(planet) => planet.to_value(),
        None => Ok(ResolvedValue::Null),
    }
}

pub(super) fn residents(parent: &ResolvedValue, store: &StarWarsStore, _: &BoundArguments) -> ResolverResult {
    let id = parent_property(parent, "id")?;
    ResolvedValue::list_of("Human", store.residents(id))
}

pub(super) fn greeting(parent: &ResolvedValue, _: &StarWarsStore, arguments: &BoundArguments) -> ResolverResult {
    let name = parent_property(parent, "name")?;
    let username: String = arguments.get_as("username")?;
    Ok(format!("Hi, {username}! I'm {name}").into())
}

pub(super) fn secret_backstory(_: &ResolvedValue, _: &StarWarsStore, _: &BoundArguments) -> ResolverResult {
    Err(ResolverError::new("secretBackstory is secret."))
}

/// Friends of a character, looked up by their ids.
pub(super) struct Friends;

#[async_trait::async_trait]
impl Resolver<StarWarsStore> for Friends {
    async fn resolve(
        &self,
        parent: &ResolvedValue,
        store: &StarWarsStore,
        _: &BoundArguments,
    ) -> Result<ResolvedValue, ResolverError> {
        let id = parent_property(parent, "id")?;
        let friends = store
            .friends(id)
            .into_iter()
            .map(|friend| friend.to_value())
            .collect::<Result<Vec<_>, _>>()?;
        tracing::trace!("{} friends for {id}", friends.len());
        Ok(ResolvedValue::List(friends))
    }
}
