use indexmap::IndexMap;
use operation::{ConstValue, Name};
use serde::de::DeserializeOwned;

use crate::ResolverError;

/// Arguments of a field after binding: coerced to their declared types, defaults applied and
/// omitted nullable arguments absent. Ordered like the field definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments(IndexMap<Name, ConstValue>);

impl BoundArguments {
    #[must_use]
    pub fn with(mut self, name: &str, value: ConstValue) -> Self {
        self.insert(Name::new(name), value);
        self
    }

    pub fn insert(&mut self, name: Name, value: ConstValue) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&ConstValue> {
        self.0
            .iter()
            .find(|(argument, _)| argument.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &ConstValue)> {
        self.0.iter()
    }

    /// Decodes a single argument. An absent argument is decoded from null, so `Option<T>` can
    /// be used for nullable arguments.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, ResolverError> {
        let value = match self.get(name) {
            Some(value) => serde_json::to_value(value)?,
            None => serde_json::Value::Null,
        };
        serde_json::from_value(value)
            .map_err(|err| ResolverError::new(format!("Invalid argument '{name}': {err}")))
    }

    /// Decodes all arguments at once into a struct with one field per argument.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ResolverError> {
        let mut map = serde_json::Map::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            map.insert(name.to_string(), serde_json::to_value(value)?);
        }
        serde_json::from_value(serde_json::Value::Object(map))
            .map_err(|err| ResolverError::new(format!("Invalid arguments: {err}")))
    }
}

impl FromIterator<(Name, ConstValue)> for BoundArguments {
    fn from_iter<T: IntoIterator<Item = (Name, ConstValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
