use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{ConstValue, Name};

/// Variable values supplied with a request, keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<Name, ConstValue>);

impl Variables {
    /// Reads variables from a JSON object. Anything else, including objects with keys that are
    /// not valid names, yields no variables.
    pub fn from_json(value: serde_json::Value) -> Self {
        match ConstValue::from_json(value) {
            Ok(ConstValue::Object(map)) => Self(map.into_iter().collect()),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: ConstValue) -> Self {
        self.insert(Name::new(name), value);
        self
    }

    /// Sets a variable, replacing any previous value.
    pub fn insert(&mut self, name: Name, value: ConstValue) {
        self.0.insert(name, value);
    }

    pub fn get_value(&self, name: &str) -> Option<&ConstValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// A `null` variables payload is the same as none at all.
impl<'de> Deserialize<'de> for Variables {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<BTreeMap<Name, ConstValue>>::deserialize(deserializer)?;
        Ok(Self(map.unwrap_or_default()))
    }
}
