use std::{any::Any, fmt, sync::Arc};

use operation::ConstValue;
use serde::{de::DeserializeOwned, Serialize};

use crate::ResolverError;

/// Raw value produced by a resolver, before it is completed against the declared field type.
#[derive(Clone, Debug, Default)]
pub enum ResolvedValue {
    #[default]
    Null,
    Scalar(ConstValue),
    List(Vec<ResolvedValue>),
    Object(SourceObject),
}

impl ResolvedValue {
    /// JSON objects become [`SourceObject`]s whose type is read from their `__typename` key, if
    /// any.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ResolvedValue::Null,
            serde_json::Value::Bool(value) => ResolvedValue::Scalar(ConstValue::Boolean(value)),
            serde_json::Value::Number(value) => ResolvedValue::Scalar(ConstValue::Number(value)),
            serde_json::Value::String(value) => ResolvedValue::Scalar(ConstValue::String(value)),
            serde_json::Value::Array(items) => ResolvedValue::List(items.into_iter().map(Self::from_json).collect()),
            serde_json::Value::Object(map) => ResolvedValue::Object(SourceObject::untyped_json(map)),
        }
    }

    /// A list of objects of the given type, serialized from arbitrary Rust values.
    pub fn list_of<'a, T: Serialize + 'a>(
        type_name: &str,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Result<Self, ResolverError> {
        items
            .into_iter()
            .map(|item| SourceObject::from_serializable(type_name, item).map(ResolvedValue::Object))
            .collect::<Result<Vec<_>, _>>()
            .map(ResolvedValue::List)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ResolvedValue::Null | ResolvedValue::Scalar(ConstValue::Null))
    }

    pub fn as_object(&self) -> Option<&SourceObject> {
        match self {
            ResolvedValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Reads a property of a JSON source object. Missing properties are null.
    pub fn property(&self, name: &str) -> Result<ResolvedValue, ResolverError> {
        match self {
            ResolvedValue::Object(object) => match &object.source {
                Source::Json(map) => Ok(map.get(name).cloned().map(Self::from_json).unwrap_or_default()),
                Source::Opaque(_) => Err(ResolverError::new(format!(
                    "Cannot read the property '{name}' of an opaque {} value",
                    object.type_name().unwrap_or("object")
                ))),
            },
            ResolvedValue::Null => Ok(ResolvedValue::Null),
            _ => Err(ResolverError::new(format!(
                "Cannot read the property '{name}' of a non-object value"
            ))),
        }
    }

    /// Lossy JSON rendering, opaque sources are rendered as null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ResolvedValue::Null => serde_json::Value::Null,
            ResolvedValue::Scalar(value) => value.clone().into_json().unwrap_or_default(),
            ResolvedValue::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            ResolvedValue::Object(object) => match &object.source {
                Source::Json(map) => serde_json::Value::Object(map.as_ref().clone()),
                Source::Opaque(_) => serde_json::Value::Null,
            },
        }
    }
}

impl From<ConstValue> for ResolvedValue {
    fn from(value: ConstValue) -> Self {
        match value {
            ConstValue::Null => ResolvedValue::Null,
            ConstValue::List(items) => ResolvedValue::List(items.into_iter().map(Into::into).collect()),
            value => ResolvedValue::Scalar(value),
        }
    }
}

impl From<SourceObject> for ResolvedValue {
    fn from(object: SourceObject) -> Self {
        ResolvedValue::Object(object)
    }
}

impl From<String> for ResolvedValue {
    fn from(value: String) -> Self {
        ResolvedValue::Scalar(ConstValue::String(value))
    }
}

impl From<&str> for ResolvedValue {
    fn from(value: &str) -> Self {
        ResolvedValue::Scalar(ConstValue::String(value.to_string()))
    }
}

impl From<bool> for ResolvedValue {
    fn from(value: bool) -> Self {
        ResolvedValue::Scalar(ConstValue::Boolean(value))
    }
}

impl From<i32> for ResolvedValue {
    fn from(value: i32) -> Self {
        ResolvedValue::Scalar(ConstValue::Number(value.into()))
    }
}

impl<T: Into<ResolvedValue>> From<Option<T>> for ResolvedValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<ResolvedValue>> From<Vec<T>> for ResolvedValue {
    fn from(items: Vec<T>) -> Self {
        ResolvedValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// An object produced by a resolver along with its runtime type, when known.
///
/// JSON sources support property access, which is what fields without an explicit resolver
/// rely on. Opaque sources can hold any Rust value and must be read through
/// [`SourceObject::downcast_ref`] by custom resolvers.
#[derive(Clone)]
pub struct SourceObject {
    type_name: Option<String>,
    source: Source,
}

#[derive(Clone)]
enum Source {
    Json(Arc<serde_json::Map<String, serde_json::Value>>),
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl SourceObject {
    pub fn json(type_name: impl Into<String>, map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            source: Source::Json(Arc::new(map)),
        }
    }

    pub fn untyped_json(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let type_name = map
            .get("__typename")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        Self {
            type_name,
            source: Source::Json(Arc::new(map)),
        }
    }

    /// Serializes the value into a JSON source. The value must serialize into a map.
    pub fn from_serializable<T: Serialize + ?Sized>(type_name: &str, value: &T) -> Result<Self, ResolverError> {
        match serde_json::to_value(value)? {
            serde_json::Value::Object(map) => Ok(Self::json(type_name, map)),
            _ => Err(ResolverError::new(format!("A {type_name} must be serialized as a map"))),
        }
    }

    pub fn opaque<T: Any + Send + Sync>(type_name: impl Into<String>, value: T) -> Self {
        Self {
            type_name: Some(type_name.into()),
            source: Source::Opaque(Arc::new(value)),
        }
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        match &self.source {
            Source::Json(map) => map.get(name),
            Source::Opaque(_) => None,
        }
    }

    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ResolverError> {
        match &self.source {
            Source::Json(map) => Ok(serde_json::from_value(serde_json::Value::Object(map.as_ref().clone()))?),
            Source::Opaque(_) => Err(ResolverError::new(format!(
                "Cannot deserialize an opaque {} value",
                self.type_name().unwrap_or("object")
            ))),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match &self.source {
            Source::Opaque(value) => value.downcast_ref(),
            Source::Json(_) => None,
        }
    }
}

impl fmt::Debug for SourceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("SourceObject");
        debug.field("type_name", &self.type_name);
        match &self.source {
            Source::Json(map) => debug.field("json", map),
            Source::Opaque(_) => debug.field("opaque", &".."),
        };
        debug.finish()
    }
}
