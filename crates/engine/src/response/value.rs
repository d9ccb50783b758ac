use operation::{ConstValue, Name};
use serde::ser::{SerializeMap, SerializeSeq};

/// Completed value of the response. Objects keep their fields in query order.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseValue {
    #[default]
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<ResponseValue>),
    Object(Vec<(Name, ResponseValue)>),
}

impl ResponseValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ResponseValue::Null)
    }

    /// Field of an object by response key.
    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        match self {
            ResponseValue::Object(fields) => fields
                .iter()
                .find(|(name, _)| name.as_str() == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResponseValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ResponseValue::Null,
            serde_json::Value::Bool(value) => ResponseValue::Boolean(value),
            serde_json::Value::Number(value) => ResponseValue::Number(value),
            serde_json::Value::String(value) => ResponseValue::String(value),
            serde_json::Value::Array(items) => ResponseValue::List(items.into_iter().map(Self::from_json).collect()),
            serde_json::Value::Object(fields) => ResponseValue::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (Name::new(key), Self::from_json(value)))
                    .collect(),
            ),
        }
    }

    pub fn into_json(self) -> serde_json::Value {
        match self {
            ResponseValue::Null => serde_json::Value::Null,
            ResponseValue::Boolean(value) => serde_json::Value::Bool(value),
            ResponseValue::Number(value) => serde_json::Value::Number(value),
            ResponseValue::String(value) => serde_json::Value::String(value),
            ResponseValue::List(items) => serde_json::Value::Array(items.into_iter().map(Self::into_json).collect()),
            ResponseValue::Object(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value.into_json()))
                    .collect(),
            ),
        }
    }
}

impl From<ConstValue> for ResponseValue {
    fn from(value: ConstValue) -> Self {
        match value {
            ConstValue::Null => ResponseValue::Null,
            ConstValue::Boolean(value) => ResponseValue::Boolean(value),
            ConstValue::Number(value) => ResponseValue::Number(value),
            ConstValue::String(value) => ResponseValue::String(value),
            ConstValue::Enum(value) => ResponseValue::String(value.to_string()),
            ConstValue::Binary(bytes) => {
                ResponseValue::List(bytes.iter().map(|byte| ResponseValue::Number((*byte).into())).collect())
            }
            ConstValue::List(items) => ResponseValue::List(items.into_iter().map(Into::into).collect()),
            ConstValue::Object(fields) => {
                ResponseValue::Object(fields.into_iter().map(|(key, value)| (key, value.into())).collect())
            }
        }
    }
}

impl serde::Serialize for ResponseValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ResponseValue::Null => serializer.serialize_none(),
            ResponseValue::Boolean(value) => serializer.serialize_bool(*value),
            ResponseValue::Number(value) => value.serialize(serializer),
            ResponseValue::String(value) => serializer.serialize_str(value),
            ResponseValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ResponseValue::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key.as_str(), value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn fields_keep_their_order() {
        let value = ResponseValue::Object(vec![
            (Name::new("name"), ResponseValue::String("R2-D2".into())),
            (Name::new("__typename"), ResponseValue::String("Droid".into())),
            (Name::new("friends"), ResponseValue::List(vec![ResponseValue::Null])),
        ]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"name":"R2-D2","__typename":"Droid","friends":[null]}"#
        );
        assert_eq!(value.get("__typename").and_then(ResponseValue::as_str), Some("Droid"));
        assert_eq!(
            value.into_json(),
            json!({"name": "R2-D2", "__typename": "Droid", "friends": [null]})
        );
    }

    #[test]
    fn enums_are_rendered_as_strings() {
        let value = ResponseValue::from(ConstValue::List(vec![
            ConstValue::Enum(Name::new("NEWHOPE")),
            ConstValue::Number(3.into()),
        ]));
        assert_eq!(value.into_json(), json!(["NEWHOPE", 3]));
    }
}
