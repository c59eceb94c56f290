use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A user record as served by the users endpoint.
///
/// The api is not strict about what it returns, so every field is optional and a field with
/// the wrong type reads as missing instead of rejecting the record. Anything we don't model
/// is carried along in `extra` so a merge never drops it.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct User {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the PUT sent when a user is edited.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "whole_number")]
    pub age: f64,
    pub avatar_url: String,
    pub gender: String,
}

impl User {
    /// Shallow merge of an edit into this record. Fields the form doesn't touch are kept.
    pub fn apply(&mut self, update: &UserUpdate) {
        self.id = Some(update.id);
        self.name = Some(update.name.clone());
        self.age = Some(update.age);
        self.avatar_url = Some(update.avatar_url.clone());
        self.gender = Some(update.gender.clone());
    }
}

/// Ids arrive as integers, whole floats (`8.0`) or numeric strings (`"7"`).
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_i64().or_else(|| number.as_f64().and_then(whole)),
        Some(Value::String(text)) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    })
}

fn whole(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
        .then_some(value as i64)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Ages show up as numbers, numeric strings or null depending on who wrote the record.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Writes `30` instead of `30.0` so the api sees the same thing a browser would send.
fn whole_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match whole(*value) {
        Some(value) => serializer.serialize_i64(value),
        None => serializer.serialize_f64(*value),
    }
}
