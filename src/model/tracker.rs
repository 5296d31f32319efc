use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Runtime-owned domain definition, passed through to actions untouched.
pub type Domain = Value;

/// Events returned to the runtime (slot sets, follow-ups, ...).
pub type Event = Value;

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Conversation state as the runtime serializes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Tracker {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "user-42")]
    pub sender_id: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Object)]
    pub slots: HashMap<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Object)]
    pub latest_message: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Vec<Object>)]
    pub events: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub paused: bool,
    pub followup_action: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Object)]
    pub active_loop: Map<String, Value>,
    pub latest_action_name: Option<String>,
}

impl Tracker {
    /// Name of the intent the runtime classified for the last user message.
    pub fn latest_intent(&self) -> Option<&str> {
        self.latest_message
            .get("intent")
            .and_then(|i| i.get("name"))
            .and_then(Value::as_str)
    }
}
