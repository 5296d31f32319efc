use crate::model::tracker::{Domain, Event, Tracker, null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Request body the runtime posts to `/webhook`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ActionCall {
    #[schema(example = "action_create_leave")]
    pub next_action: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "user-42")]
    pub sender_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tracker: Tracker,
    #[schema(value_type = Object)]
    pub domain: Domain,
    #[schema(example = "3.6.0")]
    pub version: Option<String>,
}

impl ActionCall {
    pub fn action_name(&self) -> Option<&str> {
        self.next_action.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// One message queued for the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotMessage {
    #[schema(example = "Leave requested.")]
    pub text: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub buttons: Vec<Value>,
    #[schema(value_type = Vec<Object>)]
    pub elements: Vec<Value>,
    #[schema(value_type = Object)]
    pub custom: Map<String, Value>,
    pub template: Option<String>,
    pub response: Option<String>,
    pub image: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub attachment: Option<Value>,
}

impl BotMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Successful `/webhook` reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "events": [],
    "responses": [{
        "text": "Leave requested.",
        "buttons": [],
        "elements": [],
        "custom": {},
        "template": null,
        "response": null,
        "image": null,
        "attachment": null
    }]
}))]
pub struct ActionResponse {
    #[schema(value_type = Vec<Object>)]
    pub events: Vec<Event>,
    pub responses: Vec<BotMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionInfo {
    #[schema(example = "action_request_asset")]
    pub name: String,
}
