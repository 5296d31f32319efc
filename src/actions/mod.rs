pub mod create_leave;
pub mod request_asset;

use crate::error::WebhookError;
use crate::model::action_call::{ActionCall, ActionInfo, ActionResponse, BotMessage};
use crate::model::tracker::{Domain, Event, Tracker};
use crate::utils::backend_client::BackendClient;
use async_trait::async_trait;
use derive_more::Display;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Collects the messages an action wants sent back to the user.
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    pub messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(BotMessage::text(text));
    }
}

#[derive(Debug, Display)]
pub enum ActionError {
    /// The action declines to run; the runtime may try something else.
    #[allow(dead_code)]
    #[display(fmt = "{}", _0)]
    Rejected(String),
    #[display(fmt = "{:#}", _0)]
    Failed(anyhow::Error),
}

impl From<anyhow::Error> for ActionError {
    fn from(e: anyhow::Error) -> Self {
        ActionError::Failed(e)
    }
}

/// A custom action the runtime can trigger by name.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &str;

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        domain: &Domain,
    ) -> Result<Vec<Event>, ActionError>;
}

/// Actions keyed by name. Built once at startup and shared read-only.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every action this server ships.
    pub fn with_builtin_actions(backend: BackendClient) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(create_leave::CreateLeaveAction::new(backend)));
        registry.register(Arc::new(request_asset::RequestAssetAction));
        registry
    }

    pub fn register(&mut self, action: Arc<dyn Action>) {
        let name = action.name().to_string();
        if self.actions.insert(name.clone(), action).is_some() {
            warn!(action = %name, "Replaced previously registered action");
        }
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.actions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn descriptions(&self) -> Vec<ActionInfo> {
        self.names()
            .into_iter()
            .map(|name| ActionInfo { name })
            .collect()
    }

    pub async fn run(&self, call: &ActionCall) -> Result<ActionResponse, WebhookError> {
        let name = call.action_name().ok_or_else(|| {
            warn!("Received an action call without an action");
            WebhookError::MissingAction
        })?;

        let action = self
            .actions
            .get(name)
            .ok_or_else(|| WebhookError::ActionNotFound(name.to_string()))?;

        debug!(action = name, "Running action");

        let mut dispatcher = CollectingDispatcher::new();
        let events = action
            .run(&mut dispatcher, &call.tracker, &call.domain)
            .await
            .map_err(|e| match e {
                ActionError::Rejected(message) => {
                    info!(action = name, %message, "Action rejected");
                    WebhookError::Rejected {
                        action_name: name.to_string(),
                        message,
                    }
                }
                ActionError::Failed(e) => {
                    error!(action = name, error = %format!("{:#}", e), "Action failed");
                    WebhookError::Failed {
                        action_name: name.to_string(),
                        message: format!("{:#}", e),
                    }
                }
            })?;

        Ok(ActionResponse {
            events,
            responses: dispatcher.messages,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, web};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    pub type Received = Arc<Mutex<Vec<(String, Value)>>>;

    /// Starts a fake HR backend that records each request path and JSON body
    /// and answers with `status`. Returns its base URL.
    pub fn spawn_backend(status: StatusCode) -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let server = HttpServer::new(move || {
            let sink = sink.clone();
            App::new().default_service(web::to(
                move |req: actix_web::HttpRequest, body: web::Json<Value>| {
                    let sink = sink.clone();
                    async move {
                        sink.lock()
                            .unwrap()
                            .push((req.path().to_string(), body.into_inner()));
                        HttpResponse::build(status).finish()
                    }
                },
            ))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        (format!("http://{}", addr), received)
    }
}
