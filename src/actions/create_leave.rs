use super::{Action, ActionError, CollectingDispatcher};
use crate::model::leave_request::LeaveRequestPayload;
use crate::model::tracker::{Domain, Event, Tracker};
use crate::utils::backend_client::BackendClient;
use async_trait::async_trait;
use tracing::info;

pub const LEAVE_REQUESTED: &str = "Leave requested.";

/// Files a leave request with the HR backend on behalf of the bot user.
pub struct CreateLeaveAction {
    backend: BackendClient,
}

impl CreateLeaveAction {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for CreateLeaveAction {
    fn name(&self) -> &str {
        "action_create_leave"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>, ActionError> {
        let payload = LeaveRequestPayload::from_bot()?;

        // The backend's answer is not inspected; only transport errors abort.
        let status = self.backend.create_leave(&payload).await?;
        info!(
            sender_id = %tracker.sender_id,
            status = status.as_u16(),
            "Leave request posted"
        );

        dispatcher.utter_message(LEAVE_REQUESTED);
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::spawn_backend;
    use crate::model::action_call::BotMessage;
    use actix_web::http::StatusCode;
    use serde_json::json;

    async fn run_against(base_url: &str) -> (Result<Vec<Event>, ActionError>, CollectingDispatcher) {
        let action = CreateLeaveAction::new(BackendClient::new(base_url));
        let mut dispatcher = CollectingDispatcher::new();
        let result = action
            .run(&mut dispatcher, &Tracker::default(), &Domain::Null)
            .await;
        (result, dispatcher)
    }

    #[actix_web::test]
    async fn posts_fixed_payload_to_create_endpoint() {
        let (base_url, received) = spawn_backend(StatusCode::CREATED);

        let (result, dispatcher) = run_against(&base_url).await;

        assert!(result.unwrap().is_empty());
        assert_eq!(dispatcher.messages, vec![BotMessage::text("Leave requested.")]);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0, "/api/leaves/create");
        assert_eq!(
            received[0].1,
            json!({
                "user_email": "alice@example.com",
                "start_date": "2025-09-10",
                "end_date": "2025-09-12",
                "reason": "via bot"
            })
        );
    }

    #[actix_web::test]
    async fn payload_ignores_conversation_state() {
        let (base_url, received) = spawn_backend(StatusCode::OK);
        let action = CreateLeaveAction::new(BackendClient::new(base_url));
        let tracker: Tracker = serde_json::from_value(json!({
            "sender_id": "bob",
            "slots": {"email": "bob@example.com", "start_date": "2026-01-01"}
        }))
        .unwrap();

        let mut dispatcher = CollectingDispatcher::new();
        action
            .run(&mut dispatcher, &tracker, &Domain::Null)
            .await
            .unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received[0].1["user_email"], "alice@example.com");
        assert_eq!(received[0].1["start_date"], "2025-09-10");
    }

    #[actix_web::test]
    async fn confirms_even_when_backend_rejects() {
        let (base_url, received) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR);

        let (result, dispatcher) = run_against(&base_url).await;

        assert!(result.unwrap().is_empty());
        assert_eq!(dispatcher.messages, vec![BotMessage::text("Leave requested.")]);
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn unreachable_backend_fails_without_message() {
        let (result, dispatcher) = run_against("http://127.0.0.1:1").await;

        assert!(matches!(result, Err(ActionError::Failed(_))));
        assert!(dispatcher.messages.is_empty());
    }
}
