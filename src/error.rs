use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Failures reported back to the runtime from `/webhook`.
#[derive(Debug, Display)]
pub enum WebhookError {
    #[display(fmt = "No registered action found for name '{}'.", _0)]
    ActionNotFound(String),
    #[display(fmt = "Received an action call without an action.")]
    MissingAction,
    #[display(fmt = "{}", message)]
    Rejected { action_name: String, message: String },
    #[display(fmt = "{}", message)]
    Failed { action_name: String, message: String },
}

impl WebhookError {
    pub fn action_name(&self) -> Option<&str> {
        match self {
            WebhookError::ActionNotFound(name) => Some(name),
            WebhookError::MissingAction => None,
            WebhookError::Rejected { action_name, .. } | WebhookError::Failed { action_name, .. } => {
                Some(action_name)
            }
        }
    }
}

impl ResponseError for WebhookError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::ActionNotFound(_) => StatusCode::NOT_FOUND,
            WebhookError::MissingAction | WebhookError::Rejected { .. } => StatusCode::BAD_REQUEST,
            WebhookError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string(),
            "action_name": self.action_name()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            WebhookError::ActionNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(WebhookError::MissingAction.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebhookError::Failed {
                action_name: "x".into(),
                message: "boom".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_action() {
        let err = WebhookError::ActionNotFound("action_missing".into());
        assert_eq!(
            err.to_string(),
            "No registered action found for name 'action_missing'."
        );
        assert_eq!(err.action_name(), Some("action_missing"));
    }
}
