use crate::actions::ActionRegistry;
use crate::error::WebhookError;
use crate::model::action_call::{ActionCall, ActionResponse};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{debug, info, instrument};

/// Liveness probe used by the runtime
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Action server is up", body = Object,
         example = json!({"status": "ok"}))
    ),
    tag = "Action server"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// Names of every registered action
#[utoipa::path(
    get,
    path = "/actions",
    responses(
        (status = 200, description = "Registered actions", body = [crate::model::action_call::ActionInfo])
    ),
    tag = "Action server"
)]
pub async fn list_actions(registry: web::Data<ActionRegistry>) -> impl Responder {
    HttpResponse::Ok().json(registry.descriptions())
}

/* =========================
Run an action
========================= */
#[utoipa::path(
    post,
    path = "/webhook",
    request_body(
        content = ActionCall,
        description = "Action call sent by the runtime",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Action ran", body = ActionResponse),
        (status = 400, description = "No action given or action rejected", body = Object,
         example = json!({
            "error": "Received an action call without an action.",
            "action_name": null
         })),
        (status = 404, description = "Action not registered", body = Object,
         example = json!({
            "error": "No registered action found for name 'action_foo'.",
            "action_name": "action_foo"
         })),
        (status = 500, description = "Action failed", body = Object)
    ),
    tag = "Action server"
)]
#[instrument(
    name = "webhook",
    skip(registry, call),
    fields(action = call.action_name().unwrap_or(""), sender_id = %call.sender_id)
)]
pub async fn webhook(
    registry: web::Data<ActionRegistry>,
    call: web::Json<ActionCall>,
) -> Result<web::Json<ActionResponse>, WebhookError> {
    info!(intent = ?call.tracker.latest_intent(), "Action call received");
    if let Some(version) = call.version.as_deref() {
        debug!(version, "Runtime version");
    }

    let response = registry.run(&call).await?;

    debug!(
        events = response.events.len(),
        responses = response.responses.len(),
        "Action finished"
    );

    Ok(web::Json(response))
}
