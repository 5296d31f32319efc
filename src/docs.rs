use crate::model::action_call::{ActionCall, ActionInfo, ActionResponse, BotMessage};
use crate::model::leave_request::LeaveRequestPayload;
use crate::model::tracker::Tracker;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Assistant Action Server",
        version = "0.1.0",
        description = r#"
## Custom actions for the HR assistant bot

The conversational runtime calls this server whenever it predicts one of the
custom actions below.

### 🔹 Actions
- **action_create_leave**
  - Files a leave request with the HR backend (`POST /api/leaves/create`)
  - Replies "Leave requested."
- **action_request_asset**
  - Replies "Asset request sent."

### 📦 Protocol
- `POST /webhook` receives `{next_action, sender_id, tracker, domain, version}`
- Replies with `{events, responses}`
- Errors come back as `{error, action_name}`

---
Built with **Rust**, **Actix Web**, **reqwest**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::webhook::webhook,
        crate::api::webhook::health,
        crate::api::webhook::list_actions
    ),
    components(
        schemas(
            ActionCall,
            ActionResponse,
            ActionInfo,
            BotMessage,
            Tracker,
            LeaveRequestPayload
        )
    ),
    tags(
        (name = "Action server", description = "Rasa action server protocol"),
    )
)]
pub struct ApiDoc;
