use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BOT_USER_EMAIL: &str = "alice@example.com";
pub const BOT_LEAVE_REASON: &str = "via bot";

/// Body of `POST /api/leaves/create` on the HR backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequestPayload {
    #[schema(example = "alice@example.com")]
    pub user_email: String,
    #[schema(example = "2025-09-10", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2025-09-12", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "via bot")]
    pub reason: String,
}

impl LeaveRequestPayload {
    /// The fixed request the bot files. Nothing here is read from the conversation.
    pub fn from_bot() -> Result<Self> {
        Ok(Self {
            user_email: BOT_USER_EMAIL.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 10).context("invalid start_date")?,
            end_date: NaiveDate::from_ymd_opt(2025, 9, 12).context("invalid end_date")?,
            reason: BOT_LEAVE_REASON.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bot_payload_serializes_with_iso_dates() {
        let payload = LeaveRequestPayload::from_bot().unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "user_email": "alice@example.com",
                "start_date": "2025-09-10",
                "end_date": "2025-09-12",
                "reason": "via bot"
            })
        );
    }
}
