use super::{Action, ActionError, CollectingDispatcher};
use crate::model::tracker::{Domain, Event, Tracker};
use async_trait::async_trait;

pub const ASSET_REQUEST_SENT: &str = "Asset request sent.";

pub struct RequestAssetAction;

#[async_trait]
impl Action for RequestAssetAction {
    fn name(&self) -> &str {
        "action_request_asset"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        _tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>, ActionError> {
        dispatcher.utter_message(ASSET_REQUEST_SENT);
        Ok(Vec::new())
    }
}
