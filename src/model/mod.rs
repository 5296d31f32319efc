pub mod action_call;
pub mod leave_request;
pub mod tracker;
