pub mod event_payload;
pub mod submission_result;
