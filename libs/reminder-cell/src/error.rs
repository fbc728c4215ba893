use thiserror::Error;

use shared_models::ScheduleParseError;
use shared_store::StoreError;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("invalid appointment timestamp: {0}")]
    Parse(#[from] ScheduleParseError),

    #[error("alert delivery failed: {0}")]
    AlertDelivery(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
