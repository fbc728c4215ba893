use thiserror::Error;

use shared_models::ScheduleParseError;
use shared_store::StoreError;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("invalid appointment timestamp: {0}")]
    Parse(#[from] ScheduleParseError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
