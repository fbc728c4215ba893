use thiserror::Error;

use shared_store::StoreError;

/// Parse failures are absent on purpose: an unreadable record fails open
/// to `Available` instead of erroring the tick.
#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
