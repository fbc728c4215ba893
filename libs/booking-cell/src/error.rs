use chrono::NaiveDateTime;
use thiserror::Error;

use shared_store::StoreError;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("clinic is closed on Sundays")]
    ClinicClosed,

    #[error("appointment time {0} is not in the future")]
    PastDateTime(NaiveDateTime),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
