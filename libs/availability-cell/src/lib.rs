pub mod error;
pub mod models;
pub mod services;

pub use error::AvailabilityError;
pub use models::{AvailabilityConfig, AvailabilityStatus, StatusChange};
pub use services::AvailabilityMonitor;
