pub mod error;
pub mod models;
pub mod services;

pub use error::StatusError;
pub use models::AppointmentStatus;
pub use services::{AppointmentStatusService, StatusListener};
