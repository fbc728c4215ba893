pub mod error;
pub mod models;
pub mod services;

pub use error::ReminderError;
pub use models::{Alert, AlertCategory, AlertPriority, ReminderConfig};
pub use services::{AlertSink, ReminderMonitor, TracingAlertSink};
