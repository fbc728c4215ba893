pub mod alert;
pub mod monitor;

pub use alert::{AlertSink, TracingAlertSink};
pub use monitor::ReminderMonitor;
