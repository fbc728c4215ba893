use async_trait::async_trait;
use tracing::info;

use crate::error::ReminderError;
use crate::models::Alert;

/// Boundary to whatever presents system-level alerts. The monitor only
/// needs a "present this alert" capability, not the sink's internals.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn deliver(&self, alert: &Alert) -> Result<(), ReminderError>;
}

/// Sink that logs deliveries, used by the monitor binary where no real
/// notification surface is attached.
#[derive(Debug, Default)]
pub struct TracingAlertSink;

#[async_trait]
impl AlertSink for TracingAlertSink {
    async fn deliver(&self, alert: &Alert) -> Result<(), ReminderError> {
        info!(
            title = %alert.title,
            body = %alert.body,
            priority = ?alert.priority,
            "alert delivered"
        );
        Ok(())
    }
}
