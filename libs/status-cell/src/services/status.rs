use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use shared_models::{floor_to_minute, Clock};
use shared_store::AppointmentStore;

use crate::error::StatusError;
use crate::models::AppointmentStatus;

/// Callback for UI-facing callers that want a push of every status the
/// facade computes.
pub trait StatusListener: Send + Sync {
    fn on_status_changed(&self, status: &AppointmentStatus);
}

/// Synchronous, on-demand status queries for callers that cannot wait for
/// the next monitor tick. Pure reads: the facade never clears the record.
pub struct AppointmentStatusService {
    store: Arc<dyn AppointmentStore>,
    clock: Arc<dyn Clock>,
    listeners: RwLock<Vec<Arc<dyn StatusListener>>>,
}

impl AppointmentStatusService {
    pub fn new(store: Arc<dyn AppointmentStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn register_listener(&self, listener: Arc<dyn StatusListener>) {
        match self.listeners.write() {
            Ok(mut listeners) => listeners.push(listener),
            Err(_) => warn!("listener lock poisoned, listener dropped"),
        }
    }

    /// Recomputes the status text directly from the store and pushes it to
    /// registered listeners.
    pub fn status(&self) -> Result<AppointmentStatus, StatusError> {
        let status = self.compute_status()?;
        debug!(status = %status, "appointment status computed");
        self.notify(&status);
        Ok(status)
    }

    /// Signed minutes until the appointment; `None` when nothing is
    /// scheduled, so a genuine "one minute past" stays distinguishable.
    /// Unlike `status`, the clock keeps its seconds: 45 seconds ahead
    /// truncates to `Some(0)`.
    pub fn minutes_until(&self) -> Result<Option<i64>, StatusError> {
        let Some(record) = self.store.get()? else {
            return Ok(None);
        };
        let scheduled_at = record.scheduled_time()?;
        let minutes = (scheduled_at - self.clock.now()).num_minutes();
        Ok(Some(minutes))
    }

    /// Presence check only; the stored timestamp is not parsed.
    pub fn has_appointment(&self) -> Result<bool, StatusError> {
        Ok(self.store.get()?.is_some())
    }

    fn compute_status(&self) -> Result<AppointmentStatus, StatusError> {
        let Some(record) = self.store.get()? else {
            return Ok(AppointmentStatus::NoAppointment);
        };

        let scheduled_at = match record.scheduled_time() {
            Ok(scheduled_at) => scheduled_at,
            Err(e) => {
                warn!("cannot compute status: {e}");
                return Ok(AppointmentStatus::CheckFailed);
            }
        };

        // Minute-level comparison, matching how the timestamp is written.
        let now = floor_to_minute(self.clock.now());
        let minutes = (scheduled_at - now).num_minutes();

        Ok(if minutes > 0 {
            AppointmentStatus::Upcoming { minutes }
        } else if minutes < 0 {
            AppointmentStatus::Completed
        } else {
            AppointmentStatus::StartingNow
        })
    }

    fn notify(&self, status: &AppointmentStatus) {
        match self.listeners.read() {
            Ok(listeners) => {
                for listener in listeners.iter() {
                    listener.on_status_changed(status);
                }
            }
            Err(_) => warn!("listener lock poisoned, notification skipped"),
        }
    }
}
