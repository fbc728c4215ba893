use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use shared_models::Clock;
use shared_store::AppointmentStore;

use crate::error::AvailabilityError;
use crate::models::{AvailabilityConfig, AvailabilityStatus, StatusChange};

/// Derives the doctor's two-state status from the appointment record and
/// broadcasts changes; identical consecutive statuses are suppressed.
pub struct AvailabilityMonitor {
    store: Arc<dyn AppointmentStore>,
    clock: Arc<dyn Clock>,
    config: AvailabilityConfig,
    in_consultation: AtomicBool,
    events: broadcast::Sender<StatusChange>,
    is_shutdown: AtomicBool,
}

impl AvailabilityMonitor {
    pub fn new(
        store: Arc<dyn AppointmentStore>,
        clock: Arc<dyn Clock>,
        config: AvailabilityConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            store,
            clock,
            config,
            in_consultation: AtomicBool::new(false),
            events,
            is_shutdown: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StatusChange> {
        self.events.subscribe()
    }

    /// Last published status; `Available` before the first tick.
    pub fn current_status(&self) -> AvailabilityStatus {
        if self.in_consultation.load(Ordering::SeqCst) {
            AvailabilityStatus::InConsultation
        } else {
            AvailabilityStatus::Available
        }
    }

    /// One polling pass over the store.
    pub fn tick(&self) -> Result<(), AvailabilityError> {
        let Some(record) = self.store.get()? else {
            debug!("no appointment scheduled");
            self.publish(AvailabilityStatus::Available);
            return Ok(());
        };

        let scheduled_at = match record.scheduled_time() {
            Ok(scheduled_at) => scheduled_at,
            Err(e) => {
                // Fail open: a broken record must not read as a busy doctor.
                warn!("unreadable appointment record: {e}");
                self.publish(AvailabilityStatus::Available);
                return Ok(());
            }
        };

        let now = self.clock.now();
        let consultation_end =
            scheduled_at + Duration::seconds(self.config.consultation_duration_secs);

        if now < scheduled_at {
            debug!(scheduled_at = %record.scheduled_at, "appointment not started yet");
            self.publish(AvailabilityStatus::Available);
        } else if now < consultation_end {
            self.publish(AvailabilityStatus::InConsultation);
        } else {
            self.publish(AvailabilityStatus::Available);
            if self.store.clear_if_matches(&record.scheduled_at)? {
                info!("consultation window elapsed, record cleared");
            }
        }

        Ok(())
    }

    fn publish(&self, status: AvailabilityStatus) {
        let was_in_consultation = self.in_consultation.swap(
            status == AvailabilityStatus::InConsultation,
            Ordering::SeqCst,
        );
        let previous = if was_in_consultation {
            AvailabilityStatus::InConsultation
        } else {
            AvailabilityStatus::Available
        };

        if previous != status {
            info!(%status, "doctor status changed");
            // No live subscribers is fine; the status stays queryable.
            let _ = self.events.send(StatusChange {
                status,
                changed_at: self.clock.now(),
            });
        }
    }

    /// Polls at the configured interval until `shutdown` is called.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.config.poll_interval);
        info!(
            poll_interval_secs = self.config.poll_interval.as_secs(),
            "availability monitor started"
        );

        loop {
            interval.tick().await;
            if self.is_shutdown.load(Ordering::SeqCst) {
                break;
            }
            if let Err(e) = self.tick() {
                error!("availability tick failed: {e}");
            }
        }

        info!("availability monitor stopped");
    }

    pub fn shutdown(&self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}
