use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use shared_models::{floor_to_minute, Clock};
use shared_store::AppointmentStore;

use crate::error::ReminderError;
use crate::models::{Alert, ReminderConfig};
use crate::services::alert::AlertSink;

/// Polls the appointment store and fires exactly one reminder per record
/// when the appointment enters the reminder window.
///
/// State machine: Idle -> (delta enters window) -> Notified ->
/// (appointment minute elapsed, record cleared) -> Idle.
pub struct ReminderMonitor {
    store: Arc<dyn AppointmentStore>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn AlertSink>,
    config: ReminderConfig,
    already_notified: AtomicBool,
    is_shutdown: AtomicBool,
}

impl ReminderMonitor {
    pub fn new(
        store: Arc<dyn AppointmentStore>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn AlertSink>,
        config: ReminderConfig,
    ) -> Self {
        Self {
            store,
            clock,
            sink,
            config,
            already_notified: AtomicBool::new(false),
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// One polling pass. Returns errors for the caller to log; the polling
    /// loop itself never lets them end the timer.
    pub async fn tick(&self) -> Result<(), ReminderError> {
        let Some(record) = self.store.get()? else {
            debug!("no appointment scheduled");
            // The availability monitor may have consumed the record; make
            // sure the next booking gets a fresh reminder.
            self.already_notified.store(false, Ordering::SeqCst);
            return Ok(());
        };

        let scheduled_at = match record.scheduled_time() {
            Ok(scheduled_at) => scheduled_at,
            Err(e) => {
                // Keep the timer alive; the record may be rewritten.
                warn!("skipping reminder check: {e}");
                return Ok(());
            }
        };

        let now = self.clock.now();
        // The appointment side is minute-resolved by parsing; `now` keeps
        // its seconds so the window band is meaningful.
        let delta_secs = (scheduled_at - now).num_seconds();
        debug!(scheduled_at = %record.scheduled_at, delta_secs, "appointment checked");

        let in_window = delta_secs >= self.config.window_start_secs
            && delta_secs <= self.config.window_end_secs;

        if in_window {
            if self.already_notified.load(Ordering::SeqCst) {
                debug!("reminder already shown, waiting for appointment");
            } else {
                info!(delta_secs, "appointment entered reminder window");
                match self.sink.deliver(&Alert::upcoming_appointment()).await {
                    Ok(()) => {
                        self.already_notified.store(true, Ordering::SeqCst);
                    }
                    Err(e) => {
                        // Flag stays unset so the next tick retries.
                        warn!("alert delivery failed: {e}");
                    }
                }
            }
        }

        // Expiry compares at minute precision: the record must survive the
        // appointment minute itself, which is exactly the consultation
        // window the availability monitor reads from the same store.
        if floor_to_minute(now) > scheduled_at {
            if self.store.clear_if_matches(&record.scheduled_at)? {
                info!("appointment time has passed, record cleared");
            }
            self.already_notified.store(false, Ordering::SeqCst);
        }

        Ok(())
    }

    /// Polls at the configured interval until `shutdown` is called.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.config.poll_interval);
        info!(
            poll_interval_secs = self.config.poll_interval.as_secs(),
            "reminder monitor started"
        );

        loop {
            interval.tick().await;
            if self.is_shutdown.load(Ordering::SeqCst) {
                break;
            }
            if let Err(e) = self.tick().await {
                error!("reminder tick failed: {e}");
            }
        }

        info!("reminder monitor stopped");
    }

    /// Stops the polling loop at its next wakeup.
    pub fn shutdown(&self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}
