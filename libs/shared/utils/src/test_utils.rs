//! Helpers shared by the cells' test suites. Test-only code: panicking on
//! malformed fixture input is deliberate.

use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDateTime};

use shared_models::AppointmentRecord;
use shared_store::MemoryAppointmentStore;

const FIXTURE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Manually driven clock for walking monitors through simulated time.
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    /// Starts at a second-precision fixture time, e.g. "2025-03-14 16:44:15".
    pub fn at(raw: &str) -> Self {
        Self {
            now: Mutex::new(parse_fixture_time(raw)),
        }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += delta;
    }

    pub fn set(&self, raw: &str) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now = parse_fixture_time(raw);
    }
}

impl shared_models::Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().expect("clock lock poisoned")
    }
}

pub fn parse_fixture_time(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, FIXTURE_FORMAT)
        .unwrap_or_else(|e| panic!("bad fixture time {raw:?}: {e}"))
}

/// Store pre-loaded with an appointment at the given raw timestamp.
pub fn store_with(scheduled_at: &str) -> Arc<MemoryAppointmentStore> {
    Arc::new(MemoryAppointmentStore::with_record(AppointmentRecord::new(
        scheduled_at,
        false,
    )))
}

pub fn empty_store() -> Arc<MemoryAppointmentStore> {
    Arc::new(MemoryAppointmentStore::new())
}
