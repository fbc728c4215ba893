use std::sync::Mutex;

use shared_models::AppointmentRecord;

use crate::{AppointmentStore, StoreError};

/// In-memory store for tests and embedders that do not need the record to
/// survive a restart.
#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    slot: Mutex<Option<AppointmentRecord>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: AppointmentRecord) -> Self {
        Self {
            slot: Mutex::new(Some(record)),
        }
    }
}

impl AppointmentStore for MemoryAppointmentStore {
    fn get(&self) -> Result<Option<AppointmentRecord>, StoreError> {
        let slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(slot.clone())
    }

    fn put(&self, record: AppointmentRecord) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = Some(record);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = None;
        Ok(())
    }

    fn clear_if_matches(&self, scheduled_at: &str) -> Result<bool, StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        match slot.as_ref() {
            Some(record) if record.scheduled_at == scheduled_at => {
                *slot = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
