use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

use shared_models::AppointmentRecord;

use crate::{AppointmentStore, StoreError};

/// JSON-file-backed store: one file, one record. A missing or empty file
/// means no appointment. Every access holds the same mutex, so a monitor's
/// read-then-clear cannot interleave with a booking write.
pub struct FileAppointmentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileAppointmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_locked(&self) -> Result<Option<AppointmentRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn remove_locked(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl AppointmentStore for FileAppointmentStore {
    fn get(&self) -> Result<Option<AppointmentRecord>, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        self.read_locked()
    }

    fn put(&self, record: AppointmentRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        fs::write(&self.path, serde_json::to_string(&record)?)?;
        debug!(scheduled_at = %record.scheduled_at, path = %self.path.display(), "appointment record written");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        self.remove_locked()
    }

    fn clear_if_matches(&self, scheduled_at: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        match self.read_locked()? {
            Some(record) if record.scheduled_at == scheduled_at => {
                self.remove_locked()?;
                debug!(scheduled_at, "appointment record cleared");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
