use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tracing::{debug, info};

use shared_models::{floor_to_minute, format_scheduled_at, AppointmentRecord, Clock};
use shared_store::AppointmentStore;

use crate::error::BookingError;

/// Validates a requested date/time and writes the appointment record.
/// Booking overwrites any prior appointment; the store tracks one at most.
pub struct BookingService {
    store: Arc<dyn AppointmentStore>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(store: Arc<dyn AppointmentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn book(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        is_custom_time: bool,
    ) -> Result<AppointmentRecord, BookingError> {
        // Clinic is closed on Sundays.
        if date.weekday() == Weekday::Sun {
            debug!(%date, "booking rejected: Sunday");
            return Err(BookingError::ClinicClosed);
        }

        let scheduled_at = floor_to_minute(date.and_time(time));
        let now = floor_to_minute(self.clock.now());
        if scheduled_at <= now {
            debug!(%scheduled_at, "booking rejected: not in the future");
            return Err(BookingError::PastDateTime(scheduled_at));
        }

        let record = AppointmentRecord::new(format_scheduled_at(scheduled_at), is_custom_time);
        self.store.put(record.clone())?;
        info!(scheduled_at = %record.scheduled_at, is_custom_time, "appointment booked");

        Ok(record)
    }
}
