use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time::{parse_scheduled_at, ScheduleParseError};

/// The single tracked appointment. `scheduled_at` is kept as the raw
/// stored string so an unparsable value stays observable to consumers as
/// an error state instead of collapsing into "no appointment".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub scheduled_at: String,
    /// True when the user picked an arbitrary time rather than a preset
    /// slot. Informational only.
    #[serde(default)]
    pub is_custom_time: bool,
}

impl AppointmentRecord {
    pub fn new(scheduled_at: impl Into<String>, is_custom_time: bool) -> Self {
        Self {
            scheduled_at: scheduled_at.into(),
            is_custom_time,
        }
    }

    /// Parses the raw timestamp at minute precision.
    pub fn scheduled_time(&self) -> Result<NaiveDateTime, ScheduleParseError> {
        parse_scheduled_at(&self.scheduled_at)
    }
}
