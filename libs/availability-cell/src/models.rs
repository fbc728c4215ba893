use std::fmt;
use std::time::Duration;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_config::AppConfig;

/// Two-valued doctor status derived from the consultation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    InConsultation,
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "Available"),
            AvailabilityStatus::InConsultation => write!(f, "In Consultation"),
        }
    }
}

/// Event published to subscribers when the derived status flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub status: AvailabilityStatus,
    pub changed_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct AvailabilityConfig {
    /// Length of the consultation window starting at the appointment time.
    /// The short default stands in for a real consultation length.
    pub consultation_duration_secs: i64,
    pub poll_interval: Duration,
}

impl AvailabilityConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            consultation_duration_secs: config.consultation_duration_secs,
            poll_interval: Duration::from_secs(config.availability_poll_interval_secs),
        }
    }
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            consultation_duration_secs: 60,
            poll_interval: Duration::from_secs(5),
        }
    }
}
