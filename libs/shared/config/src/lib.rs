use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the JSON file holding the appointment record.
    pub store_path: String,
    pub reminder_poll_interval_secs: u64,
    /// Inclusive band of seconds-until-appointment in which the reminder
    /// fires. The defaults catch the one-minute mark reliably.
    pub reminder_window_start_secs: i64,
    pub reminder_window_end_secs: i64,
    pub availability_poll_interval_secs: u64,
    pub consultation_duration_secs: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            store_path: env::var("APPOINTMENT_STORE_PATH").unwrap_or_else(|_| {
                warn!("APPOINTMENT_STORE_PATH not set, using appointments.json");
                "appointments.json".to_string()
            }),
            reminder_poll_interval_secs: parse_env("REMINDER_POLL_INTERVAL_SECS", 5),
            reminder_window_start_secs: parse_env("REMINDER_WINDOW_START_SECS", 50),
            reminder_window_end_secs: parse_env("REMINDER_WINDOW_END_SECS", 70),
            availability_poll_interval_secs: parse_env("AVAILABILITY_POLL_INTERVAL_SECS", 5),
            consultation_duration_secs: parse_env("CONSULTATION_DURATION_SECS", 60),
        };

        if config.reminder_window_start_secs > config.reminder_window_end_secs {
            warn!(
                "reminder window is empty ({}..{}), no reminder will ever fire",
                config.reminder_window_start_secs, config.reminder_window_end_secs
            );
        }

        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: "appointments.json".to_string(),
            reminder_poll_interval_secs: 5,
            reminder_window_start_secs: 50,
            reminder_window_end_secs: 70,
            availability_poll_interval_secs: 5,
            consultation_duration_secs: 60,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
