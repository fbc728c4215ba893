use std::time::Duration;

use shared_config::AppConfig;

/// Notification payload handed to the alert sink. Sound and vibration ride
/// along so the sink can present the full alarm-style alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
    pub priority: AlertPriority,
    pub category: AlertCategory,
    /// Alternating pause/vibrate durations in milliseconds.
    pub vibration_pattern_ms: Vec<u64>,
    pub play_sound: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPriority {
    Default,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertCategory {
    Alarm,
    Status,
}

impl Alert {
    /// The one-minute-ahead reminder the monitor emits.
    pub fn upcoming_appointment() -> Self {
        Self {
            title: "Appointment Reminder".to_string(),
            body: "Your appointment is in 1 minute!".to_string(),
            priority: AlertPriority::High,
            category: AlertCategory::Alarm,
            vibration_pattern_ms: vec![0, 1000, 500, 1000],
            play_sound: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Inclusive seconds-until-appointment band that triggers the alert.
    pub window_start_secs: i64,
    pub window_end_secs: i64,
    pub poll_interval: Duration,
}

impl ReminderConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            window_start_secs: config.reminder_window_start_secs,
            window_end_secs: config.reminder_window_end_secs,
            poll_interval: Duration::from_secs(config.reminder_poll_interval_secs),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            window_start_secs: 50,
            window_end_secs: 70,
            poll_interval: Duration::from_secs(5),
        }
    }
}
