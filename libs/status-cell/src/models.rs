use std::fmt;

/// Human-readable appointment status the facade computes on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentStatus {
    NoAppointment,
    Upcoming { minutes: i64 },
    StartingNow,
    Completed,
    /// The stored timestamp could not be interpreted.
    CheckFailed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::NoAppointment => write!(f, "No Appointment Scheduled"),
            AppointmentStatus::Upcoming { minutes } => {
                write!(f, "Appointment in {} minutes", minutes)
            }
            AppointmentStatus::StartingNow => write!(f, "Appointment Starting Now"),
            AppointmentStatus::Completed => write!(f, "Appointment Completed"),
            AppointmentStatus::CheckFailed => write!(f, "Error checking appointment"),
        }
    }
}
