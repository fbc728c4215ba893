pub mod appointment;
pub mod time;

pub use appointment::AppointmentRecord;
pub use time::{
    floor_to_minute, format_scheduled_at, parse_scheduled_at, Clock, ScheduleParseError,
    SystemClock, SCHEDULED_AT_FORMAT,
};
