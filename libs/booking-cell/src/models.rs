use chrono::NaiveTime;

/// Preset half-hour slot grid the booking flow offers, 09:00 through 16:30.
/// A time outside this grid is a custom time.
pub fn preset_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    let mut minutes = 9 * 60;
    while minutes <= 16 * 60 + 30 {
        if let Some(slot) = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) {
            slots.push(slot);
        }
        minutes += 30;
    }
    slots
}
