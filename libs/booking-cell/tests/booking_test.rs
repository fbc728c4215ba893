use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime, Timelike};

use booking_cell::{preset_slots, BookingError, BookingService};
use shared_store::AppointmentStore;
use shared_utils::test_utils::{empty_store, ManualClock};

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn time(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

#[test]
fn booking_writes_the_canonical_record() {
    let store = empty_store();
    let service = BookingService::new(
        store.clone(),
        Arc::new(ManualClock::at("2025-03-14 09:00:00")),
    );

    let record = service
        .book(date("2025-03-17"), time("10:30"), false)
        .unwrap();

    assert_eq!(record.scheduled_at, "2025-03-17 10:30");
    assert!(!record.is_custom_time);
    assert_eq!(store.get().unwrap().unwrap(), record);
}

#[test]
fn booking_overwrites_a_prior_appointment() {
    let store = empty_store();
    let service = BookingService::new(
        store.clone(),
        Arc::new(ManualClock::at("2025-03-14 09:00:00")),
    );

    service
        .book(date("2025-03-17"), time("10:30"), false)
        .unwrap();
    service
        .book(date("2025-03-18"), time("11:45"), true)
        .unwrap();

    let record = store.get().unwrap().unwrap();
    assert_eq!(record.scheduled_at, "2025-03-18 11:45");
    assert!(record.is_custom_time);
}

#[test]
fn sundays_are_rejected() {
    let service = BookingService::new(
        empty_store(),
        Arc::new(ManualClock::at("2025-03-14 09:00:00")),
    );

    // 2025-03-16 is a Sunday.
    assert_matches!(
        service.book(date("2025-03-16"), time("10:30"), false),
        Err(BookingError::ClinicClosed)
    );
}

#[test]
fn past_and_current_minute_are_rejected() {
    let service = BookingService::new(
        empty_store(),
        Arc::new(ManualClock::at("2025-03-14 16:45:30")),
    );

    assert_matches!(
        service.book(date("2025-03-13"), time("10:30"), false),
        Err(BookingError::PastDateTime(_))
    );
    // Same minute counts as not-in-the-future.
    assert_matches!(
        service.book(date("2025-03-14"), time("16:45"), true),
        Err(BookingError::PastDateTime(_))
    );
    // The next minute is bookable.
    assert!(service.book(date("2025-03-14"), time("16:46"), true).is_ok());
}

#[test]
fn preset_slots_cover_the_half_hour_grid() {
    let slots = preset_slots();

    assert_eq!(slots.len(), 16);
    assert_eq!(slots.first().copied(), NaiveTime::from_hms_opt(9, 0, 0));
    assert_eq!(slots.last().copied(), NaiveTime::from_hms_opt(16, 30, 0));
    assert!(slots.iter().all(|slot| slot.second() == 0));
}
