use std::sync::Arc;

use assert_matches::assert_matches;
use tokio::sync::broadcast::error::TryRecvError;

use availability_cell::{AvailabilityConfig, AvailabilityMonitor, AvailabilityStatus, StatusChange};
use shared_store::{AppointmentStore, MemoryAppointmentStore};
use shared_utils::test_utils::{empty_store, store_with, ManualClock};

fn monitor(store: Arc<MemoryAppointmentStore>, clock: Arc<ManualClock>) -> AvailabilityMonitor {
    AvailabilityMonitor::new(store, clock, AvailabilityConfig::default())
}

#[tokio::test]
async fn empty_store_reads_available() {
    let monitor = monitor(empty_store(), Arc::new(ManualClock::at("2025-03-14 16:45:00")));
    let mut events = monitor.subscribe();

    monitor.tick().unwrap();

    assert_eq!(monitor.current_status(), AvailabilityStatus::Available);
    // Already Available, so nothing is published.
    assert_matches!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn future_appointment_reads_available() {
    let monitor = monitor(
        store_with("2025-03-14 16:45"),
        Arc::new(ManualClock::at("2025-03-14 16:30:00")),
    );

    monitor.tick().unwrap();
    assert_eq!(monitor.current_status(), AvailabilityStatus::Available);
}

#[tokio::test]
async fn consultation_window_drives_both_transitions() {
    let store = store_with("2025-03-14 16:45");
    let clock = Arc::new(ManualClock::at("2025-03-14 16:45:30"));
    let monitor = monitor(store.clone(), clock.clone());
    let mut events = monitor.subscribe();

    // Inside [start, start + 60s).
    monitor.tick().unwrap();
    assert_eq!(monitor.current_status(), AvailabilityStatus::InConsultation);
    assert_matches!(
        events.try_recv(),
        Ok(StatusChange {
            status: AvailabilityStatus::InConsultation,
            ..
        })
    );

    // Past the window: back to Available and the record is consumed.
    clock.set("2025-03-14 16:46:01");
    monitor.tick().unwrap();
    assert_eq!(monitor.current_status(), AvailabilityStatus::Available);
    assert_matches!(
        events.try_recv(),
        Ok(StatusChange {
            status: AvailabilityStatus::Available,
            ..
        })
    );
    assert!(store.get().unwrap().is_none());
}

#[tokio::test]
async fn boundary_instants_follow_half_open_window() {
    let clock = Arc::new(ManualClock::at("2025-03-14 16:45:00"));
    let monitor = monitor(store_with("2025-03-14 16:45"), clock.clone());

    // now == start: in consultation.
    monitor.tick().unwrap();
    assert_eq!(monitor.current_status(), AvailabilityStatus::InConsultation);

    // now == end: available again.
    clock.set("2025-03-14 16:46:00");
    monitor.tick().unwrap();
    assert_eq!(monitor.current_status(), AvailabilityStatus::Available);
}

#[tokio::test]
async fn repeated_ticks_do_not_republish() {
    let clock = Arc::new(ManualClock::at("2025-03-14 16:45:30"));
    let monitor = monitor(store_with("2025-03-14 16:45"), clock);
    let mut events = monitor.subscribe();

    monitor.tick().unwrap();
    monitor.tick().unwrap();

    assert_matches!(events.try_recv(), Ok(_));
    assert_matches!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn unreadable_record_fails_open_to_available() {
    let store = store_with("garbage");
    let monitor = monitor(store.clone(), Arc::new(ManualClock::at("2025-03-14 16:45:30")));

    monitor.tick().unwrap();

    assert_eq!(monitor.current_status(), AvailabilityStatus::Available);
    // Fail-open never consumes the record.
    assert!(store.get().unwrap().is_some());
}

#[test]
fn status_text_matches_the_published_strings() {
    assert_eq!(AvailabilityStatus::Available.to_string(), "Available");
    assert_eq!(
        AvailabilityStatus::InConsultation.to_string(),
        "In Consultation"
    );
}
