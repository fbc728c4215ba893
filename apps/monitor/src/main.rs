use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use availability_cell::{AvailabilityConfig, AvailabilityMonitor};
use reminder_cell::{ReminderConfig, ReminderMonitor, TracingAlertSink};
use shared_config::AppConfig;
use shared_models::SystemClock;
use shared_store::FileAppointmentStore;
use status_cell::AppointmentStatusService;

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting appointment monitor");

    let config = AppConfig::from_env();
    let store: Arc<FileAppointmentStore> = Arc::new(FileAppointmentStore::new(&config.store_path));
    let clock = Arc::new(SystemClock);

    // Startup readout from the on-demand facade. A broken store file is
    // logged, not fatal; the monitors keep retrying every tick.
    let status_service = AppointmentStatusService::new(store.clone(), clock.clone());
    match status_service.status() {
        Ok(status) => info!(%status, "appointment status at startup"),
        Err(e) => warn!("cannot read appointment status: {e}"),
    }
    if let Ok(Some(minutes)) = status_service.minutes_until() {
        info!(minutes, "minutes until appointment");
    }

    let reminder = Arc::new(ReminderMonitor::new(
        store.clone(),
        clock.clone(),
        Arc::new(TracingAlertSink),
        ReminderConfig::from_app_config(&config),
    ));
    let availability = Arc::new(AvailabilityMonitor::new(
        store.clone(),
        clock.clone(),
        AvailabilityConfig::from_app_config(&config),
    ));

    // Surface status flips in the log.
    let mut status_events = availability.subscribe();
    tokio::spawn(async move {
        while let Ok(change) = status_events.recv().await {
            info!(status = %change.status, at = %change.changed_at, "doctor status update");
        }
    });

    let reminder_task = {
        let reminder = reminder.clone();
        tokio::spawn(async move { reminder.run().await })
    };
    let availability_task = {
        let availability = availability.clone();
        tokio::spawn(async move { availability.run().await })
    };

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, stopping monitors");
    reminder.shutdown();
    availability.shutdown();

    let _ = futures::future::join_all([reminder_task, availability_task]).await;
    info!("Monitors stopped");

    Ok(())
}
