use std::sync::Arc;

use common::settings::get_settings;
use cron_processes::run_cron_processes;
use store_adapters::Store;

mod telemetry;

#[tokio::main]
async fn main() -> Result<(), String> {
    let settings = get_settings(".env")?;

    let _guard = telemetry::init_subscriber(
        settings.debug,
        &settings.application.log_directory,
        settings.application.max_log_files,
    )?;

    let store = Store::load(&settings.store.data_file).map_err(|e| e.to_string())?;
    let store = Arc::new(store);

    let mut scheduler = run_cron_processes(&settings, store)
        .await
        .map_err(|_| "Failed to start cron processes.".to_string())?;

    tracing::event!(
        target: "backend",
        tracing::Level::INFO,
        "pm_tracker started. Press Ctrl+C to stop."
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::event!(tracing::Level::ERROR, "Failed to listen for shutdown signal: {}", e);
    }
    if let Err(e) = scheduler.shutdown().await {
        tracing::event!(tracing::Level::ERROR, "{:?}", e);
    }

    drop(_guard);
    Ok(())
}
