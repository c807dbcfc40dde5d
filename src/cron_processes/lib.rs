use std::sync::Arc;

use chrono::Utc;
use common::settings::types::Settings;
use store_adapters::Store;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{event, instrument, Level};

pub mod deadline_reminder;

use deadline_reminder::{deadline_reminder, utc_cron_for_local_time};

/// Registers the daily jobs and starts the scheduler. The caller keeps the
/// returned scheduler alive and shuts it down on exit.
#[instrument(skip_all)]
pub async fn run_cron_processes(
    settings: &Settings,
    store: Arc<Store>,
) -> Result<JobScheduler, ()> {
    let (offset, check_time) = match (
        settings.schedule.utc_offset(),
        settings.schedule.check_time(),
    ) {
        (Ok(offset), Ok(check_time)) => (offset, check_time),
        (Err(e), _) | (_, Err(e)) => {
            event!(Level::ERROR, "{}", e);
            return Err(());
        }
    };
    let window_days = settings.schedule.approaching_deadline_days;

    let scheduler = match JobScheduler::new().await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };

    let cron = utc_cron_for_local_time(check_time, offset);
    event!(
        Level::INFO,
        "Scheduling deadline_reminder at {} {} (UTC cron: {})",
        check_time,
        offset,
        cron
    );
    let deadline_reminder_job = match Job::new_async(cron.as_str(), move |_, _| {
        let store = store.clone();
        Box::pin(async move {
            let now = Utc::now().with_timezone(&offset);
            deadline_reminder(&store, now, window_days).await
        })
    }) {
        Ok(job) => job,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };
    if let Err(e) = scheduler.add(deadline_reminder_job).await {
        event!(Level::ERROR, "{:?}", e);
        return Err(());
    };

    if let Err(e) = scheduler.start().await {
        event!(Level::ERROR, "{:?}", e);
        return Err(());
    }

    Ok(scheduler)
}
