use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Timelike};
use store_adapters::Store;
use tracing::{event, instrument, Level};
use use_cases::deadlines::{check_approaching_deadlines, DeadlineCheckParams, DeadlineCheckReport};

/// The scheduler evaluates cron expressions in UTC, so a local wall-clock
/// time is shifted by the offset before it becomes a daily expression.
pub fn utc_cron_for_local_time(local: NaiveTime, offset: FixedOffset) -> String {
    let (utc, _) =
        local.overflowing_sub_signed(Duration::seconds(offset.local_minus_utc() as i64));
    format!("{} {} {} * * *", utc.second(), utc.minute(), utc.hour())
}

#[instrument(skip(store))]
pub async fn deadline_reminder(
    store: &Store,
    now: DateTime<FixedOffset>,
    window_days: i64,
) -> () {
    let report = match run(store, now, window_days) {
        Ok(report) => report,
        Err(_) => return (),
    };
    event!(Level::INFO, "{}", report.summary());
    ()
}

fn run(
    store: &Store,
    now: DateTime<FixedOffset>,
    window_days: i64,
) -> Result<DeadlineCheckReport, ()> {
    store.sync().map_err(|e| {
        event!(Level::ERROR, "Failed to reload store: {}", e);
        ()
    })?;
    let report = check_approaching_deadlines(store, DeadlineCheckParams { now, window_days })
        .map_err(|e| {
            event!(Level::ERROR, %e);
            ()
        })?;
    if report.notifications_created > 0 {
        store.sync().map_err(|e| {
            event!(Level::ERROR, "Failed to write notifications: {}", e);
            ()
        })?;
    }
    Ok(report)
}
