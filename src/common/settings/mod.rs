use std::env;

use crate::settings::types::{
    ApplicationSettings, Environment, ScheduleSettings, Settings, StoreSettings,
};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e.to_string()))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_development_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => return Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings { debug: true, ..b })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            log_directory: "/var/log/pm_tracker".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    let settings = Settings {
        application: ApplicationSettings {
            max_log_files: match env::var("MAX_LOG_FILES") {
                Ok(max) => max.parse::<usize>().map_err(|e| e.to_string())?,
                Err(_) => s.application.max_log_files,
            },
            log_directory: env::var("APP_LOG_DIRECTORY").unwrap_or(s.application.log_directory),
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        schedule: ScheduleSettings {
            time_zone: env::var("APP_TIME_ZONE").unwrap_or(s.schedule.time_zone),
            deadline_check_time: env::var("APP_DEADLINE_CHECK_TIME")
                .unwrap_or(s.schedule.deadline_check_time),
            approaching_deadline_days: match env::var("APP_APPROACHING_DEADLINE_DAYS") {
                Ok(days) => days.parse::<i64>().map_err(|e| e.to_string())?,
                Err(_) => s.schedule.approaching_deadline_days,
            },
        },
        store: StoreSettings {
            data_file: env::var("APP_DATA_FILE").unwrap_or(s.store.data_file),
        },
    };

    // Fail at startup rather than at 09:00.
    settings.schedule.utc_offset()?;
    settings.schedule.check_time()?;
    Ok(settings)
}
