use chrono::{FixedOffset, NaiveTime, Offset, Utc};
use serde::Deserialize;

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub debug: bool,
    pub schedule: ScheduleSettings,
    pub store: StoreSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                max_log_files: 14,
                log_directory: "./logs".to_string(),
            },
            schedule: ScheduleSettings {
                time_zone: "+03:00".to_string(),
                deadline_check_time: "09:00".to_string(),
                approaching_deadline_days: 3,
            },
            store: StoreSettings {
                data_file: "data/pm_tracker.json".to_string(),
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ApplicationSettings {
    pub max_log_files: usize,
    pub log_directory: String,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ScheduleSettings {
    /// UTC offset of the deployment, e.g. "+03:00".
    pub time_zone: String,
    /// Local wall-clock time of the daily deadline check, "HH:MM".
    pub deadline_check_time: String,
    pub approaching_deadline_days: i64,
}

impl ScheduleSettings {
    pub fn utc_offset(&self) -> Result<FixedOffset, String> {
        match self.time_zone.trim() {
            "UTC" | "Z" => Ok(Utc.fix()),
            tz => tz
                .parse::<FixedOffset>()
                .map_err(|e| format!("Invalid time_zone {}: {}", tz, e)),
        }
    }

    pub fn check_time(&self) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(self.deadline_check_time.trim(), "%H:%M").map_err(|e| {
            format!(
                "Invalid deadline_check_time {}: {}",
                self.deadline_check_time, e
            )
        })
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct StoreSettings {
    pub data_file: String,
}

pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_settings_parse() {
        let settings = Settings::base_settings();
        assert_eq!(
            settings.schedule.utc_offset(),
            Ok(FixedOffset::east_opt(3 * 3600).unwrap())
        );
        assert_eq!(
            settings.schedule.check_time(),
            Ok(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
    }

    #[test]
    fn utc_offset_accepts_utc_and_half_hours() {
        let mut schedule = Settings::base_settings().schedule;
        schedule.time_zone = "UTC".to_string();
        assert_eq!(schedule.utc_offset(), Ok(FixedOffset::east_opt(0).unwrap()));

        schedule.time_zone = "+05:30".to_string();
        assert_eq!(
            schedule.utc_offset(),
            Ok(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
        );
    }

    #[test]
    fn invalid_values_are_errors() {
        let mut schedule = Settings::base_settings().schedule;
        schedule.time_zone = "Europe/Istanbul".to_string();
        schedule.deadline_check_time = "9 o'clock".to_string();
        assert!(schedule.utc_offset().is_err());
        assert!(schedule.check_time().is_err());
    }

    #[test]
    fn environment_from_string() {
        assert!(matches!(
            Environment::try_from("Production".to_string()),
            Ok(Environment::Production)
        ));
        assert!(Environment::try_from("staging".to_string()).is_err());
    }
}
