use std::collections::HashMap;
use std::env;
use std::fs;
use std::str::FromStr;

use chrono_tz::Tz;

const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if (value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\''))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub sheet_path: String,
    pub timezone: Tz,
    pub calendar_base_url: String,
    pub calendar_token: String,
    pub mail_base_url: String,
    pub mail_token: String,
}

impl Settings {
    // Config file wins over the process environment, matching how the
    // bot reads its properties.
    pub fn resolve(config: &AppConfig) -> Result<Self, String> {
        let get_prop = |key: &str| -> Option<String> {
            config.get(key).or_else(|| env::var(key).ok())
        };
        let require = |key: &str| -> Result<String, String> {
            get_prop(key).ok_or_else(|| format!("{} must be set", key))
        };

        let timezone_name = get_prop("TIMEZONE").unwrap_or(DEFAULT_TIMEZONE.to_string());
        let timezone = Tz::from_str(&timezone_name)
            .map_err(|_| format!("Invalid timezone {}", timezone_name))?;

        Ok(Settings {
            sheet_path: require("SHEET_PATH")?,
            timezone,
            calendar_base_url: require("CALENDAR_BASE_URL")?,
            calendar_token: require("CALENDAR_TOKEN")?,
            mail_base_url: require("MAIL_BASE_URL")?,
            mail_token: require("MAIL_TOKEN")?,
        })
    }
}
