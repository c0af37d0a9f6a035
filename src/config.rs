//! Build-time Configuration
//!
//! Values are baked in by Trunk/cargo through `option_env!`.

use std::time::Duration;

use leptos_poll::DEFAULT_INTERVAL;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub poll_interval: Duration,
    /// Replace the whole app with the maintenance screen
    pub maintenance_mode: bool,
    /// Seasonal decoration on at startup
    pub festive_default: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval: DEFAULT_INTERVAL,
            maintenance_mode: false,
            festive_default: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("EASYTRACK_API_BASE"),
            option_env!("EASYTRACK_POLL_SECS"),
            option_env!("EASYTRACK_MAINTENANCE"),
            option_env!("EASYTRACK_FESTIVE"),
        )
    }

    pub fn from_vars(
        api_base: Option<&str>,
        poll_secs: Option<&str>,
        maintenance: Option<&str>,
        festive: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let poll_interval = poll_secs
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.poll_interval);

        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            poll_interval,
            maintenance_mode: maintenance.and_then(parse_flag).unwrap_or(defaults.maintenance_mode),
            festive_default: festive.and_then(parse_flag).unwrap_or(defaults.festive_default),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_vars(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert!(config.festive_default);
        assert!(!config.maintenance_mode);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(Some("https://api.example.com/"), Some("30"), Some("yes"), Some("0"));
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert!(config.maintenance_mode);
        assert!(!config.festive_default);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_vars(None, Some("0"), Some("maybe"), Some(""));
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert!(!config.maintenance_mode);
        assert!(config.festive_default);

        let config = AppConfig::from_vars(None, Some("ten"), None, None);
        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }
}
