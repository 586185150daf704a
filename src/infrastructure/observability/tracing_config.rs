use crate::config::LoggingSettings;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter directive used when RUST_LOG is not set.
    pub default_filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: "info,kuching=debug".to_string(),
        }
    }
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: settings.enable_json,
            default_filter: settings.level.clone(),
        }
    }
}
