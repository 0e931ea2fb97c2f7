use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub brand_name: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
    /// Maximum number of toasts visible at once
    pub toast_limit: usize,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "VendorConnect".to_string(),
            log_level: "info".to_string(),
            toast_limit: 3,
            toast_duration_ms: 5000,
        }
    }
}

/// Default configuration compiled into the bundle
const DEFAULT_CONFIG: &str = r#"
{
    "brand_name": "VendorConnect",
    "log_level": "info",
    "toast_limit": 3,
    "toast_duration_ms": 5000
}
"#;

#[derive(Debug, Deserialize, Default)]
struct QueryOverrides {
    log: Option<String>,
}

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        parse_level(&self.log_level).unwrap_or(log::Level::Info)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.brand_name.trim().is_empty() {
            bail!("brand_name must not be empty");
        }
        if parse_level(&self.log_level).is_none() {
            bail!("unknown log_level '{}'", self.log_level);
        }
        if self.toast_limit == 0 {
            bail!("toast_limit must be at least 1");
        }
        if self.toast_duration_ms == 0 {
            bail!("toast_duration_ms must be positive");
        }
        Ok(())
    }

    /// Applies `?log=<level>` from the page query string
    fn apply_query(mut self, query: &str) -> anyhow::Result<Self> {
        let overrides: QueryOverrides = serde_qs::from_str(query.trim_start_matches('?'))
            .context("failed to parse query string")?;
        if let Some(level) = overrides.log {
            self.log_level = level.to_lowercase();
        }
        Ok(self)
    }
}

fn parse_level(level: &str) -> Option<log::Level> {
    match level.trim().to_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}

fn parse_config(raw: &str, query: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig =
        serde_json::from_str(raw).context("embedded configuration is not valid JSON")?;
    let config = config.apply_query(query)?;
    config.validate()?;
    Ok(config)
}

fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Load the embedded configuration overlaid with the page query string
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG, &current_query())
}

/// Like [`load_config`], but never fails. Returns the fallback reason, if any,
/// so it can be logged once the logger is up.
pub fn load_config_or_default() -> (AppConfig, Option<String>) {
    match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(format!("{:#}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, "").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_query_overrides_log_level() {
        let config = parse_config(DEFAULT_CONFIG, "?log=DEBUG").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_level(), log::Level::Debug);

        let config = parse_config(DEFAULT_CONFIG, "?other=1").unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = parse_config(DEFAULT_CONFIG, "log=loud").unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let raw = r#"{"brand_name":"X","log_level":"info","toast_limit":0,"toast_duration_ms":10}"#;
        assert!(parse_config(raw, "").is_err());
        assert!(parse_config("{ not json", "").is_err());
    }
}
