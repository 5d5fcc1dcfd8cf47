use anyhow::Context;
use chrono::FixedOffset;
use config::{Config, Environment, File};
use serde::Deserialize;

// ============================================================================
// Settings
// ============================================================================
//
// Sources, later ones override earlier ones:
// 1. Built-in defaults
// 2. Optional `packetery.toml` in the working directory
// 3. `PACKETERY__*` environment variables, e.g. `PACKETERY__API_KEY`,
//    `PACKETERY__VALIDATION__ENABLED`
//
// ============================================================================

pub const DEFAULT_TRACKING_URL: &str = "https://tracking.packeta.com/?id=";
pub const DEFAULT_VALIDATION_ENDPOINT: &str =
    "https://widget.packeta.com/v6/pps/api/widget/v1/validate";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: Option<String>,
    /// E-shop label registered in the Packeta client section.
    pub sender: Option<String>,
    /// UTC offset used to present stored UTC timestamps, e.g. `+01:00`.
    pub timezone: String,
    pub tracking_url: String,
    pub cod_payment_methods: Vec<String>,
    /// Packaging weight in kilograms added to calculated order weights.
    pub packaging_weight: f64,
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub enabled: bool,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            sender: None,
            timezone: "+00:00".to_string(),
            tracking_url: DEFAULT_TRACKING_URL.to_string(),
            cod_payment_methods: vec!["cod".to_string()],
            packaging_weight: 0.0,
            validation: ValidationSettings::default(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: DEFAULT_VALIDATION_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("packetery")
    }

    pub fn load_from(file_stem: &str) -> anyhow::Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name(file_stem).required(false))
            .add_source(
                Environment::with_prefix("PACKETERY")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cod_payment_methods")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        settings.timezone_offset()?;
        Ok(settings)
    }

    pub fn timezone_offset(&self) -> anyhow::Result<FixedOffset> {
        self.timezone
            .parse::<FixedOffset>()
            .with_context(|| format!("Invalid timezone offset: {}", self.timezone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.api_key, None);
        assert_eq!(settings.tracking_url, DEFAULT_TRACKING_URL);
        assert!(!settings.validation.enabled);
        assert_eq!(settings.validation.timeout_secs, 10);
        assert_eq!(settings.timezone_offset().unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_timezone_offset() {
        let settings = Settings {
            timezone: "+02:00".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.timezone_offset().unwrap().local_minus_utc(), 7200);

        let settings = Settings {
            timezone: "Europe/Prague".to_string(),
            ..Default::default()
        };
        assert!(settings.timezone_offset().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = Settings::load_from("does-not-exist-packetery-settings").unwrap();
        assert_eq!(settings.validation.endpoint, DEFAULT_VALIDATION_ENDPOINT);
    }
}
