//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reporting/display configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Declaration rendering configuration.
///
/// These control display precision only; stored miles/gallons keep their
/// full persisted precision (2 and 3 fractional digits respectively).
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Minimum fractional digits when rendering miles.
    #[serde(default = "default_miles_display_decimals")]
    pub miles_display_decimals: u32,
    /// Minimum fractional digits when rendering gallons.
    #[serde(default = "default_gallons_display_decimals")]
    pub gallons_display_decimals: u32,
}

fn default_miles_display_decimals() -> u32 {
    2
}

fn default_gallons_display_decimals() -> u32 {
    1
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            miles_display_decimals: default_miles_display_decimals(),
            gallons_display_decimals: default_gallons_display_decimals(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("IFTA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporting_defaults() {
        let cfg = ReportingConfig::default();
        assert_eq!(cfg.miles_display_decimals, 2);
        assert_eq!(cfg.gallons_display_decimals, 1);
    }

    #[test]
    fn test_load_defaults_without_files() {
        temp_env::with_vars_unset(["RUN_MODE", "IFTA__REPORTING__MILES_DISPLAY_DECIMALS"], || {
            let cfg = AppConfig::load().unwrap();
            assert_eq!(cfg.reporting.miles_display_decimals, 2);
            assert_eq!(cfg.reporting.gallons_display_decimals, 1);
        });
    }

    #[test]
    fn test_env_override() {
        temp_env::with_var("IFTA__REPORTING__MILES_DISPLAY_DECIMALS", Some("3"), || {
            let cfg = AppConfig::load().unwrap();
            assert_eq!(cfg.reporting.miles_display_decimals, 3);
        });
    }
}
