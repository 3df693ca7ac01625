//! Application configuration loaded from a TOML file in the data directory.
//!
//! Every section and field carries a default, so a missing or partially
//! filled `config.toml` is never an error. A file that fails to parse is
//! logged and replaced by the defaults; configuration problems must not
//! prevent the app from starting.

use std::path::Path;

use serde::Deserialize;

/// `[company]`: identity printed on exported documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CompanyConfig {
    /// Company name shown in the PDF footer.
    pub name: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "Westfalia Personaldienstleistungen GmbH".to_string(),
        }
    }
}

/// `[export]`: PDF export options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExportConfig {
    /// Prefix of the generated PDF filename
    /// (`<prefix>_<employee>_<year>_<week>.pdf`).
    pub filename_prefix: String,
    /// Embed signature images when present.
    pub include_signatures: bool,
    /// Embed the machine-readable verification code.
    pub include_verification_code: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: "WPDL".to_string(),
            include_signatures: true,
            include_verification_code: true,
        }
    }
}

/// `[limits]`: advisory working-time limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LimitsConfig {
    /// Soft maximum of worked hours per day. Exceeding it only raises a
    /// warning flag in the UI; data entry is never blocked.
    pub max_daily_hours: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_daily_hours: 12.0,
        }
    }
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AppConfig {
    pub company: CompanyConfig,
    pub export: ExportConfig,
    pub limits: LimitsConfig,
}

impl AppConfig {
    /// Load the configuration from `path`, falling back to defaults when the
    /// file is absent or malformed. Malformed files are logged at `warn`.
    pub fn load(path: &Path) -> AppConfig {
        let Ok(raw) = std::fs::read_to_string(path) else {
            return AppConfig::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("config file {} is invalid: {e}; using defaults", path.display());
                AppConfig::default()
            }
        }
    }
}
