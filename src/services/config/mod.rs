// Configuration service
// Loads scheduler settings from a TOML file in the user's config directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::flight::YearInference;
use crate::models::policy::{Country, DEFAULT_OFFSET_DAYS};
use crate::services::flight::{CountdownEngine, FlightDateCalculator, PolicyResolver};

/// Largest offset accepted for the offset-then-Saturday cadence.
pub const MAX_OFFSET_DAYS: i64 = 365;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("offset_days must be between 0 and {max}, got {value}")]
    InvalidOffset { value: i64, max: i64 },
    #[error("default_country must not be blank")]
    BlankDefaultCountry,
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error("legacy year threshold must be positive, got {0}")]
    InvalidThreshold(i64),
}

/// Scheduler settings. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Country assumed for plants that do not name one
    pub default_country: String,
    pub offset_days: i64,
    /// IANA timezone for "now"; the machine's local zone when unset
    pub timezone: Option<String>,
    pub year_inference: YearInference,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            default_country: "philippines".to_string(),
            offset_days: DEFAULT_OFFSET_DAYS,
            timezone: None,
            year_inference: YearInference::default(),
        }
    }
}

impl FlightConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_OFFSET_DAYS).contains(&self.offset_days) {
            return Err(ConfigError::InvalidOffset {
                value: self.offset_days,
                max: MAX_OFFSET_DAYS,
            });
        }
        if self.default_country.trim().is_empty() {
            return Err(ConfigError::BlankDefaultCountry);
        }
        if let YearInference::LegacyThreshold { days } = self.year_inference {
            if days <= 0 {
                return Err(ConfigError::InvalidThreshold(days));
            }
        }
        self.timezone()?;
        Ok(())
    }

    pub fn timezone(&self) -> Result<Option<Tz>, ConfigError> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.trim()
                    .parse::<Tz>()
                    .map_err(|_| ConfigError::UnknownTimezone(name.to_string()))
            })
            .transpose()
    }

    pub fn resolver(&self) -> PolicyResolver {
        let default_country =
            Country::parse(&self.default_country).unwrap_or(Country::Philippines);
        PolicyResolver::new(default_country, self.offset_days)
    }

    pub fn countdown_engine(&self) -> CountdownEngine {
        CountdownEngine::new(FlightDateCalculator::new(self.resolver()), self.year_inference)
    }

    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        log::info!("Loaded flight config from {}", path.display());
        Ok(config)
    }

    /// Load from the per-user config directory, or defaults when there is none.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => {
                log::warn!("Could not determine config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "PlantStore", "PlantFlights")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
