use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use xiineday_weather::Locale;

/// A single problem found while validating the config
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigIssue>,
    pub warnings: Vec<ConfigIssue>,
}

impl ValidationResult {
    /// True if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors joined into one line
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml; not persisted
    #[serde(skip, default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Selected location, theme and language
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Where reference data comes from
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Crop shown in the agronomy section
    #[serde(default)]
    pub agronomy: AgronomyConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// City whose forecast is shown
    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub locale: Locale,
}

fn default_location() -> String {
    "Dakar".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            theme: Theme::default(),
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file; the bundled sample data is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgronomyConfig {
    /// Crop id; the first catalog crop is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<u32>,
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("xiineday")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            dashboard: DashboardConfig::default(),
            catalog: CatalogConfig::default(),
            agronomy: AgronomyConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, creating a default
    /// file if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating a default file if
    /// it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_dir);

        if !path.exists() {
            tracing::info!("No config at {}, writing defaults", path.display());
            let config = Self {
                config_dir,
                ..Self::default()
            };
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let mut config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_dir = config_dir;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.dashboard.location.trim().is_empty() {
            result.add_error("dashboard.location", "Location must not be empty");
        }

        if let Some(path) = &self.catalog.path {
            if !path.exists() {
                result.add_error(
                    "catalog.path",
                    format!("Catalog file does not exist: {}", path.display()),
                );
            } else if path.is_dir() {
                result.add_error(
                    "catalog.path",
                    format!("Catalog path is a directory: {}", path.display()),
                );
            } else if path.extension().and_then(|e| e.to_str()) != Some("json") {
                result.add_warning(
                    "catalog.path",
                    format!("Catalog file is not a .json file: {}", path.display()),
                );
            }
        }

        if self.agronomy.crop_id == Some(0) {
            result.add_warning("agronomy.crop_id", "Crop ids start at 1");
        }

        result
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("xiineday");

        Ok(config_dir.join("config.toml"))
    }
}
