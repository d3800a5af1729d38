use crate::core::form::{ConversionForm, DEFAULT_AMOUNT, DEFAULT_SOURCE, DEFAULT_TARGET};
use crate::core::names::NameTable;
use crate::core::rates::StaticRateTable;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CurrencyConfig {
    pub code: String,
    pub rate: f64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RatesConfig {
    pub reference: String,
    pub currencies: Vec<CurrencyConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub default_from: Option<String>,
    #[serde(default)]
    pub default_to: Option<String>,
    #[serde(default)]
    pub default_amount: Option<String>,
    /// Currency listed first when showing choices.
    #[serde(default)]
    pub pinned: Option<String>,
    /// Replaces the built-in rate table when present.
    #[serde(default)]
    pub rates: Option<RatesConfig>,
}

impl AppConfig {
    /// Loads the config from the default location, or the built-in defaults
    /// when no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "xcv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// The configured rate table, or the built-in one.
    pub fn rate_table(&self) -> Result<StaticRateTable> {
        match &self.rates {
            Some(rates) => StaticRateTable::new(
                &rates.reference,
                rates
                    .currencies
                    .iter()
                    .map(|c| (c.code.as_str(), c.rate)),
            )
            .context("Invalid rate table in config"),
            None => Ok(StaticRateTable::builtin()),
        }
    }

    /// Built-in names extended with any names given alongside configured rates.
    pub fn name_table(&self) -> NameTable {
        let overrides = self
            .rates
            .iter()
            .flat_map(|rates| rates.currencies.iter())
            .filter_map(|c| c.name.as_deref().map(|name| (c.code.as_str(), name)));
        NameTable::builtin().with_overrides(overrides)
    }

    /// A form seeded with the configured defaults. Codes are uppercased like
    /// typed input.
    pub fn initial_form(&self) -> ConversionForm {
        ConversionForm::new(
            self.default_amount.as_deref().unwrap_or(DEFAULT_AMOUNT),
            &self
                .default_from
                .as_deref()
                .unwrap_or(DEFAULT_SOURCE)
                .to_uppercase(),
            &self
                .default_to
                .as_deref()
                .unwrap_or(DEFAULT_TARGET)
                .to_uppercase(),
        )
    }

    pub fn pinned(&self) -> String {
        self.pinned
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE)
            .to_uppercase()
    }
}
