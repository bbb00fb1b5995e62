use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::construction::ConstructionThresholds;
use crate::core::goodwill::GoodwillThresholds;
use crate::core::intangibles::IntangibleAssetsThresholds;
use crate::core::monetary_funds::MonetaryFundsThresholds;
use crate::core::receivables::OtherReceivablesThresholds;

/// Raw financial-statement figures for one reporting entity. Omitted
/// figures default to zero; validity of the numbers is the caller's
/// responsibility.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EntityFigures {
    #[serde(default)]
    pub interest_income: f64,
    #[serde(default)]
    pub avg_monetary_funds: f64,
    #[serde(default)]
    pub avg_total_assets: f64,
    #[serde(default)]
    pub interest_bearing_liabilities: f64,
    #[serde(default)]
    pub total_assets: f64,
    #[serde(default)]
    pub other_receivables: f64,
    #[serde(default)]
    pub other_payables: f64,
    #[serde(default)]
    pub goodwill: f64,
    #[serde(default)]
    pub intangible_assets: f64,
    #[serde(default)]
    pub construction_in_progress: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EntityConfig {
    pub name: String,
    #[serde(default)]
    pub industry_code: String,
    pub figures: EntityFigures,
}

/// Per-subject threshold table. Every section and field falls back to the
/// built-in defaults when omitted.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct ThresholdsConfig {
    #[serde(default)]
    pub monetary_funds: MonetaryFundsThresholds,
    #[serde(default)]
    pub other_receivables: OtherReceivablesThresholds,
    #[serde(default)]
    pub goodwill: GoodwillThresholds,
    #[serde(default)]
    pub intangible_assets: IntangibleAssetsThresholds,
    #[serde(default)]
    pub construction_in_progress: ConstructionThresholds,
}

/// Industry codes exempted from the rules that carry an exemption path.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ExemptionsConfig {
    #[serde(default)]
    pub monetary_funds: HashSet<String>,
    #[serde(default)]
    pub other_receivables: HashSet<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub entities: Vec<EntityConfig>,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub exemptions: ExemptionsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "redflag", "redflag")
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
}
