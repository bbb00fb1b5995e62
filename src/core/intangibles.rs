//! Intangible assets screening

use serde::{Deserialize, Serialize};

use crate::core::attention::Finding;
use crate::core::indicator::{Band, EvalError, Indicator, ratio};

pub const INTANGIBLE_ASSETS_LABEL: &str = "无形资产";

fn default_band() -> Band {
    Band {
        attention: 0.15,
        serious: 0.2,
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct IntangibleAssetsThresholds {
    /// Band on intangible assets / total assets.
    #[serde(default = "default_band")]
    pub band: Band,
}

impl Default for IntangibleAssetsThresholds {
    fn default() -> Self {
        IntangibleAssetsThresholds {
            band: default_band(),
        }
    }
}

/// Screening rule for the intangible assets subject. Always evaluated.
pub struct IntangibleAssets {
    intangible_assets: f64,
    total_assets: f64,
    thresholds: IntangibleAssetsThresholds,
}

impl IntangibleAssets {
    pub fn new(
        intangible_assets: f64,
        total_assets: f64,
        thresholds: IntangibleAssetsThresholds,
    ) -> Self {
        IntangibleAssets {
            intangible_assets,
            total_assets,
            thresholds,
        }
    }

    /// Intangible assets / total assets.
    fn intangibles_share(&self) -> Result<f64, EvalError> {
        ratio(
            "intangible assets / total assets",
            self.intangible_assets,
            self.total_assets,
        )
    }
}

impl Indicator for IntangibleAssets {
    fn premise(&self) -> Result<bool, EvalError> {
        Ok(true)
    }

    fn compare(&self) -> Result<Vec<Finding>, EvalError> {
        let mut finding = Finding::normal(INTANGIBLE_ASSETS_LABEL);
        finding.level = self.thresholds.band.grade(self.intangibles_share()?);
        Ok(vec![finding])
    }
}
