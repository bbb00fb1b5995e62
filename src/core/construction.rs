//! Construction-in-progress screening

use serde::{Deserialize, Serialize};

use crate::core::attention::Finding;
use crate::core::indicator::{Band, EvalError, Indicator, ratio};

pub const CONSTRUCTION_LABEL: &str = "在建工程";

fn default_band() -> Band {
    Band {
        attention: 0.2,
        serious: 0.3,
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ConstructionThresholds {
    /// Band on construction in progress / total assets.
    #[serde(default = "default_band")]
    pub band: Band,
}

impl Default for ConstructionThresholds {
    fn default() -> Self {
        ConstructionThresholds {
            band: default_band(),
        }
    }
}

/// Screening rule for the construction-in-progress subject. Always evaluated.
pub struct ConstructionInProgress {
    construction_in_progress: f64,
    total_assets: f64,
    thresholds: ConstructionThresholds,
}

impl ConstructionInProgress {
    pub fn new(
        construction_in_progress: f64,
        total_assets: f64,
        thresholds: ConstructionThresholds,
    ) -> Self {
        ConstructionInProgress {
            construction_in_progress,
            total_assets,
            thresholds,
        }
    }

    /// Construction in progress / total assets.
    fn construction_share(&self) -> Result<f64, EvalError> {
        ratio(
            "construction in progress / total assets",
            self.construction_in_progress,
            self.total_assets,
        )
    }
}

impl Indicator for ConstructionInProgress {
    fn premise(&self) -> Result<bool, EvalError> {
        Ok(true)
    }

    fn compare(&self) -> Result<Vec<Finding>, EvalError> {
        let mut finding = Finding::normal(CONSTRUCTION_LABEL);
        finding.level = self.thresholds.band.grade(self.construction_share()?);
        Ok(vec![finding])
    }
}
