//! Goodwill screening

use serde::{Deserialize, Serialize};

use crate::core::attention::{AttentionLevel, Finding};
use crate::core::indicator::{Band, EvalError, Indicator, ratio};

pub const GOODWILL_LABEL: &str = "商誉";

fn default_band() -> Band {
    Band {
        attention: 0.15,
        serious: 0.2,
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct GoodwillThresholds {
    /// Band on goodwill / total assets. The lower edge is exclusive for
    /// this subject.
    #[serde(default = "default_band")]
    pub band: Band,
}

impl Default for GoodwillThresholds {
    fn default() -> Self {
        GoodwillThresholds {
            band: default_band(),
        }
    }
}

/// Screening rule for the goodwill subject. Always evaluated, no gate.
pub struct Goodwill {
    goodwill: f64,
    total_assets: f64,
    thresholds: GoodwillThresholds,
}

impl Goodwill {
    pub fn new(goodwill: f64, total_assets: f64, thresholds: GoodwillThresholds) -> Self {
        Goodwill {
            goodwill,
            total_assets,
            thresholds,
        }
    }

    /// Goodwill / total assets.
    fn goodwill_share(&self) -> Result<f64, EvalError> {
        ratio("goodwill / total assets", self.goodwill, self.total_assets)
    }
}

impl Indicator for Goodwill {
    fn premise(&self) -> Result<bool, EvalError> {
        Ok(true)
    }

    fn compare(&self) -> Result<Vec<Finding>, EvalError> {
        let share = self.goodwill_share()?;
        let mut finding = Finding::normal(GOODWILL_LABEL);
        // Attention interval is open at the lower edge: a share of exactly
        // `attention` stays normal.
        finding.level = if share >= self.thresholds.band.serious {
            AttentionLevel::Serious
        } else if share > self.thresholds.band.attention {
            AttentionLevel::Attention
        } else {
            AttentionLevel::Normal
        };
        Ok(vec![finding])
    }
}
