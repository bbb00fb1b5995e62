//! Other receivables screening

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::attention::Finding;
use crate::core::indicator::{Band, EvalError, Indicator, ratio};

pub const OTHER_RECEIVABLES_LABEL: &str = "其他应收款";

fn default_band() -> Band {
    Band {
        attention: 0.15,
        serious: 0.25,
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct OtherReceivablesThresholds {
    /// Band on other receivables / total assets.
    #[serde(default = "default_band")]
    pub band: Band,
}

impl Default for OtherReceivablesThresholds {
    fn default() -> Self {
        OtherReceivablesThresholds {
            band: default_band(),
        }
    }
}

/// Screening rule for the other receivables subject.
///
/// The rule escalates only when the receivable balance covers the payable
/// balance and the industry is not exempt.
pub struct OtherReceivables {
    other_receivables: f64,
    other_payables: f64,
    total_assets: f64,
    thresholds: OtherReceivablesThresholds,
    industry_code: String,
    exempt_industries: HashSet<String>,
}

impl OtherReceivables {
    pub fn new(
        other_receivables: f64,
        other_payables: f64,
        total_assets: f64,
        thresholds: OtherReceivablesThresholds,
        industry_code: &str,
        exempt_industries: HashSet<String>,
    ) -> Self {
        // Both balances are folded to absolute values at construction.
        OtherReceivables {
            other_receivables: other_receivables.abs(),
            other_payables: other_payables.abs(),
            total_assets,
            thresholds,
            industry_code: industry_code.to_string(),
            exempt_industries,
        }
    }

    /// Other receivables / total assets.
    fn receivables_share(&self) -> Result<f64, EvalError> {
        ratio(
            "other receivables / total assets",
            self.other_receivables,
            self.total_assets,
        )
    }

    fn industry_exempt(&self) -> bool {
        self.exempt_industries.contains(&self.industry_code)
    }
}

impl Indicator for OtherReceivables {
    fn premise(&self) -> Result<bool, EvalError> {
        Ok(self.other_receivables - self.other_payables >= 0.0)
    }

    fn compare(&self) -> Result<Vec<Finding>, EvalError> {
        let mut finding = Finding::normal(OTHER_RECEIVABLES_LABEL);
        if self.premise()? && !self.industry_exempt() {
            finding.level = self.thresholds.band.grade(self.receivables_share()?);
        }
        Ok(vec![finding])
    }
}
