//! Monetary funds screening
//!
//! Two sub-rules share the subject: a funds-share check for low-leverage
//! entities and a debt-coverage check for high-leverage ones. Both entries
//! are reported whenever the interest-income gate is computable and
//! non-zero; a gated-out sub-rule stays at the normal level.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::attention::Finding;
use crate::core::indicator::{Band, EvalError, Indicator, ratio};

pub const FUNDS_SHARE_LABEL: &str = "货币资金1";
pub const DEBT_COVERAGE_LABEL: &str = "货币资金2";

fn default_interest_income_cap() -> f64 {
    0.009
}

fn default_leverage_floor() -> f64 {
    0.25
}

fn default_funds_share_band() -> Band {
    Band {
        attention: 0.2,
        serious: 0.3,
    }
}

fn default_debt_coverage_band() -> Band {
    Band {
        attention: 0.5,
        serious: 0.7,
    }
}

/// Thresholds for the monetary funds rules. Every field can be overridden
/// independently in the configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MonetaryFundsThresholds {
    /// Upper bound on interest income / average monetary funds.
    #[serde(default = "default_interest_income_cap")]
    pub interest_income_cap: f64,
    /// Lower bound on interest-bearing liabilities / total assets.
    #[serde(default = "default_leverage_floor")]
    pub leverage_floor: f64,
    /// Band on average monetary funds / average total assets.
    #[serde(default = "default_funds_share_band")]
    pub funds_share_band: Band,
    /// Band on average total assets / interest-bearing liabilities.
    #[serde(default = "default_debt_coverage_band")]
    pub debt_coverage_band: Band,
}

impl Default for MonetaryFundsThresholds {
    fn default() -> Self {
        MonetaryFundsThresholds {
            interest_income_cap: default_interest_income_cap(),
            leverage_floor: default_leverage_floor(),
            funds_share_band: default_funds_share_band(),
            debt_coverage_band: default_debt_coverage_band(),
        }
    }
}

/// Screening rule for the monetary funds subject.
pub struct MonetaryFunds {
    interest_income: f64,
    avg_monetary_funds: f64,
    avg_total_assets: f64,
    interest_bearing_liabilities: f64,
    total_assets: f64,
    thresholds: MonetaryFundsThresholds,
    industry_code: String,
    exempt_industries: HashSet<String>,
}

impl MonetaryFunds {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        interest_income: f64,
        avg_monetary_funds: f64,
        avg_total_assets: f64,
        interest_bearing_liabilities: f64,
        total_assets: f64,
        thresholds: MonetaryFundsThresholds,
        industry_code: &str,
        exempt_industries: HashSet<String>,
    ) -> Self {
        MonetaryFunds {
            interest_income,
            avg_monetary_funds,
            avg_total_assets,
            interest_bearing_liabilities,
            total_assets,
            thresholds,
            industry_code: industry_code.to_string(),
            exempt_industries,
        }
    }

    /// Interest income / four-quarter average monetary funds.
    fn interest_to_avg_funds(&self) -> Result<f64, EvalError> {
        ratio(
            "interest income / average monetary funds",
            self.interest_income,
            self.avg_monetary_funds,
        )
    }

    /// Interest-bearing liabilities / total assets.
    fn leverage(&self) -> Result<f64, EvalError> {
        ratio(
            "interest-bearing liabilities / total assets",
            self.interest_bearing_liabilities,
            self.total_assets,
        )
    }

    /// Four-quarter average monetary funds / four-quarter average total assets.
    fn funds_share(&self) -> Result<f64, EvalError> {
        ratio(
            "average monetary funds / average total assets",
            self.avg_monetary_funds,
            self.avg_total_assets,
        )
    }

    /// Four-quarter average total assets / interest-bearing liabilities.
    fn debt_coverage(&self) -> Result<f64, EvalError> {
        ratio(
            "average total assets / interest-bearing liabilities",
            self.avg_total_assets,
            self.interest_bearing_liabilities,
        )
    }

    fn over_leverage_floor(&self) -> Result<bool, EvalError> {
        Ok(self.leverage()? >= self.thresholds.leverage_floor)
    }

    fn industry_exempt(&self) -> bool {
        self.exempt_industries.contains(&self.industry_code)
    }
}

impl Indicator for MonetaryFunds {
    fn premise(&self) -> Result<bool, EvalError> {
        Ok(self.interest_to_avg_funds()? < self.thresholds.interest_income_cap)
    }

    fn compare(&self) -> Result<Vec<Finding>, EvalError> {
        let mut findings = Vec::new();

        // No findings at all when the interest gate is exactly zero.
        if self.interest_to_avg_funds()? == 0.0 {
            return Ok(findings);
        }

        let over_floor = self.over_leverage_floor()?;

        // Sub-rule 1: funds share, only for non-exempt, low-leverage entities.
        let mut funds_share = Finding::normal(FUNDS_SHARE_LABEL);
        if !self.industry_exempt() && !over_floor {
            funds_share.level = self.thresholds.funds_share_band.grade(self.funds_share()?);
        }
        findings.push(funds_share);

        // Sub-rule 2: debt coverage, only at or above the leverage floor.
        let mut coverage = Finding::normal(DEBT_COVERAGE_LABEL);
        if over_floor {
            coverage.level = self
                .thresholds
                .debt_coverage_band
                .grade(self.debt_coverage()?);
        }
        findings.push(coverage);

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attention::AttentionLevel;

    fn indicator(
        interest_income: f64,
        avg_monetary_funds: f64,
        avg_total_assets: f64,
        interest_bearing_liabilities: f64,
        total_assets: f64,
    ) -> MonetaryFunds {
        MonetaryFunds::new(
            interest_income,
            avg_monetary_funds,
            avg_total_assets,
            interest_bearing_liabilities,
            total_assets,
            MonetaryFundsThresholds::default(),
            "",
            HashSet::new(),
        )
    }

    #[test]
    fn test_high_leverage_flags_debt_coverage() {
        // liabilities/assets = 0.4 skips sub-rule 1; coverage 40000/20000 = 2.0
        let funds = indicator(1000.0, 30000.0, 40000.0, 20000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].label, FUNDS_SHARE_LABEL);
        assert_eq!(findings[0].level, AttentionLevel::Normal);
        assert_eq!(findings[1].label, DEBT_COVERAGE_LABEL);
        assert_eq!(findings[1].level, AttentionLevel::Serious);
    }

    #[test]
    fn test_low_leverage_flags_funds_share() {
        // liabilities/assets = 0.1; funds share 12000/40000 = 0.3
        let funds = indicator(1000.0, 12000.0, 40000.0, 5000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");

        assert_eq!(findings[0].level, AttentionLevel::Serious);
        assert_eq!(findings[1].level, AttentionLevel::Normal);
    }

    #[test]
    fn test_funds_share_band_edges() {
        // 8000/40000 = 0.2, the inclusive attention edge
        let funds = indicator(1000.0, 8000.0, 40000.0, 5000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");
        assert_eq!(findings[0].level, AttentionLevel::Attention);

        // 7999/40000 just below the edge
        let funds = indicator(1000.0, 7999.0, 40000.0, 5000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");
        assert_eq!(findings[0].level, AttentionLevel::Normal);
    }

    #[test]
    fn test_debt_coverage_band_edges() {
        // liabilities/assets = 0.4; coverage 10000/20000 = 0.5
        let funds = indicator(1000.0, 30000.0, 10000.0, 20000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");
        assert_eq!(findings[1].level, AttentionLevel::Attention);

        // coverage 14000/20000 = 0.7, the serious edge
        let funds = indicator(1000.0, 30000.0, 14000.0, 20000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");
        assert_eq!(findings[1].level, AttentionLevel::Serious);
    }

    #[test]
    fn test_exempt_industry_skips_funds_share() {
        let funds = MonetaryFunds::new(
            1000.0,
            12000.0,
            40000.0,
            5000.0,
            50000.0,
            MonetaryFundsThresholds::default(),
            "J66",
            HashSet::from(["J66".to_string()]),
        );
        let findings = funds.compare().expect("Evaluation should succeed");

        assert_eq!(findings[0].level, AttentionLevel::Normal);
        assert_eq!(findings[1].level, AttentionLevel::Normal);
    }

    #[test]
    fn test_zero_interest_gate_produces_no_findings() {
        let funds = indicator(0.0, 30000.0, 40000.0, 20000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_zero_avg_monetary_funds_fails() {
        let funds = indicator(1000.0, 0.0, 40000.0, 20000.0, 50000.0);
        assert!(matches!(
            funds.compare(),
            Err(EvalError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_zero_total_assets_fails() {
        let funds = indicator(1000.0, 30000.0, 40000.0, 20000.0, 0.0);
        assert!(matches!(
            funds.compare(),
            Err(EvalError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_zero_avg_total_assets_fails_only_when_graded() {
        // High leverage never grades the funds share, so its zero
        // denominator is never touched; coverage grades 0/20000 = 0.
        let funds = indicator(1000.0, 30000.0, 0.0, 20000.0, 50000.0);
        let findings = funds.compare().expect("Evaluation should succeed");
        assert_eq!(findings[0].level, AttentionLevel::Normal);
        assert_eq!(findings[1].level, AttentionLevel::Normal);

        // Low leverage grades the funds share and must fail.
        let low_leverage = indicator(1000.0, 30000.0, 0.0, 5000.0, 50000.0);
        assert!(matches!(
            low_leverage.compare(),
            Err(EvalError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_premise_checks_interest_income_cap() {
        // 1000/30000 is well above the 0.009 cap
        let funds = indicator(1000.0, 30000.0, 40000.0, 20000.0, 50000.0);
        assert_eq!(funds.premise(), Ok(false));

        // 9/30000 = 0.0003 is below the cap
        let funds = indicator(9.0, 30000.0, 40000.0, 20000.0, 50000.0);
        assert_eq!(funds.premise(), Ok(true));
    }

    #[test]
    fn test_threshold_overrides_are_honored() {
        let thresholds = MonetaryFundsThresholds {
            leverage_floor: 0.5,
            ..Default::default()
        };
        // liabilities/assets = 0.4 is now below the floor, so sub-rule 1
        // applies instead of sub-rule 2.
        let funds = MonetaryFunds::new(
            1000.0,
            30000.0,
            40000.0,
            20000.0,
            50000.0,
            thresholds,
            "",
            HashSet::new(),
        );
        let findings = funds.compare().expect("Evaluation should succeed");
        // funds share 30000/40000 = 0.75
        assert_eq!(findings[0].level, AttentionLevel::Serious);
        assert_eq!(findings[1].level, AttentionLevel::Normal);
    }
}
