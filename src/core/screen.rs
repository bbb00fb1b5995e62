//! Entity screening driver

use crate::core::attention::Finding;
use crate::core::config::{EntityConfig, ExemptionsConfig, ThresholdsConfig};
use crate::core::construction::ConstructionInProgress;
use crate::core::goodwill::Goodwill;
use crate::core::indicator::{EvalError, Indicator};
use crate::core::intangibles::IntangibleAssets;
use crate::core::monetary_funds::MonetaryFunds;
use crate::core::receivables::OtherReceivables;

/// Screens one reporting entity across all five accounting subjects.
///
/// Indicators are constructed fresh for the entity and evaluated in
/// statement order: monetary funds, other receivables, goodwill,
/// intangible assets, construction in progress. The first ratio failure
/// aborts the entity's screening; no default is ever substituted.
pub fn screen_entity(
    entity: &EntityConfig,
    thresholds: &ThresholdsConfig,
    exemptions: &ExemptionsConfig,
) -> Result<Vec<Finding>, EvalError> {
    let figures = &entity.figures;
    let indicators: Vec<Box<dyn Indicator>> = vec![
        Box::new(MonetaryFunds::new(
            figures.interest_income,
            figures.avg_monetary_funds,
            figures.avg_total_assets,
            figures.interest_bearing_liabilities,
            figures.total_assets,
            thresholds.monetary_funds,
            &entity.industry_code,
            exemptions.monetary_funds.clone(),
        )),
        Box::new(OtherReceivables::new(
            figures.other_receivables,
            figures.other_payables,
            figures.total_assets,
            thresholds.other_receivables,
            &entity.industry_code,
            exemptions.other_receivables.clone(),
        )),
        Box::new(Goodwill::new(
            figures.goodwill,
            figures.total_assets,
            thresholds.goodwill,
        )),
        Box::new(IntangibleAssets::new(
            figures.intangible_assets,
            figures.total_assets,
            thresholds.intangible_assets,
        )),
        Box::new(ConstructionInProgress::new(
            figures.construction_in_progress,
            figures.total_assets,
            thresholds.construction_in_progress,
        )),
    ];

    let mut findings = Vec::new();
    for indicator in indicators {
        findings.extend(indicator.compare()?);
    }
    Ok(findings)
}
