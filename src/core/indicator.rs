//! Shared contract for accounting-subject screening rules

use crate::core::attention::{AttentionLevel, Finding};
use serde::{Deserialize, Serialize};

/// Error raised when a screening ratio cannot be computed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero computing {0}")]
    DivisionByZero(&'static str),
}

/// Divides `numerator / denominator`, failing when the denominator is
/// exactly zero. A ratio with no denominator must never be coerced to
/// zero or infinity.
pub(crate) fn ratio(
    name: &'static str,
    numerator: f64,
    denominator: f64,
) -> Result<f64, EvalError> {
    if denominator == 0.0 {
        return Err(EvalError::DivisionByZero(name));
    }
    Ok(numerator / denominator)
}

/// A severity band over a ratio: `[attention, serious)` flags attention,
/// `>= serious` flags serious attention, anything below stays normal.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Band {
    pub attention: f64,
    pub serious: f64,
}

impl Band {
    /// Grades a ratio against the band. The serious edge is checked first
    /// so the intervals never overlap.
    pub fn grade(&self, value: f64) -> AttentionLevel {
        if value >= self.serious {
            AttentionLevel::Serious
        } else if value >= self.attention {
            AttentionLevel::Attention
        } else {
            AttentionLevel::Normal
        }
    }
}

/// Contract shared by every accounting-subject rule.
///
/// Implementations are immutable once constructed and hold all figures and
/// thresholds they need; evaluating one never touches another.
pub trait Indicator {
    /// Gating precondition for the escalation rule. May compute a ratio,
    /// so a zero denominator fails here too.
    fn premise(&self) -> Result<bool, EvalError>;

    /// Applies the precondition and threshold bands, producing the
    /// subject's labeled findings.
    fn compare(&self) -> Result<Vec<Finding>, EvalError>;
}
