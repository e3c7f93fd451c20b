//! Assessment Report
//!
//! Aggregate result of one pipeline run. Built fresh per request and never
//! mutated afterwards.

use serde::Serialize;

use super::maturity::{MaturityStage, QualityStatus};
use super::remediation::RemediationItem;
use super::suitability::SuitabilityBuckets;
use crate::parameters::ParameterSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    /// Predicted quality score, rounded to two decimals. Stage and days are
    /// derived from the unrounded value.
    pub score: f64,
    pub stage: MaturityStage,
    pub quality_status: QualityStatus,
    pub days_to_maturity: u32,
    pub parameters: ParameterSet,
    pub remediation: Vec<RemediationItem>,
    pub improvement_summary: String,
    pub plants: SuitabilityBuckets,
    pub recommendation: String,
}

impl AssessmentReport {
    pub fn is_ready(&self) -> bool {
        self.days_to_maturity == 0
    }
}

/// Round to two decimal places for reporting
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(72.456), 72.46);
        assert_eq!(round_score(0.0), 0.0);
        assert_eq!(round_score(100.0), 100.0);
    }
}
