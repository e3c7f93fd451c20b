//! Compost Assessment Pipeline
//!
//! Turns a validated parameter set and a quality score into a full report:
//!
//! ```text
//! score ─▶ Classifier ─▶ Advisor ─▶ Matcher ─▶ Synthesizer ─▶ AssessmentReport
//! ```
//!
//! Every stage is a pure function; nothing is carried between calls.
//!
//! ## Architecture
//! - `maturity.rs` - stage, quality status and days-to-maturity
//! - `remediation.rs` - declarative corrective-action rules
//! - `suitability.rs` - per-plant checks and tiering
//! - `growth_impact.rs` - per-plant growth narrative
//! - `recommendation.rs` - summary paragraph
//! - `report.rs` - aggregate result

pub mod growth_impact;
pub mod maturity;
pub mod recommendation;
pub mod remediation;
pub mod report;
pub mod suitability;

pub use growth_impact::{GrowthImpact, GrowthOutlook, ImpactLine};
pub use maturity::{classify, estimate_days_to_maturity, MaturityAssessment, MaturityStage, QualityStatus};
pub use recommendation::synthesize_recommendation;
pub use remediation::{improvement_summary, recommend_remediation, Deviation, Priority, RemediationItem};
pub use report::AssessmentReport;
pub use suitability::{
    evaluate_plant, match_plants, Criterion, FailedCheck, Severity, SuitabilityBuckets, SuitabilityTier,
    SuitabilityVerdict, WhenToUse,
};

use crate::catalog::PlantCatalog;
use crate::parameters::ParameterSet;

/// Germination index below which compost is phytotoxic regardless of species
pub const PHYTOTOXIC_GI: f64 = 50.0;

/// Run the full pipeline for one sample.
///
/// `score` must already be clamped to [0, 100]. Stage, days and the
/// recommendation use it as given; only the reported score is rounded.
pub fn assess(params: &ParameterSet, score: f64, catalog: &PlantCatalog) -> AssessmentReport {
    let maturity = MaturityAssessment::from_score(score);
    let remediation = recommend_remediation(params);
    let plants = match_plants(params, catalog);
    let recommendation = synthesize_recommendation(&maturity, params, &plants);

    AssessmentReport {
        score: report::round_score(score),
        stage: maturity.stage,
        quality_status: maturity.quality_status,
        days_to_maturity: maturity.days_to_maturity,
        parameters: *params,
        improvement_summary: improvement_summary(&remediation),
        remediation,
        plants,
        recommendation,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::nominal_params;
    use super::*;
    use crate::parameters::ParameterKey;

    #[test]
    fn test_assess_nominal_sample() {
        let report = assess(&nominal_params(), 74.237, &PlantCatalog::reference());

        assert_eq!(report.score, 74.24);
        assert_eq!(report.stage, MaturityStage::Mature);
        assert_eq!(report.quality_status, QualityStatus::Excellent);
        assert_eq!(report.days_to_maturity, 0);
        assert!(report.is_ready());
        assert!(report.remediation.is_empty());
        assert_eq!(report.improvement_summary, "All parameters optimal");
        assert_eq!(report.plants.len(), 10);
        assert!(report.recommendation.starts_with("Mature and high-quality (Score: 74.2)"));
    }

    #[test]
    fn test_phytotoxic_sample_has_no_suitable_plants() {
        let params = nominal_params().with(ParameterKey::GerminationIndex, 30.0).unwrap();
        let report = assess(&params, 20.0, &PlantCatalog::reference());

        assert!(report.plants.suitable.is_empty());
        assert_eq!(report.stage, MaturityStage::Initial);
        assert_eq!(report.remediation[0].priority, Priority::High);
        assert!(report.recommendation.contains("DO NOT use"));
    }

    #[test]
    fn test_rounding_does_not_move_stage_boundary() {
        let catalog = PlantCatalog::reference();

        let report = assess(&nominal_params(), 34.999, &catalog);
        assert_eq!(report.score, 35.0);
        assert_eq!(report.stage, MaturityStage::Initial);

        let report = assess(&nominal_params(), 69.996, &catalog);
        assert_eq!(report.score, 70.0);
        assert_eq!(report.days_to_maturity, 2);
        assert!(!report.is_ready());
    }

    #[test]
    fn test_assess_is_deterministic() {
        let catalog = PlantCatalog::reference();
        let a = assess(&nominal_params(), 61.0, &catalog);
        let b = assess(&nominal_params(), 61.0, &catalog);
        assert_eq!(a, b);
    }
}
