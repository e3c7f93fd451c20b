//! Recommendation Synthesizer
//!
//! Composes the one-paragraph usage recommendation from the score band,
//! bucket sizes and days-to-maturity, then appends toxicity and salinity
//! warnings driven by the raw readings.

use super::maturity::MaturityAssessment;
use super::suitability::SuitabilityBuckets;
use crate::parameters::{ParameterKey, ParameterSet};

/// GI below this triggers a toxicity warning
pub const GI_WARNING_THRESHOLD: f64 = 80.0;

/// EC above this triggers a salt-stress warning
pub const EC_WARNING_THRESHOLD: f64 = 4.0;

pub fn synthesize_recommendation(
    maturity: &MaturityAssessment,
    params: &ParameterSet,
    plants: &SuitabilityBuckets,
) -> String {
    let score = maturity.score;
    let days = maturity.days_to_maturity;
    let suitable = plants.suitable.len();
    let conditional = plants.conditional.len();

    let mut text = if score >= 70.0 {
        format!(
            "Mature and high-quality (Score: {:.1}). Ready for {} plant species. Apply 2-3 inches around plants.",
            score, suitable
        )
    } else if score >= 60.0 {
        format!(
            "Late-stage maturation (Score: {:.1}). Safe for {} plants now, {} more after {} days.",
            score, suitable, conditional, days
        )
    } else if score >= 50.0 {
        format!(
            "Further processing needed (Score: {:.1}). Suitable for {} hardy species. {} more days for broad use.",
            score, suitable, days
        )
    } else {
        format!(
            "Immature (Score: {:.1}). DO NOT use - phytotoxic. {} more days minimum.",
            score, days
        )
    };

    let gi = params[ParameterKey::GerminationIndex];
    if gi < GI_WARNING_THRESHOLD {
        text.push_str(&format!(" WARNING: GI {:.0}% - toxicity risk.", gi));
    }

    let ec = params[ParameterKey::ElectricalConductivity];
    if ec > EC_WARNING_THRESHOLD {
        text.push_str(&format!(" WARNING: EC {:.1} - salt stress risk.", ec));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::test_support::nominal_params;
    use crate::assessment::suitability::match_plants;
    use crate::catalog::PlantCatalog;

    fn buckets(params: &ParameterSet) -> SuitabilityBuckets {
        match_plants(params, &PlantCatalog::reference())
    }

    #[test]
    fn test_mature_band() {
        let params = nominal_params();
        let plants = buckets(&params);
        let text = synthesize_recommendation(&MaturityAssessment::from_score(82.4), &params, &plants);
        assert_eq!(
            text,
            format!(
                "Mature and high-quality (Score: 82.4). Ready for {} plant species. Apply 2-3 inches around plants.",
                plants.suitable.len()
            )
        );
    }

    #[test]
    fn test_late_stage_band() {
        let params = nominal_params();
        let plants = buckets(&params);
        let text = synthesize_recommendation(&MaturityAssessment::from_score(62.0), &params, &plants);
        assert_eq!(
            text,
            format!(
                "Late-stage maturation (Score: 62.0). Safe for {} plants now, {} more after 5 days.",
                plants.suitable.len(),
                plants.conditional.len()
            )
        );
    }

    #[test]
    fn test_processing_band() {
        let params = nominal_params();
        let plants = buckets(&params);
        let text = synthesize_recommendation(&MaturityAssessment::from_score(55.0), &params, &plants);
        assert!(text.starts_with("Further processing needed (Score: 55.0)."));
        assert!(text.ends_with("12 more days for broad use."));
    }

    #[test]
    fn test_immature_with_warnings() {
        let params = nominal_params()
            .with(ParameterKey::GerminationIndex, 42.0)
            .unwrap()
            .with(ParameterKey::ElectricalConductivity, 4.6)
            .unwrap();
        let plants = buckets(&params);
        let text = synthesize_recommendation(&MaturityAssessment::from_score(30.0), &params, &plants);
        assert_eq!(
            text,
            "Immature (Score: 30.0). DO NOT use - phytotoxic. 23 more days minimum. \
             WARNING: GI 42% - toxicity risk. WARNING: EC 4.6 - salt stress risk."
        );
    }

    #[test]
    fn test_warning_thresholds_are_strict() {
        let params = nominal_params()
            .with(ParameterKey::GerminationIndex, 80.0)
            .unwrap()
            .with(ParameterKey::ElectricalConductivity, 4.0)
            .unwrap();
        let plants = buckets(&params);
        let text = synthesize_recommendation(&MaturityAssessment::from_score(75.0), &params, &plants);
        assert!(!text.contains("WARNING"));
    }
}
