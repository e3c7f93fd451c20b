//! Plant Suitability Matcher
//!
//! Scores every catalog plant against the sample with six pass/fail checks
//! and sorts it into Suitable / Conditional / NotSuitable by the fraction of
//! checks passed. Catalog order is preserved inside each bucket.

use serde::Serialize;
use smallvec::SmallVec;

use super::growth_impact::{describe_growth_impact, GrowthImpact};
use super::PHYTOTOXIC_GI;
use crate::catalog::{GrowthProfile, PlantCatalog, PlantProfile};
use crate::parameters::{ParameterKey, ParameterSet};

pub const SUITABLE_THRESHOLD: f64 = 0.90;
pub const CONDITIONAL_THRESHOLD: f64 = 0.65;

/// Number of checks per plant
pub const CHECK_COUNT: usize = 6;

pub const SUITABLE_USAGE_ADVICE: &str = "Safe for immediate use. All parameters optimal.";

/// Checks in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Criterion {
    Ph,
    CnRatio,
    GerminationIndex,
    ElectricalConductivity,
    TotalNitrogen,
    OrganicMatter,
}

impl Criterion {
    pub const ALL: [Criterion; CHECK_COUNT] = [
        Criterion::Ph,
        Criterion::CnRatio,
        Criterion::GerminationIndex,
        Criterion::ElectricalConductivity,
        Criterion::TotalNitrogen,
        Criterion::OrganicMatter,
    ];

    /// Position in failure reporting (pH, GI, C/N, EC, TN, OM)
    fn severity_rank(&self) -> u8 {
        match self {
            Criterion::Ph => 0,
            Criterion::GerminationIndex => 1,
            Criterion::CnRatio => 2,
            Criterion::ElectricalConductivity => 3,
            Criterion::TotalNitrogen => 4,
            Criterion::OrganicMatter => 5,
        }
    }

    /// GI and EC failures cannot be fixed by amendment, only by more curing
    pub fn severity(&self) -> Severity {
        match self {
            Criterion::GerminationIndex | Criterion::ElectricalConductivity => Severity::Critical,
            _ => Severity::Amendable,
        }
    }

    pub fn parameter(&self) -> ParameterKey {
        match self {
            Criterion::Ph => ParameterKey::Ph,
            Criterion::CnRatio => ParameterKey::CnRatio,
            Criterion::GerminationIndex => ParameterKey::GerminationIndex,
            Criterion::ElectricalConductivity => ParameterKey::ElectricalConductivity,
            Criterion::TotalNitrogen => ParameterKey::TotalNitrogen,
            Criterion::OrganicMatter => ParameterKey::OrganicMatter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Amendable,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedCheck {
    pub criterion: Criterion,
    pub severity: Severity,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuitabilityTier {
    Suitable,
    Conditional,
    NotSuitable,
}

impl SuitabilityTier {
    /// Tier from the fraction of checks passed
    pub fn from_match_fraction(fraction: f64) -> Self {
        if fraction >= SUITABLE_THRESHOLD {
            SuitabilityTier::Suitable
        } else if fraction >= CONDITIONAL_THRESHOLD {
            SuitabilityTier::Conditional
        } else {
            SuitabilityTier::NotSuitable
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            SuitabilityTier::Suitable => "Suitable",
            SuitabilityTier::Conditional => "Conditional",
            SuitabilityTier::NotSuitable => "Not Suitable",
        }
    }
}

/// Timing advice for conditionally usable compost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WhenToUse {
    AfterMaturation,
    AfterAmendments,
}

impl WhenToUse {
    pub fn display_text(&self) -> &'static str {
        match self {
            WhenToUse::AfterMaturation => "After maturation",
            WhenToUse::AfterAmendments => "After amendments",
        }
    }
}

/// Outcome of matching one plant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitabilityVerdict {
    pub plant_name: String,
    pub plant_type: String,
    pub tier: SuitabilityTier,
    pub match_fraction: f64,
    /// Failed checks in severity order
    pub failures: SmallVec<[FailedCheck; CHECK_COUNT]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_advice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_to_use: Option<WhenToUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<&'static GrowthProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_impact: Option<GrowthImpact>,
}

impl SuitabilityVerdict {
    pub fn checks_passed(&self) -> usize {
        CHECK_COUNT - self.failures.len()
    }

    pub fn has_critical_failure(&self) -> bool {
        self.failures.iter().any(|f| f.severity == Severity::Critical)
    }
}

/// Verdicts partitioned by tier, each in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuitabilityBuckets {
    pub suitable: Vec<SuitabilityVerdict>,
    pub conditional: Vec<SuitabilityVerdict>,
    pub not_suitable: Vec<SuitabilityVerdict>,
}

impl SuitabilityBuckets {
    pub fn len(&self) -> usize {
        self.suitable.len() + self.conditional.len() + self.not_suitable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, verdict: SuitabilityVerdict) {
        match verdict.tier {
            SuitabilityTier::Suitable => self.suitable.push(verdict),
            SuitabilityTier::Conditional => self.conditional.push(verdict),
            SuitabilityTier::NotSuitable => self.not_suitable.push(verdict),
        }
    }
}

/// Germination minimum actually enforced: never below the phytotoxic limit
pub fn effective_min_gi(plant: &PlantProfile) -> f64 {
    plant.tolerances.min_gi.max(PHYTOTOXIC_GI)
}

fn check(params: &ParameterSet, plant: &PlantProfile, criterion: Criterion) -> Option<FailedCheck> {
    let t = &plant.tolerances;
    let value = params[criterion.parameter()];

    let reason = match criterion {
        Criterion::Ph if value < t.min_ph => {
            format!("pH too low ({:.1}, needs ≥{:.1})", value, t.min_ph)
        }
        Criterion::Ph if value > t.max_ph => {
            format!("pH too high ({:.1}, needs ≤{:.1})", value, t.max_ph)
        }
        Criterion::CnRatio if value > t.max_cn => {
            format!("C/N ratio high ({:.1}, needs ≤{:.0})", value, t.max_cn)
        }
        Criterion::GerminationIndex if value < effective_min_gi(plant) => {
            format!("Phytotoxic - GI {:.0}% (needs ≥{:.0}%)", value, effective_min_gi(plant))
        }
        Criterion::ElectricalConductivity if value > t.max_ec => {
            format!("Salt high ({:.1} ms/cm, needs ≤{:.1})", value, t.max_ec)
        }
        Criterion::TotalNitrogen if value < t.min_tn => {
            format!("Nitrogen low ({:.2}%, needs ≥{:.2}%)", value, t.min_tn)
        }
        Criterion::OrganicMatter if value < t.min_om => {
            format!("OM low ({:.0}%, needs ≥{:.0}%)", value, t.min_om)
        }
        _ => return None,
    };

    Some(FailedCheck {
        criterion,
        severity: criterion.severity(),
        reason,
    })
}

/// Match one plant against the sample
pub fn evaluate_plant(params: &ParameterSet, plant: &PlantProfile) -> SuitabilityVerdict {
    let mut failures: SmallVec<[FailedCheck; CHECK_COUNT]> = Criterion::ALL
        .iter()
        .filter_map(|&criterion| check(params, plant, criterion))
        .collect();
    failures.sort_by_key(|f| f.criterion.severity_rank());

    let passed = CHECK_COUNT - failures.len();
    let match_fraction = passed as f64 / CHECK_COUNT as f64;
    let tier = SuitabilityTier::from_match_fraction(match_fraction);

    let mut verdict = SuitabilityVerdict {
        plant_name: plant.name.clone(),
        plant_type: plant.plant_type.clone(),
        tier,
        match_fraction,
        failures,
        reason: None,
        usage_advice: None,
        when_to_use: None,
        growth: None,
        growth_impact: None,
    };

    match tier {
        SuitabilityTier::Suitable => {
            verdict.usage_advice = Some(SUITABLE_USAGE_ADVICE);
            verdict.growth = Some(plant.growth);
            verdict.growth_impact = Some(describe_growth_impact(
                params,
                plant,
                effective_min_gi(plant),
                match_fraction,
            ));
        }
        SuitabilityTier::Conditional => {
            let summary: Vec<&str> = verdict.failures.iter().take(2).map(|f| f.reason.as_str()).collect();
            verdict.reason = Some(summary.join("; "));
            verdict.when_to_use = Some(if verdict.has_critical_failure() {
                WhenToUse::AfterMaturation
            } else {
                WhenToUse::AfterAmendments
            });
            verdict.growth = Some(plant.growth);
            verdict.growth_impact = Some(describe_growth_impact(
                params,
                plant,
                effective_min_gi(plant),
                match_fraction,
            ));
        }
        SuitabilityTier::NotSuitable => {
            verdict.reason = Some(
                verdict
                    .failures
                    .first()
                    .map(|f| f.reason.clone())
                    .unwrap_or_else(|| "Multiple constraints".to_string()),
            );
        }
    }

    verdict
}

/// Match every catalog plant, preserving catalog order within each tier
pub fn match_plants(params: &ParameterSet, catalog: &PlantCatalog) -> SuitabilityBuckets {
    let mut buckets = SuitabilityBuckets::default();
    for plant in catalog {
        buckets.push(evaluate_plant(params, plant));
    }
    buckets
}
