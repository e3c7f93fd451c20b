//! Growth Impact Narrative
//!
//! Per-plant explanation of how the sample's chemistry affects the species:
//! six status lines (pH, GI, TN, OM, C/N, EC) followed by a four-stage
//! outlook. The outlook is optimistic only for Suitable-grade matches.

use serde::Serialize;

use super::suitability::SUITABLE_THRESHOLD;
use crate::catalog::PlantProfile;
use crate::parameters::{ParameterKey, ParameterSet};

/// One narrative line, e.g. `pH: ✓ OPTIMAL - pH 7.0 is perfect for ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactLine {
    pub label: &'static str,
    pub status: &'static str,
    pub detail: String,
}

impl ImpactLine {
    fn new(label: &'static str, status: &'static str, detail: String) -> Self {
        Self { label, status, detail }
    }

    pub fn render(&self) -> String {
        format!("{}: {} - {}", self.label, self.status, self.detail)
    }
}

/// Expected behaviour across the crop cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthOutlook {
    pub seedling: &'static str,
    pub vegetative: &'static str,
    pub reproductive: &'static str,
    pub harvest: &'static str,
}

impl GrowthOutlook {
    pub const OPTIMISTIC: GrowthOutlook = GrowthOutlook {
        seedling: "Fast germination and robust root establishment",
        vegetative: "Vigorous shoot growth and healthy foliage",
        reproductive: "Good flowering/fruiting with minimal stress",
        harvest: "High-quality yields with optimal nutrients",
    };

    pub const CAUTIONARY: GrowthOutlook = GrowthOutlook {
        seedling: "Early growth may be slower",
        vegetative: "Nutrient availability or toxicity issues",
        reproductive: "May need amendments between growth stages",
        harvest: "Lower yields than optimized compost",
    };

    pub fn stages(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Seedling", self.seedling),
            ("Vegetative", self.vegetative),
            ("Reproductive", self.reproductive),
            ("Harvest", self.harvest),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthImpact {
    pub headline: String,
    pub lines: Vec<ImpactLine>,
    pub outlook: GrowthOutlook,
}

impl GrowthImpact {
    pub fn is_optimistic(&self) -> bool {
        self.outlook == GrowthOutlook::OPTIMISTIC
    }
}

/// Build the narrative for one plant.
///
/// `min_gi` is the effective germination minimum applied by the matcher, so
/// the GI line always agrees with the suitability check.
pub fn describe_growth_impact(
    params: &ParameterSet,
    plant: &PlantProfile,
    min_gi: f64,
    match_fraction: f64,
) -> GrowthImpact {
    let name = plant.name.as_str();
    let t = &plant.tolerances;

    let ph = params[ParameterKey::Ph];
    let gi = params[ParameterKey::GerminationIndex];
    let tn = params[ParameterKey::TotalNitrogen];
    let om = params[ParameterKey::OrganicMatter];
    let cn = params[ParameterKey::CnRatio];
    let ec = params[ParameterKey::ElectricalConductivity];

    let mut lines = Vec::with_capacity(6);

    lines.push(if ph < t.min_ph {
        ImpactLine::new(
            "pH",
            "⚠ LOW",
            format!(
                "pH {:.1} is too acidic. {} needs {:.1}-{:.1}. Reduces nutrient uptake.",
                ph, name, t.min_ph, t.max_ph
            ),
        )
    } else if ph > t.max_ph {
        ImpactLine::new(
            "pH",
            "⚠ HIGH",
            format!(
                "pH {:.1} is too alkaline. {} prefers {:.1}-{:.1}. Causes nutrient lockup.",
                ph, name, t.min_ph, t.max_ph
            ),
        )
    } else {
        ImpactLine::new(
            "pH",
            "✓ OPTIMAL",
            format!(
                "pH {:.1} is perfect for {}. Supports nutrient availability, microbial activity, and root development.",
                ph, name
            ),
        )
    });

    lines.push(if gi < min_gi {
        ImpactLine::new(
            "Germination Index",
            "✗ TOXIC",
            format!(
                "GI {:.0}% is too low. Phytotoxic - severely inhibits seed germination and damages seedling roots.",
                gi
            ),
        )
    } else if gi >= 85.0 {
        ImpactLine::new(
            "Germination Index",
            "✓ SAFE",
            format!(
                "GI {:.0}% is excellent. Strong seed germination (85%+), vigorous seedling, robust early growth.",
                gi
            ),
        )
    } else {
        ImpactLine::new(
            "Germination Index",
            "✓ SAFE",
            format!("GI {:.0}% meets minimum. Acceptable germination but some slower initial growth.", gi),
        )
    });

    lines.push(if tn < t.min_tn {
        ImpactLine::new(
            "Total Nitrogen",
            "✗ DEFICIENT",
            format!("TN {:.2}% is low. Nitrogen deficiency - stunted growth, yellowing, reduced yields.", tn),
        )
    } else if tn >= 2.0 {
        ImpactLine::new(
            "Total Nitrogen",
            "✓ ADEQUATE",
            format!("TN {:.2}% is high. Excellent vegetative growth, dark foliage, strong shoots.", tn),
        )
    } else {
        ImpactLine::new(
            "Total Nitrogen",
            "✓ ADEQUATE",
            format!("TN {:.2}% meets requirement. Normal vegetative growth throughout season.", tn),
        )
    });

    lines.push(if om < t.min_om {
        ImpactLine::new(
            "Organic Matter",
            "✗ LOW",
            format!("OM {:.0}% is low. Poor water retention, limited nutrients, weak soil structure.", om),
        )
    } else if om >= 60.0 {
        ImpactLine::new(
            "Organic Matter",
            "✓ GOOD",
            format!(
                "OM {:.0}% is excellent. Superior water retention, slow nutrient release, strong root structure.",
                om
            ),
        )
    } else {
        ImpactLine::new(
            "Organic Matter",
            "✓ GOOD",
            format!("OM {:.0}% is adequate. Moderate water retention and nutrient buffering.", om),
        )
    });

    lines.push(if cn > t.max_cn {
        ImpactLine::new(
            "C/N Ratio",
            "⚠ IMBALANCED",
            format!("C/N ratio {:.1} is high. Slow nitrogen release delays initial growth.", cn),
        )
    } else {
        ImpactLine::new(
            "C/N Ratio",
            "✓ BALANCED",
            format!("C/N ratio {:.1} is ideal. Quick nitrogen release supports vegetative growth.", cn),
        )
    });

    lines.push(if ec > t.max_ec {
        ImpactLine::new(
            "Electrical Conductivity",
            "✗ SALINE",
            format!("EC {:.1} is too high. Salt stress - reduced water uptake, wilting, leaf burn.", ec),
        )
    } else if ec <= 2.5 {
        ImpactLine::new(
            "Electrical Conductivity",
            "✓ SAFE",
            format!("EC {:.1} is very low. Optimal root water uptake, no salt stress.", ec),
        )
    } else {
        ImpactLine::new(
            "Electrical Conductivity",
            "✓ SAFE",
            format!("EC {:.1} is acceptable. Low-moderate salt won't hinder growth.", ec),
        )
    });

    let (grade, outlook) = if match_fraction >= SUITABLE_THRESHOLD {
        ("EXCELLENT", GrowthOutlook::OPTIMISTIC)
    } else {
        ("LIMITED", GrowthOutlook::CAUTIONARY)
    };

    GrowthImpact {
        headline: format!("GROWTH POTENTIAL FOR {}: {}", name.to_uppercase(), grade),
        lines,
        outlook,
    }
}
