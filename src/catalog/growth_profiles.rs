//! Growth Profile Lookup Table
//!
//! Agronomic metadata shown alongside a suitability verdict: growth rate,
//! harvest horizon, pros/cons and typical yield. Keyed by the species name
//! used in the plant catalog.
//!
//! Species without an entry get `GENERIC_GROWTH_PROFILE` rather than an error.

use serde::Serialize;

/// Growth characteristics for one species
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthProfile {
    pub name: &'static str,
    pub growth_rate: &'static str,
    pub time_to_harvest: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
    pub yield_potential: &'static str,
}

impl GrowthProfile {
    pub fn is_generic(&self) -> bool {
        std::ptr::eq(self, &GENERIC_GROWTH_PROFILE)
    }
}

/// Fallback for species not in the table
pub static GENERIC_GROWTH_PROFILE: GrowthProfile = GrowthProfile {
    name: "Generic",
    growth_rate: "Variable",
    time_to_harvest: "Consult extension",
    advantages: &["Check local variety data"],
    disadvantages: &["Variety specific"],
    yield_potential: "Varies by conditions",
};

// ============================================================================
// EMBEDDED GROWTH PROFILES
// ============================================================================

static GROWTH_PROFILES: &[GrowthProfile] = &[
    GrowthProfile {
        name: "Pineapple",
        growth_rate: "Slow to Medium",
        time_to_harvest: "400-600",
        advantages: &["Perennial crop - 3-4 years yield", "Drought tolerant", "Acid soil tolerant", "Low maintenance"],
        disadvantages: &["Very long maturation", "Requires well-draining soil", "Sensitive to waterlogging", "Slow initial growth"],
        yield_potential: "40-50 tons/hectare",
    },
    GrowthProfile {
        name: "Jackfruit",
        growth_rate: "Medium",
        time_to_harvest: "2-3 years",
        advantages: &["Large fruit yield", "Tolerates poor soils", "Climate resilient", "Long productive life (20-40 years)"],
        disadvantages: &["High water requirement", "Fruit rot in wet climate", "Large canopy needs space"],
        yield_potential: "20-30 tons/hectare",
    },
    GrowthProfile {
        name: "Sapota (Chikoo)",
        growth_rate: "Slow",
        time_to_harvest: "3-4 years",
        advantages: &["Highly nutritious", "Drought resistant", "Long productive life (40+ years)", "Good market value"],
        disadvantages: &["3-4 years before fruiting", "Fruit cracking in rains", "Needs regular pruning"],
        yield_potential: "15-25 tons/hectare",
    },
    GrowthProfile {
        name: "Custard Apple",
        growth_rate: "Medium",
        time_to_harvest: "2-3 years",
        advantages: &["Excellent taste", "Heat and drought tolerant", "Quick maturity"],
        disadvantages: &["Needs hand pollination", "Fruit drop in unsuitable conditions", "Moderate pest pressure"],
        yield_potential: "10-15 tons/hectare",
    },
    GrowthProfile {
        name: "Watermelon",
        growth_rate: "Fast",
        time_to_harvest: "70-100",
        advantages: &["Quick harvest", "High water content", "Good market demand", "Flexible spacing"],
        disadvantages: &["Requires consistent irrigation", "High nitrogen demand", "Fungal disease risk", "Short shelf life"],
        yield_potential: "25-35 tons/hectare",
    },
    GrowthProfile {
        name: "Muskmelon",
        growth_rate: "Fast",
        time_to_harvest: "80-120",
        advantages: &["Premium price", "High sugar with quality compost", "Good export potential", "Vine covers quickly"],
        disadvantages: &["Requires excellent drainage", "High nitrogen boost needed", "Powdery mildew susceptible", "Salt stress sensitive"],
        yield_potential: "20-30 tons/hectare",
    },
    GrowthProfile {
        name: "Brinjal (Eggplant)",
        growth_rate: "Medium",
        time_to_harvest: "60-90",
        advantages: &["Long season (8-10 months)", "Continuous harvesting", "High market demand", "Multiple harvests"],
        disadvantages: &["Borer susceptible", "Requires consistent watering", "Heavy feeder"],
        yield_potential: "30-40 tons/hectare",
    },
    GrowthProfile {
        name: "Bottle Gourd",
        growth_rate: "Fast",
        time_to_harvest: "60-70",
        advantages: &["High productivity", "Prolific fruiting", "Vertical farming suitable", "Long shelf life"],
        disadvantages: &["Needs strong support", "Powdery mildew risk", "Quality drops in extreme heat"],
        yield_potential: "25-35 tons/hectare",
    },
    GrowthProfile {
        name: "Drumstick (Moringa)",
        growth_rate: "Fast",
        time_to_harvest: "9 months",
        advantages: &["Super nutritious", "Nitrogen-fixing tree", "Low input", "Multiple harvests/year"],
        disadvantages: &["Frost sensitive", "Pods become fibrous", "Needs pruning", "Leaf quality in dry season"],
        yield_potential: "40-50 tons/hectare",
    },
    GrowthProfile {
        name: "Amaranth",
        growth_rate: "Fast",
        time_to_harvest: "40-50",
        advantages: &["Rapid growth", "Multiple cycles/year", "Highly nutritious", "Excellent soil builder"],
        disadvantages: &["Leaves toughen if mature", "Damping off risk", "Requires high nitrogen"],
        yield_potential: "20-25 tons/hectare",
    },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Exact-name lookup. Returns None for species without an entry.
pub fn find_growth_profile(plant_name: &str) -> Option<&'static GrowthProfile> {
    GROWTH_PROFILES.iter().find(|p| p.name == plant_name.trim())
}

/// Lookup that never fails: unknown species get the generic profile
pub fn growth_profile_for(plant_name: &str) -> &'static GrowthProfile {
    find_growth_profile(plant_name).unwrap_or(&GENERIC_GROWTH_PROFILE)
}
