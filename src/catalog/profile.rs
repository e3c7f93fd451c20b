//! Plant Profile
//!
//! One catalog row: tolerance windows a compost sample must satisfy for the
//! species, plus its growth metadata.

use serde::Serialize;

use super::growth_profiles::{growth_profile_for, GrowthProfile};

/// Compost tolerance windows for a species
///
/// pH is a closed interval; the remaining criteria are one-sided bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerances {
    pub min_ph: f64,
    pub max_ph: f64,
    /// Maximum C/N ratio
    pub max_cn: f64,
    /// Minimum germination index (%)
    pub min_gi: f64,
    /// Maximum electrical conductivity (mS/cm)
    pub max_ec: f64,
    /// Minimum total nitrogen (%)
    pub min_tn: f64,
    /// Minimum organic matter (%)
    pub min_om: f64,
}

impl Tolerances {
    pub fn ph_midpoint(&self) -> f64 {
        (self.min_ph + self.max_ph) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantProfile {
    pub name: String,
    pub plant_type: String,
    pub tolerances: Tolerances,
    pub growth: &'static GrowthProfile,
}

impl PlantProfile {
    /// Build a profile, attaching growth metadata by species name
    pub fn new(name: impl Into<String>, plant_type: impl Into<String>, tolerances: Tolerances) -> Self {
        let name = name.into();
        let growth = growth_profile_for(&name);
        Self {
            name,
            plant_type: plant_type.into(),
            tolerances,
            growth,
        }
    }
}
