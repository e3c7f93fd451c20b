//! Plant Reference Catalog
//!
//! Ordered, read-only table of species tolerance windows. Built once at
//! startup (from the embedded reference rows or a CSV, see `crate::data`)
//! and shared immutably by every assessment.
//!
//! ## Architecture
//! - `profile.rs` - PlantProfile + Tolerances
//! - `growth_profiles.rs` - static per-species growth metadata with generic fallback

pub mod growth_profiles;
pub mod profile;

pub use growth_profiles::{find_growth_profile, growth_profile_for, GrowthProfile, GENERIC_GROWTH_PROFILE};
pub use profile::{PlantProfile, Tolerances};

use rustc_hash::FxHashMap;

/// Catalog of plant profiles in source order
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    plants: Vec<PlantProfile>,
    by_name: FxHashMap<String, usize>,
}

impl PlantCatalog {
    /// Build from rows; a later row with a duplicate name shadows the earlier
    /// one for `get`, but both stay in iteration order.
    pub fn new(plants: Vec<PlantProfile>) -> Self {
        let by_name = plants
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.name.clone(), idx))
            .collect();
        Self { plants, by_name }
    }

    /// Embedded ten-species reference catalog (mirrors `data/plants.csv`)
    pub fn reference() -> Self {
        let plants = REFERENCE_PLANTS
            .iter()
            .map(|(name, plant_type, tolerances)| PlantProfile::new(*name, *plant_type, *tolerances))
            .collect();
        Self::new(plants)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlantProfile> {
        self.plants.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PlantProfile> {
        self.by_name.get(name).map(|&idx| &self.plants[idx])
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlantCatalog {
    type Item = &'a PlantProfile;
    type IntoIter = std::slice::Iter<'a, PlantProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.plants.iter()
    }
}

// ============================================================================
// EMBEDDED REFERENCE ROWS
// Source: data/plants.csv
// ============================================================================

const fn tol(min_ph: f64, max_ph: f64, max_cn: f64, min_gi: f64, max_ec: f64, min_tn: f64, min_om: f64) -> Tolerances {
    Tolerances { min_ph, max_ph, max_cn, min_gi, max_ec, min_tn, min_om }
}

static REFERENCE_PLANTS: &[(&str, &str, Tolerances)] = &[
    ("Pineapple", "Fruit", tol(4.5, 6.5, 25.0, 80.0, 3.0, 1.0, 40.0)),
    ("Jackfruit", "Fruit", tol(5.5, 7.5, 25.0, 80.0, 4.0, 1.2, 40.0)),
    ("Sapota (Chikoo)", "Fruit", tol(6.0, 8.0, 25.0, 75.0, 4.0, 1.0, 35.0)),
    ("Custard Apple", "Fruit", tol(5.5, 7.5, 25.0, 80.0, 3.5, 1.2, 40.0)),
    ("Watermelon", "Cucurbit", tol(6.0, 7.5, 20.0, 85.0, 3.0, 1.5, 45.0)),
    ("Muskmelon", "Cucurbit", tol(6.0, 7.5, 20.0, 85.0, 2.5, 1.5, 45.0)),
    ("Brinjal (Eggplant)", "Vegetable", tol(5.5, 7.0, 20.0, 85.0, 3.0, 1.5, 45.0)),
    ("Bottle Gourd", "Cucurbit", tol(6.0, 7.5, 22.0, 80.0, 3.5, 1.4, 40.0)),
    ("Drumstick (Moringa)", "Tree Vegetable", tol(6.3, 7.5, 25.0, 75.0, 4.0, 1.0, 35.0)),
    ("Amaranth", "Leafy Vegetable", tol(6.0, 7.5, 20.0, 85.0, 3.0, 1.6, 45.0)),
];
