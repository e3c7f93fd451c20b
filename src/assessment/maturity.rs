//! Maturity Classification
//!
//! Maps a quality score (0-100) to a decomposition stage, a quality label
//! and an estimate of days remaining until the compost reaches the target
//! score of 70.

use serde::Serialize;

/// Score at which compost is considered fully mature
pub const TARGET_SCORE: f64 = 70.0;

/// Upper bound on the days-to-maturity estimate
pub const MAX_DAYS_TO_MATURITY: u32 = 25;

/// Ordinal decomposition stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MaturityStage {
    /// score < 35
    Initial,
    /// 35 <= score < 50
    Active,
    /// 50 <= score < 65
    Stabilization,
    /// score >= 65
    Mature,
}

impl MaturityStage {
    pub fn display_text(&self) -> &'static str {
        match self {
            MaturityStage::Initial => "Initial",
            MaturityStage::Active => "Active",
            MaturityStage::Stabilization => "Stabilization",
            MaturityStage::Mature => "Mature",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MaturityStage::Initial => "Fresh material, decomposition just starting",
            MaturityStage::Active => "Thermophilic breakdown in progress",
            MaturityStage::Stabilization => "Curing, organic matter stabilizing",
            MaturityStage::Mature => "Stable humus-like product",
        }
    }
}

/// Coarse quality label reported next to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum QualityStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            QualityStatus::Excellent
        } else if score >= 60.0 {
            QualityStatus::Good
        } else if score >= 50.0 {
            QualityStatus::Fair
        } else {
            QualityStatus::Poor
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            QualityStatus::Excellent => "Excellent",
            QualityStatus::Good => "Good",
            QualityStatus::Fair => "Fair",
            QualityStatus::Poor => "Poor",
        }
    }
}

/// Classify a score into a maturity stage.
/// Boundaries are left-inclusive: 35.0 is Active, 34.999 is Initial.
pub fn classify(score: f64) -> MaturityStage {
    if score >= 65.0 {
        MaturityStage::Mature
    } else if score >= 50.0 {
        MaturityStage::Stabilization
    } else if score >= 35.0 {
        MaturityStage::Active
    } else {
        MaturityStage::Initial
    }
}

/// Estimate whole days until the score reaches `TARGET_SCORE`.
///
/// Piecewise linear per score band; the fractional result is truncated, and
/// the lowest band is capped at `MAX_DAYS_TO_MATURITY`.
pub fn estimate_days_to_maturity(score: f64) -> u32 {
    let days = if score >= TARGET_SCORE {
        0.0
    } else if score >= 65.0 {
        2.0 + (TARGET_SCORE - score) * 0.4
    } else if score >= 60.0 {
        4.0 + (65.0 - score) * 0.6
    } else if score >= 50.0 {
        8.0 + (60.0 - score) * 0.8
    } else if score >= 40.0 {
        12.0 + (50.0 - score) * 1.0
    } else {
        (15.0 + (40.0 - score) * 0.8).min(MAX_DAYS_TO_MATURITY as f64)
    };

    days.trunc() as u32
}

/// Maturity outcome for one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaturityAssessment {
    pub score: f64,
    pub stage: MaturityStage,
    pub quality_status: QualityStatus,
    pub days_to_maturity: u32,
}

impl MaturityAssessment {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            stage: classify(score),
            quality_status: QualityStatus::from_score(score),
            days_to_maturity: estimate_days_to_maturity(score),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.days_to_maturity == 0
    }
}
