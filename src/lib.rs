//! Compost Assessor
//!
//! Compost maturity and plant-suitability assessment from twelve lab
//! readings. A quality score (from a pluggable model) drives maturity
//! staging; the raw readings drive remediation advice and per-species
//! suitability against a plant tolerance catalog.
//!
//! Module layout:
//! - `parameters`: validated reading set and wire names
//! - `catalog/`: plant tolerance profiles and growth metadata
//! - `data`: catalog loading with Polars
//! - `model`: score model trait and linear implementation
//! - `assessment/`: classifier, advisor, matcher, synthesizer
//! - `engine`: shared immutable context and entry points
//! - `formatters/`: markdown and JSON output
//! - `api_server`: Axum HTTP API (feature `api`)

pub mod api_server;
pub mod assessment;
pub mod catalog;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod formatters;
pub mod model;
pub mod parameters;

// Re-export commonly used types
pub use assessment::{
    assess, AssessmentReport, MaturityStage, Priority, QualityStatus, RemediationItem, SuitabilityTier,
    SuitabilityVerdict, WhenToUse,
};
pub use catalog::{PlantCatalog, PlantProfile, Tolerances};
pub use config::EngineConfig;
pub use data::load_plant_catalog;
pub use engine::CompostEngine;
pub use error::EngineError;
pub use formatters::{JsonFormatter, MarkdownFormatter};
pub use model::{clamp_score, LinearScoreModel, QualityModel};
pub use parameters::{ParameterKey, ParameterSet};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppError, AppState};
