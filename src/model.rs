//! Quality Score Model
//!
//! The engine treats the score model as a black box: parameters in, a
//! number out. Whatever the model returns is clamped to [0, 100] before it
//! reaches the pipeline.
//!
//! Two implementations ship with the crate:
//! - `LinearScoreModel`: intercept plus per-parameter weights, loadable from JSON
//! - any `Fn(&ParameterSet) -> f64` closure (handy for tests and fixed scores)

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::parameters::{ParameterKey, ParameterSet};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Compost quality predictor
pub trait QualityModel: Send + Sync {
    /// Raw prediction; may fall outside [0, 100]
    fn predict(&self, params: &ParameterSet) -> f64;

    /// Short human-readable description for health checks and logs
    fn describe(&self) -> String {
        "custom quality model".to_string()
    }
}

impl<F> QualityModel for F
where
    F: Fn(&ParameterSet) -> f64 + Send + Sync,
{
    fn predict(&self, params: &ParameterSet) -> f64 {
        self(params)
    }
}

/// Clamp a raw prediction into the valid score range. NaN maps to 0.
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        MIN_SCORE
    } else {
        raw.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// On-disk form: weights keyed by parameter wire name or alias
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LinearModelFile {
    #[serde(default = "default_model_name")]
    name: String,
    intercept: f64,
    weights: HashMap<String, f64>,
}

fn default_model_name() -> String {
    "linear".to_string()
}

/// Linear score: `intercept + Σ weight_i × value_i`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScoreModel {
    name: String,
    intercept: f64,
    weights: [f64; 12],
}

impl LinearScoreModel {
    pub fn new(name: impl Into<String>, intercept: f64, weights: &[(ParameterKey, f64)]) -> Self {
        let mut resolved = [0.0; 12];
        for &(key, weight) in weights {
            resolved[key.index()] = weight;
        }
        Self {
            name: name.into(),
            intercept,
            weights: resolved,
        }
    }

    /// Built-in coefficients favouring germination index and penalising
    /// salinity, high C/N and unstable ammonia
    pub fn reference() -> Self {
        Self::new(
            "reference-linear",
            48.0,
            &[
                (ParameterKey::GerminationIndex, 0.55),
                (ParameterKey::CnRatio, -0.9),
                (ParameterKey::Nitrate, 0.02),
                (ParameterKey::Ammonia, -0.015),
                (ParameterKey::TotalNitrogen, 6.0),
                (ParameterKey::ElectricalConductivity, -2.5),
                (ParameterKey::Temperature, -0.2),
                (ParameterKey::TValue, -10.0),
            ],
        )
    }

    /// Load model from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read score model file: {:?}", path))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse score model: {:?}", path))
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: LinearModelFile = serde_json::from_str(contents)
            .with_context(|| "Failed to parse score model JSON")?;

        if !file.intercept.is_finite() {
            anyhow::bail!("Intercept must be finite, got {}", file.intercept);
        }

        let mut weights = Vec::with_capacity(file.weights.len());
        for (name, weight) in &file.weights {
            let key = ParameterKey::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown parameter '{}' in score model", name))?;
            if !weight.is_finite() {
                anyhow::bail!("Weight for '{}' must be finite, got {}", name, weight);
            }
            weights.push((key, *weight));
        }

        Ok(Self::new(file.name, file.intercept, &weights))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self, key: ParameterKey) -> f64 {
        self.weights[key.index()]
    }
}

impl QualityModel for LinearScoreModel {
    fn predict(&self, params: &ParameterSet) -> f64 {
        params
            .iter()
            .fold(self.intercept, |acc, (key, value)| acc + self.weights[key.index()] * value)
    }

    fn describe(&self) -> String {
        let active = self.weights.iter().filter(|w| **w != 0.0).count();
        format!("{} ({} weighted parameters)", self.name, active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::test_support::nominal_params;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(140.0), 100.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(f64::INFINITY), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
    }

    #[test]
    fn test_closure_model() {
        let model = |_: &ParameterSet| 64.0;
        assert_eq!(model.predict(&nominal_params()), 64.0);
        assert_eq!(model.describe(), "custom quality model");
    }

    #[test]
    fn test_linear_prediction() {
        let model = LinearScoreModel::new(
            "two-term",
            10.0,
            &[(ParameterKey::GerminationIndex, 0.5), (ParameterKey::CnRatio, -1.0)],
        );
        // 10 + 0.5*90 - 20 = 35
        assert_relative_eq!(model.predict(&nominal_params()), 35.0);
        assert_eq!(model.describe(), "two-term (2 weighted parameters)");
    }

    #[test]
    fn test_reference_model_scores_nominal_sample_as_mature() {
        let model = LinearScoreModel::reference();
        // 48 + 49.5 - 18 + 8 - 2.25 + 9 - 5 - 6 - 6 = 77.25
        assert_relative_eq!(model.predict(&nominal_params()), 77.25, epsilon = 1e-9);
    }

    #[test]
    fn test_from_json_accepts_wire_names_and_aliases() {
        let model = LinearScoreModel::from_json_str(
            r#"{"name": "lab", "intercept": 5.0, "weights": {"GI(%)": 0.5, "cn_ratio": -0.25}}"#,
        )
        .unwrap();
        assert_eq!(model.name(), "lab");
        assert_eq!(model.weight(ParameterKey::GerminationIndex), 0.5);
        assert_eq!(model.weight(ParameterKey::CnRatio), -0.25);
        assert_eq!(model.weight(ParameterKey::Ph), 0.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_parameter() {
        let err = LinearScoreModel::from_json_str(r#"{"intercept": 1.0, "weights": {"Salinity": 1.0}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Salinity"));
    }

    #[test]
    fn test_bundled_model_matches_reference() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/score_model.json");
        let loaded = LinearScoreModel::load(Path::new(path)).unwrap();
        assert_eq!(loaded, LinearScoreModel::reference());
    }
}
