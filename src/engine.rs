//! Compost Engine - main entry point for assessments
//!
//! Holds the read-only collaborators (plant catalog and score model) behind
//! `Arc` so one engine can be cloned into request handlers and worker
//! threads without locking. Each call validates its input, predicts a score,
//! and runs the assessment pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;

use crate::assessment::{assess, AssessmentReport};
use crate::catalog::PlantCatalog;
use crate::error::EngineError;
use crate::model::{clamp_score, LinearScoreModel, QualityModel};
use crate::parameters::ParameterSet;

#[derive(Clone)]
pub struct CompostEngine {
    catalog: Arc<PlantCatalog>,
    model: Arc<dyn QualityModel>,
}

impl CompostEngine {
    pub fn new(catalog: PlantCatalog, model: impl QualityModel + 'static) -> Self {
        Self::from_shared(Arc::new(catalog), Arc::new(model))
    }

    pub fn from_shared(catalog: Arc<PlantCatalog>, model: Arc<dyn QualityModel>) -> Self {
        tracing::info!(
            "Compost engine ready: {} plants, model: {}",
            catalog.len(),
            model.describe()
        );
        Self { catalog, model }
    }

    /// Engine with the embedded reference catalog and linear model
    pub fn with_reference_data() -> Self {
        Self::new(PlantCatalog::reference(), LinearScoreModel::reference())
    }

    pub fn catalog(&self) -> &PlantCatalog {
        &self.catalog
    }

    pub fn model(&self) -> &dyn QualityModel {
        self.model.as_ref()
    }

    /// Model prediction clamped to [0, 100]
    pub fn predict_score(&self, params: &ParameterSet) -> f64 {
        let raw = self.model.predict(params);
        let score = clamp_score(raw);
        if score != raw {
            tracing::warn!("Model output {} clamped to {}", raw, score);
        }
        score
    }

    /// Validate a raw request body and assess it
    pub fn analyze(&self, raw: &HashMap<String, Value>) -> Result<AssessmentReport, EngineError> {
        let params = ParameterSet::from_map(raw).inspect_err(|e| {
            tracing::debug!("Rejected parameters: {}", e);
        })?;
        Ok(self.analyze_parameters(&params))
    }

    /// Validate a JSON object and assess it
    pub fn analyze_json(&self, raw: &Value) -> Result<AssessmentReport, EngineError> {
        let params = ParameterSet::from_json(raw)?;
        Ok(self.analyze_parameters(&params))
    }

    pub fn analyze_parameters(&self, params: &ParameterSet) -> AssessmentReport {
        let score = self.predict_score(params);
        self.analyze_with_score(params, score)
    }

    /// Assess with an externally supplied score (clamped), bypassing the model
    pub fn analyze_with_score(&self, params: &ParameterSet, score: f64) -> AssessmentReport {
        let report = assess(params, clamp_score(score), &self.catalog);
        tracing::debug!(
            "Assessed sample: score={:.2} stage={} suitable={} conditional={} remediation={}",
            report.score,
            report.stage.display_text(),
            report.plants.suitable.len(),
            report.plants.conditional.len(),
            report.remediation.len()
        );
        report
    }

    /// Assess many samples in parallel; output order matches input order
    pub fn analyze_batch(&self, samples: &[ParameterSet]) -> Vec<AssessmentReport> {
        samples
            .par_iter()
            .map(|params| self.analyze_parameters(params))
            .collect()
    }
}

impl std::fmt::Debug for CompostEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompostEngine")
            .field("plants", &self.catalog.len())
            .field("model", &self.model.describe())
            .finish()
    }
}
