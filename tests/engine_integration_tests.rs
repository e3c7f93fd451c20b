// Engine Integration Tests
//
// Purpose: End-to-end assessments through the public engine API using the
// bundled catalog and score model
// Run with: cargo test --test engine_integration_tests

use std::collections::HashMap;

use approx::assert_relative_eq;
use compost_assessor::{
    load_plant_catalog, CompostEngine, EngineConfig, EngineError, LinearScoreModel, MaturityStage,
    ParameterKey, ParameterSet, PlantCatalog, PlantProfile, Priority, SuitabilityTier, WhenToUse,
};
use serde_json::{json, Value};

fn nominal() -> ParameterSet {
    ParameterSet::try_from_values([
        (ParameterKey::Temperature, 30.0),
        (ParameterKey::Moisture, 55.0),
        (ParameterKey::Ph, 7.0),
        (ParameterKey::CnRatio, 20.0),
        (ParameterKey::Ammonia, 150.0),
        (ParameterKey::Nitrate, 400.0),
        (ParameterKey::TotalNitrogen, 1.5),
        (ParameterKey::TotalOrganicCarbon, 30.0),
        (ParameterKey::ElectricalConductivity, 2.0),
        (ParameterKey::OrganicMatter, 50.0),
        (ParameterKey::TValue, 0.6),
        (ParameterKey::GerminationIndex, 90.0),
    ])
    .unwrap()
}

fn fixed_score(score: f64) -> CompostEngine {
    CompostEngine::new(PlantCatalog::reference(), move |_: &ParameterSet| score)
}

/// Sample sitting in the middle of a plant's windows and every safe band
fn midpoint_sample(plant: &PlantProfile) -> ParameterSet {
    let t = plant.tolerances;
    nominal()
        .with(ParameterKey::Ph, t.ph_midpoint())
        .unwrap()
        .with(ParameterKey::CnRatio, t.max_cn - 2.0)
        .unwrap()
        .with(ParameterKey::GerminationIndex, t.min_gi.max(80.0) + 5.0)
        .unwrap()
        .with(ParameterKey::ElectricalConductivity, t.max_ec / 2.0)
        .unwrap()
        .with(ParameterKey::TotalNitrogen, t.min_tn + 0.5)
        .unwrap()
        .with(ParameterKey::OrganicMatter, t.min_om + 10.0)
        .unwrap()
}

fn names(verdicts: &[compost_assessor::SuitabilityVerdict]) -> Vec<&str> {
    verdicts.iter().map(|v| v.plant_name.as_str()).collect()
}

// =========================================================================
// Section 1: Nominal sample
// =========================================================================

#[test]
fn test_nominal_sample_with_reference_data() {
    let engine = CompostEngine::with_reference_data();
    let report = engine.analyze_parameters(&nominal());

    // Reference model: 77.25
    assert_relative_eq!(report.score, 77.25, epsilon = 1e-9);
    assert_eq!(report.stage, MaturityStage::Mature);
    assert_eq!(report.days_to_maturity, 0);
    assert!(report.remediation.is_empty());

    let suitable = names(&report.plants.suitable);
    assert!(suitable.contains(&"Brinjal (Eggplant)"));
    assert!(suitable.contains(&"Watermelon"));
    assert_eq!(suitable.len(), 8);

    let conditional = names(&report.plants.conditional);
    assert_eq!(conditional, vec!["Pineapple", "Amaranth"]);
    assert!(report.plants.not_suitable.is_empty());

    assert!(report.recommendation.starts_with("Mature and high-quality (Score: 77."));
    assert!(report
        .recommendation
        .ends_with("Ready for 8 plant species. Apply 2-3 inches around plants."));
}

#[test]
fn test_conditional_entries_carry_timing_and_narrative() {
    let report = fixed_score(72.0).analyze_parameters(&nominal());

    for verdict in &report.plants.conditional {
        assert_eq!(verdict.tier, SuitabilityTier::Conditional);
        assert_eq!(verdict.when_to_use, Some(WhenToUse::AfterAmendments));
        let impact = verdict.growth_impact.as_ref().unwrap();
        assert_eq!(impact.lines.len(), 6);
        assert!(impact.headline.ends_with("LIMITED"));
    }
}

// =========================================================================
// Section 2: Stage boundaries through the engine
// =========================================================================

#[test]
fn test_stage_and_days_at_boundary_scores() {
    let engine = CompostEngine::with_reference_data();
    let params = nominal();

    let cases = [
        (0.0, MaturityStage::Initial, 25),
        (34.999, MaturityStage::Initial, 19),
        (35.0, MaturityStage::Active, 19),
        (64.999, MaturityStage::Stabilization, 4),
        (69.0, MaturityStage::Mature, 2),
        (69.996, MaturityStage::Mature, 2),
        (70.0, MaturityStage::Mature, 0),
    ];

    for (score, stage, days) in cases {
        let report = engine.analyze_with_score(&params, score);
        assert_eq!(report.stage, stage, "score {}", score);
        assert_eq!(report.days_to_maturity, days, "score {}", score);
    }
}

#[test]
fn test_model_score_near_boundary_is_not_rounded_across() {
    let report = fixed_score(34.999).analyze_parameters(&nominal());
    assert_eq!(report.stage, MaturityStage::Initial);
    assert_relative_eq!(report.score, 35.0);

    let report = fixed_score(69.996).analyze_parameters(&nominal());
    assert_eq!(report.days_to_maturity, 2);
    assert!(!report.is_ready());
}

// =========================================================================
// Section 3: Midpoint samples
// =========================================================================

#[test]
fn test_midpoint_sample_is_suitable_without_remediation() {
    let catalog = PlantCatalog::reference();
    let engine = fixed_score(75.0);

    let mut checked = 0;
    for plant in &catalog {
        let mid = plant.tolerances.ph_midpoint();
        // Only windows whose centre is inside the composting pH band
        if !(6.5..=8.5).contains(&mid) {
            continue;
        }

        let report = engine.analyze_parameters(&midpoint_sample(plant));
        assert!(report.remediation.is_empty(), "{}", plant.name);
        assert!(
            names(&report.plants.suitable).contains(&plant.name.as_str()),
            "{} should be suitable",
            plant.name
        );
        checked += 1;
    }
    assert!(checked > 0);
}

// =========================================================================
// Section 4: Phytotoxicity and warnings
// =========================================================================

#[test]
fn test_phytotoxic_sample_is_never_suitable() {
    let engine = fixed_score(90.0);

    for gi in [0.0, 25.0, 49.9] {
        let params = nominal().with(ParameterKey::GerminationIndex, gi).unwrap();
        let report = engine.analyze_parameters(&params);

        assert!(report.plants.suitable.is_empty(), "GI {}", gi);
        assert!(report.plants.conditional.iter().all(|v| v.when_to_use == Some(WhenToUse::AfterMaturation)));
        assert_eq!(report.remediation[0].priority, Priority::High);
        assert!(report.recommendation.contains("toxicity risk"));
    }
}

#[test]
fn test_remediation_capped_and_sorted() {
    let params = nominal()
        .with(ParameterKey::Temperature, 12.0)
        .unwrap()
        .with(ParameterKey::Moisture, 80.0)
        .unwrap()
        .with(ParameterKey::Ph, 9.5)
        .unwrap()
        .with(ParameterKey::CnRatio, 32.0)
        .unwrap()
        .with(ParameterKey::GerminationIndex, 70.0)
        .unwrap()
        .with(ParameterKey::ElectricalConductivity, 6.0)
        .unwrap();

    let report = fixed_score(40.0).analyze_parameters(&params);
    assert_eq!(report.remediation.len(), 6);

    let priorities: Vec<Priority> = report.remediation.iter().map(|r| r.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
    assert_eq!(report.improvement_summary, "6 parameters need adjustment");
    assert!(report.recommendation.contains("salt stress risk"));
}

// =========================================================================
// Section 5: Input validation
// =========================================================================

#[test]
fn test_missing_key_rejected() {
    let mut raw: HashMap<String, Value> = nominal()
        .iter()
        .map(|(key, value)| (key.wire_name().to_string(), json!(value)))
        .collect();
    raw.remove("OM(%)");

    let result = fixed_score(70.0).analyze(&raw);
    assert_eq!(result.unwrap_err(), EngineError::MissingParameter { name: "OM(%)" });
}

#[test]
fn test_analyze_json_with_aliases() {
    let body = json!({
        "temperature": 30, "moisture": 55, "ph": 7, "cn_ratio": 20,
        "ammonia": 150, "nitrate": 400, "total_nitrogen": 1.5,
        "total_organic_carbon": 30, "ec": 2, "organic_matter": 50,
        "t_value": 0.6, "germination_index": 90
    });

    let report = fixed_score(70.0).analyze_json(&body).unwrap();
    assert_eq!(report.parameters, nominal());
}

// =========================================================================
// Section 6: Bundled data and batch mode
// =========================================================================

#[test]
fn test_engine_from_bundled_files() {
    let dir = env!("CARGO_MANIFEST_DIR");
    let catalog = load_plant_catalog(format!("{}/data/plants.csv", dir)).unwrap();
    let model = LinearScoreModel::load(std::path::Path::new(&format!("{}/data/score_model.json", dir))).unwrap();
    let from_files = CompostEngine::new(catalog, model);

    let reference = CompostEngine::with_reference_data();
    assert_eq!(
        from_files.analyze_parameters(&nominal()),
        reference.analyze_parameters(&nominal())
    );

    let configured = EngineConfig::default().build_engine().unwrap();
    assert_eq!(configured.catalog().len(), 10);
}

#[test]
fn test_batch_matches_sequential() {
    let engine = CompostEngine::with_reference_data();
    let samples: Vec<ParameterSet> = (0..20)
        .map(|i| {
            nominal()
                .with(ParameterKey::GerminationIndex, 40.0 + i as f64 * 3.0)
                .unwrap()
                .with(ParameterKey::CnRatio, 14.0 + i as f64)
                .unwrap()
        })
        .collect();

    let batch = engine.analyze_batch(&samples);
    assert_eq!(batch.len(), samples.len());
    for (params, report) in samples.iter().zip(&batch) {
        assert_eq!(report, &engine.analyze_parameters(params));
    }
}
