//! Catalog Data Loading
//!
//! Loads the plant tolerance table from CSV using Polars. Column headers
//! follow the plant dataset:
//!
//! `Plant Type, Plant Name, Min pH, Max pH, Max C/N, Min GI(%), Max EC, Min TN(%), Min OM(%)`
//!
//! Extra columns are ignored. Integer-typed columns are cast to f64.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::catalog::{PlantCatalog, PlantProfile, Tolerances};

pub const COL_PLANT_TYPE: &str = "Plant Type";
pub const COL_PLANT_NAME: &str = "Plant Name";
pub const COL_MIN_PH: &str = "Min pH";
pub const COL_MAX_PH: &str = "Max pH";
pub const COL_MAX_CN: &str = "Max C/N";
pub const COL_MIN_GI: &str = "Min GI(%)";
pub const COL_MAX_EC: &str = "Max EC";
pub const COL_MIN_TN: &str = "Min TN(%)";
pub const COL_MIN_OM: &str = "Min OM(%)";

/// Load plant catalog from CSV
pub fn load_plant_catalog(path: impl AsRef<Path>) -> Result<PlantCatalog> {
    let path = path.as_ref();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to load plant catalog: {}", path.display()))?;

    let catalog = catalog_from_frame(&df)
        .with_context(|| format!("Invalid plant catalog: {}", path.display()))?;

    tracing::info!("Loaded {} plant profiles from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Convert a catalog DataFrame into typed profiles, preserving row order
pub fn catalog_from_frame(df: &DataFrame) -> Result<PlantCatalog> {
    let names = string_column(df, COL_PLANT_NAME)?;
    let types = string_column(df, COL_PLANT_TYPE)?;
    let min_ph = float_column(df, COL_MIN_PH)?;
    let max_ph = float_column(df, COL_MAX_PH)?;
    let max_cn = float_column(df, COL_MAX_CN)?;
    let min_gi = float_column(df, COL_MIN_GI)?;
    let max_ec = float_column(df, COL_MAX_EC)?;
    let min_tn = float_column(df, COL_MIN_TN)?;
    let min_om = float_column(df, COL_MIN_OM)?;

    let mut plants = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let row = idx + 1;
        let name = names[idx]
            .clone()
            .filter(|s| !s.is_empty())
            .with_context(|| format!("Row {}: missing '{}'", row, COL_PLANT_NAME))?;
        let plant_type = types[idx].clone().unwrap_or_default();

        let value = |column: &[Option<f64>], header: &str| -> Result<f64> {
            column[idx]
                .filter(|v| v.is_finite())
                .with_context(|| format!("Row {} ({}): missing or invalid '{}'", row, name, header))
        };

        let tolerances = Tolerances {
            min_ph: value(&min_ph, COL_MIN_PH)?,
            max_ph: value(&max_ph, COL_MAX_PH)?,
            max_cn: value(&max_cn, COL_MAX_CN)?,
            min_gi: value(&min_gi, COL_MIN_GI)?,
            max_ec: value(&max_ec, COL_MAX_EC)?,
            min_tn: value(&min_tn, COL_MIN_TN)?,
            min_om: value(&min_om, COL_MIN_OM)?,
        };

        if tolerances.min_ph > tolerances.max_ph {
            anyhow::bail!(
                "Row {} ({}): Min pH {} exceeds Max pH {}",
                row, name, tolerances.min_ph, tolerances.max_ph
            );
        }

        let plant = PlantProfile::new(name, plant_type, tolerances);
        if plant.growth.is_generic() {
            tracing::debug!("No growth profile for '{}', using generic profile", plant.name);
        }
        plants.push(plant);
    }

    if plants.is_empty() {
        anyhow::bail!("Plant catalog contains no rows");
    }

    Ok(PlantCatalog::new(plants))
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let values = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))?
        .into_iter()
        .map(|v| v.map(|s| s.trim().to_string()))
        .collect();
    Ok(values)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", name))?;

    let values = column
        .f64()
        .with_context(|| format!("Column '{}' is not numeric", name))?
        .into_iter()
        .collect();
    Ok(values)
}
