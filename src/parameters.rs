//! Compost Parameter Set
//!
//! The twelve physicochemical readings reported for one compost sample.
//! Values arrive as loosely-typed JSON (the lab sheet / HTTP body) and are
//! validated once into a `ParameterSet`; after that every reading is a
//! finite `f64` and never changes.
//!
//! Wire names follow the column headers of the compost dataset
//! (`MC(%)`, `C/N Ratio`, `EC(ms/cm)`, ...). Snake-case aliases are
//! accepted as well.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::EngineError;

/// One of the twelve required readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum ParameterKey {
    Temperature,
    Moisture,
    Ph,
    CnRatio,
    Ammonia,
    Nitrate,
    TotalNitrogen,
    TotalOrganicCarbon,
    ElectricalConductivity,
    OrganicMatter,
    TValue,
    GerminationIndex,
}

impl ParameterKey {
    /// All keys in dataset column order
    pub const ALL: [ParameterKey; 12] = [
        ParameterKey::Temperature,
        ParameterKey::Moisture,
        ParameterKey::Ph,
        ParameterKey::CnRatio,
        ParameterKey::Ammonia,
        ParameterKey::Nitrate,
        ParameterKey::TotalNitrogen,
        ParameterKey::TotalOrganicCarbon,
        ParameterKey::ElectricalConductivity,
        ParameterKey::OrganicMatter,
        ParameterKey::TValue,
        ParameterKey::GerminationIndex,
    ];

    /// Column header used by the dataset and the HTTP API
    pub fn wire_name(&self) -> &'static str {
        match self {
            ParameterKey::Temperature => "Temperature",
            ParameterKey::Moisture => "MC(%)",
            ParameterKey::Ph => "pH",
            ParameterKey::CnRatio => "C/N Ratio",
            ParameterKey::Ammonia => "Ammonia(mg/kg)",
            ParameterKey::Nitrate => "Nitrate(mg/kg)",
            ParameterKey::TotalNitrogen => "TN(%)",
            ParameterKey::TotalOrganicCarbon => "TOC(%)",
            ParameterKey::ElectricalConductivity => "EC(ms/cm)",
            ParameterKey::OrganicMatter => "OM(%)",
            ParameterKey::TValue => "T Value",
            ParameterKey::GerminationIndex => "GI(%)",
        }
    }

    /// Snake-case alias accepted on input
    pub fn alias(&self) -> &'static str {
        match self {
            ParameterKey::Temperature => "temperature",
            ParameterKey::Moisture => "moisture",
            ParameterKey::Ph => "ph",
            ParameterKey::CnRatio => "cn_ratio",
            ParameterKey::Ammonia => "ammonia",
            ParameterKey::Nitrate => "nitrate",
            ParameterKey::TotalNitrogen => "total_nitrogen",
            ParameterKey::TotalOrganicCarbon => "total_organic_carbon",
            ParameterKey::ElectricalConductivity => "ec",
            ParameterKey::OrganicMatter => "organic_matter",
            ParameterKey::TValue => "t_value",
            ParameterKey::GerminationIndex => "germination_index",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ParameterKey::Temperature => "Temperature",
            ParameterKey::Moisture => "Moisture",
            ParameterKey::Ph => "pH",
            ParameterKey::CnRatio => "C/N Ratio",
            ParameterKey::Ammonia => "Ammonia",
            ParameterKey::Nitrate => "Nitrate",
            ParameterKey::TotalNitrogen => "Total Nitrogen",
            ParameterKey::TotalOrganicCarbon => "Total Organic Carbon",
            ParameterKey::ElectricalConductivity => "Electrical Conductivity",
            ParameterKey::OrganicMatter => "Organic Matter",
            ParameterKey::TValue => "T-Value",
            ParameterKey::GerminationIndex => "Germination Index",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ParameterKey::Temperature => "°C",
            ParameterKey::Moisture
            | ParameterKey::TotalNitrogen
            | ParameterKey::TotalOrganicCarbon
            | ParameterKey::OrganicMatter
            | ParameterKey::GerminationIndex => "%",
            ParameterKey::Ammonia | ParameterKey::Nitrate => "mg/kg",
            ParameterKey::ElectricalConductivity => "mS/cm",
            ParameterKey::Ph | ParameterKey::CnRatio | ParameterKey::TValue => "",
        }
    }

    /// Resolve a wire name or alias
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.wire_name() == name || key.alias() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Validated set of all twelve readings for one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    values: [f64; 12],
}

impl ParameterSet {
    /// Build from `(key, value)` pairs. Every key must appear and every value
    /// must be finite; later duplicates overwrite earlier ones.
    pub fn try_from_values<I>(pairs: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (ParameterKey, f64)>,
    {
        let mut slots: [Option<f64>; 12] = [None; 12];
        for (key, value) in pairs {
            slots[key.index()] = Some(check_finite(key, value)?);
        }

        let mut values = [0.0; 12];
        for key in ParameterKey::ALL {
            values[key.index()] = slots[key.index()].ok_or(EngineError::MissingParameter {
                name: key.wire_name(),
            })?;
        }

        Ok(Self { values })
    }

    /// Validate a raw request body keyed by wire names (or aliases).
    ///
    /// Presence of all twelve keys is checked before any value is parsed, so a
    /// request with both a missing and a malformed reading reports the missing
    /// one. Numeric strings such as `"7.2"` are accepted.
    pub fn from_map(raw: &HashMap<String, Value>) -> Result<Self, EngineError> {
        let lookup = |key: ParameterKey| raw.get(key.wire_name()).or_else(|| raw.get(key.alias()));

        for key in ParameterKey::ALL {
            if lookup(key).is_none() {
                return Err(EngineError::MissingParameter { name: key.wire_name() });
            }
        }

        let mut values = [0.0; 12];
        for key in ParameterKey::ALL {
            // Presence checked above
            let raw_value = lookup(key).unwrap_or(&Value::Null);
            values[key.index()] = parse_value(key, raw_value)?;
        }

        Ok(Self { values })
    }

    /// Validate a JSON object; anything else is reported as a missing first key
    pub fn from_json(raw: &Value) -> Result<Self, EngineError> {
        match raw.as_object() {
            Some(object) => {
                let map: HashMap<String, Value> = object
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Self::from_map(&map)
            }
            None => Err(EngineError::MissingParameter {
                name: ParameterKey::ALL[0].wire_name(),
            }),
        }
    }

    pub fn get(&self, key: ParameterKey) -> f64 {
        self.values[key.index()]
    }

    /// Copy with one reading replaced
    pub fn with(mut self, key: ParameterKey, value: f64) -> Result<Self, EngineError> {
        self.values[key.index()] = check_finite(key, value)?;
        Ok(self)
    }

    /// Iterate `(key, value)` in dataset column order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, f64)> + '_ {
        ParameterKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Stable key identifying this exact set of readings (bit-exact)
    pub fn fingerprint(&self) -> String {
        self.values
            .iter()
            .map(|v| format!("{:016x}", v.to_bits()))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl Index<ParameterKey> for ParameterSet {
    type Output = f64;

    fn index(&self, key: ParameterKey) -> &f64 {
        &self.values[key.index()]
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.wire_name(), &value)?;
        }
        map.end()
    }
}

fn check_finite(key: ParameterKey, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidParameter {
            name: key.wire_name(),
            reason: format!("{} is not a finite number", value),
        })
    }
}

fn parse_value(key: ParameterKey, raw: &Value) -> Result<f64, EngineError> {
    let invalid = |reason: String| EngineError::InvalidParameter {
        name: key.wire_name(),
        reason,
    };

    let value = match raw {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| invalid(format!("{} is out of range", n)))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(format!("could not convert '{}' to a number", s)))?,
        other => return Err(invalid(format!("expected a number, got {}", other))),
    };

    check_finite(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nominal_json() -> Value {
        json!({
            "Temperature": 30.0,
            "MC(%)": 55.0,
            "pH": 7.0,
            "C/N Ratio": 20.0,
            "Ammonia(mg/kg)": 150.0,
            "Nitrate(mg/kg)": 300.0,
            "TN(%)": 1.5,
            "TOC(%)": 28.0,
            "EC(ms/cm)": 2.0,
            "OM(%)": 50.0,
            "T Value": 0.6,
            "GI(%)": 90.0
        })
    }

    #[test]
    fn test_parse_complete_body() {
        let params = ParameterSet::from_json(&nominal_json()).unwrap();
        assert_eq!(params[ParameterKey::Ph], 7.0);
        assert_eq!(params.get(ParameterKey::GerminationIndex), 90.0);
        assert_eq!(params.iter().count(), 12);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let mut body = nominal_json();
        body.as_object_mut().unwrap().remove("EC(ms/cm)");

        let err = ParameterSet::from_json(&body).unwrap_err();
        assert_eq!(err, EngineError::MissingParameter { name: "EC(ms/cm)" });
    }

    #[test]
    fn test_missing_reported_before_invalid() {
        let mut body = nominal_json();
        let object = body.as_object_mut().unwrap();
        object.insert("pH".to_string(), json!("acidic"));
        object.remove("T Value");

        let err = ParameterSet::from_json(&body).unwrap_err();
        assert_eq!(err.parameter(), "T Value");
        assert!(matches!(err, EngineError::MissingParameter { .. }));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let mut body = nominal_json();
        body["pH"] = json!("acidic");

        let err = ParameterSet::from_json(&body).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { name: "pH", .. }));
    }

    #[test]
    fn test_null_and_bool_are_invalid() {
        let mut body = nominal_json();
        body["GI(%)"] = Value::Null;
        assert!(matches!(
            ParameterSet::from_json(&body),
            Err(EngineError::InvalidParameter { name: "GI(%)", .. })
        ));

        body["GI(%)"] = json!(true);
        assert!(matches!(
            ParameterSet::from_json(&body),
            Err(EngineError::InvalidParameter { name: "GI(%)", .. })
        ));
    }

    #[test]
    fn test_numeric_strings_and_aliases() {
        let mut body = nominal_json();
        let object = body.as_object_mut().unwrap();
        object.remove("MC(%)");
        object.insert("moisture".to_string(), json!(" 61.5 "));

        let params = ParameterSet::from_json(&body).unwrap();
        assert_eq!(params[ParameterKey::Moisture], 61.5);
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = ParameterSet::from_json(&nominal_json()).unwrap();
        assert!(params.with(ParameterKey::Temperature, f64::NAN).is_err());
        assert!(params.with(ParameterKey::Temperature, f64::INFINITY).is_err());

        let mut body = nominal_json();
        body["Temperature"] = json!("inf");
        assert!(matches!(
            ParameterSet::from_json(&body),
            Err(EngineError::InvalidParameter { name: "Temperature", .. })
        ));
    }

    #[test]
    fn test_try_from_values_requires_all_keys() {
        let partial = ParameterKey::ALL[..11].iter().map(|k| (*k, 1.0));
        let err = ParameterSet::try_from_values(partial).unwrap_err();
        assert_eq!(err, EngineError::MissingParameter { name: "GI(%)" });

        let full = ParameterKey::ALL.iter().map(|k| (*k, 1.0));
        assert!(ParameterSet::try_from_values(full).is_ok());
    }

    #[test]
    fn test_non_object_body() {
        let err = ParameterSet::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, EngineError::MissingParameter { name: "Temperature" });
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let params = ParameterSet::from_json(&nominal_json()).unwrap();
        let value = serde_json::to_value(params).unwrap();
        assert_eq!(value, nominal_json());
    }

    #[test]
    fn test_fingerprint_distinguishes_values() {
        let a = ParameterSet::from_json(&nominal_json()).unwrap();
        let b = a.with(ParameterKey::Ph, 7.1).unwrap();
        assert_eq!(a.fingerprint(), a.fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_key_name_resolution() {
        assert_eq!(ParameterKey::from_name("C/N Ratio"), Some(ParameterKey::CnRatio));
        assert_eq!(ParameterKey::from_name("cn_ratio"), Some(ParameterKey::CnRatio));
        assert_eq!(ParameterKey::from_name("carbon"), None);
    }
}
