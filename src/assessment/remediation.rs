//! Remediation Advisor
//!
//! Flags monitored readings that fall outside their safe composting band and
//! attaches a fixed, ordered list of corrective actions. Rules are data: each
//! parameter has a safe band, a wider tolerance band (outside it the issue is
//! High priority) and direction-specific action templates.
//!
//! Evaluation order is fixed (Temperature, Moisture, pH, C/N, GI, EC). The
//! output is stable-sorted High before Medium and capped at
//! `MAX_REMEDIATION_ITEMS`.

use serde::Serialize;

use crate::parameters::{ParameterKey, ParameterSet};

/// At most this many items are reported; lower-priority excess is dropped
pub const MAX_REMEDIATION_ITEMS: usize = 6;

/// Closed band `[lower, upper]`; an infinite bound disables that side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub const fn at_least(lower: f64) -> Self {
        Self { lower, upper: f64::INFINITY }
    }

    pub const fn at_most(upper: f64) -> Self {
        Self { lower: f64::NEG_INFINITY, upper }
    }

    /// Which side of the band a value falls on, if outside
    pub fn deviation(&self, value: f64) -> Option<Deviation> {
        if value > self.upper {
            Some(Deviation::High)
        } else if value < self.lower {
            Some(Deviation::Low)
        } else {
            None
        }
    }
}

/// Direction of an out-of-band reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Deviation {
    High,
    Low,
}

impl Deviation {
    pub fn display_text(&self) -> &'static str {
        match self {
            Deviation::High => "High",
            Deviation::Low => "Low",
        }
    }
}

/// Remediation urgency. Ordered so that sorting ascending puts High first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn display_text(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

/// One flagged parameter with its corrective actions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemediationItem {
    pub parameter: ParameterKey,
    /// Label as shown on the lab sheet, e.g. "MC(%)"
    pub label: &'static str,
    pub current_value: f64,
    /// Formatted reading with unit, e.g. "58.2°C"
    pub current: String,
    pub status: Deviation,
    pub priority: Priority,
    pub actions: Vec<&'static str>,
}

/// Action lists for each direction. `below_critical` replaces `below` when a
/// low reading is also outside the tolerance band.
#[derive(Debug, Clone, Copy)]
pub struct ActionTemplates {
    pub above: &'static [&'static str],
    pub below: &'static [&'static str],
    pub below_critical: Option<&'static [&'static str]>,
}

impl ActionTemplates {
    fn select(&self, status: Deviation, priority: Priority) -> &'static [&'static str] {
        match (status, priority) {
            (Deviation::High, _) => self.above,
            (Deviation::Low, Priority::High) => self.below_critical.unwrap_or(self.below),
            (Deviation::Low, Priority::Medium) => self.below,
        }
    }
}

/// Declarative rule for one monitored parameter
#[derive(Debug, Clone, Copy)]
pub struct RemediationRule {
    pub parameter: ParameterKey,
    pub label: &'static str,
    /// No action needed inside this band
    pub safe: Band,
    /// Outside this band the issue is High priority
    pub tolerance: Band,
    pub actions: ActionTemplates,
    pub format_current: fn(f64) -> String,
}

impl RemediationRule {
    pub fn evaluate(&self, params: &ParameterSet) -> Option<RemediationItem> {
        let value = params[self.parameter];
        let status = self.safe.deviation(value)?;
        let priority = match self.tolerance.deviation(value) {
            Some(_) => Priority::High,
            None => Priority::Medium,
        };

        Some(RemediationItem {
            parameter: self.parameter,
            label: self.label,
            current_value: value,
            current: (self.format_current)(value),
            status,
            priority,
            actions: self.actions.select(status, priority).to_vec(),
        })
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

const TEMPERATURE_ABOVE: &[&str] = &[
    "Turn pile immediately to dissipate heat",
    "Monitor temperature daily with compost thermometer",
    "Ensure moisture 50-60% for microbial activity",
    "Reduce pile size or spread material",
    "Target 20-40°C within 3-5 days",
    "Maintain weekly turning schedule",
];

const TEMPERATURE_BELOW: &[&str] = &[
    "Add nitrogen-rich greens (grass, manure)",
    "Monitor temperature daily with compost thermometer",
    "Ensure moisture 50-60% for microbial activity",
    "Increase pile size if too small",
    "Insulate with straw or cover with tarp",
    "Maintain weekly turning schedule",
];

const MOISTURE_ABOVE: &[&str] = &[
    "Add dry materials (sawdust, leaves)",
    "Turn pile to improve aeration",
    "Check drainage system",
    "Target 50-60% moisture content",
    "Monitor moisture twice weekly",
    "Re-check after 24 hours and adjust",
];

const MOISTURE_BELOW: &[&str] = &[
    "Water pile evenly",
    "Turn pile to improve aeration",
    "Use sprayer for uniform distribution",
    "Target 50-60% moisture content",
    "Monitor moisture twice weekly",
    "Re-check after 24 hours and adjust",
];

const PH_ABOVE: &[&str] = &[
    "Add sulfur (1 kg/m³)",
    "Mix thoroughly during turning",
    "Wait 3-5 days before re-testing",
    "Target pH 6.5-8.0",
    "Monitor weekly as changes occur slowly",
    "Avoid over-correction",
];

const PH_BELOW: &[&str] = &[
    "Add lime (2-3 kg/m³)",
    "Mix thoroughly during turning",
    "Wait 3-5 days before re-testing",
    "Target pH 6.5-8.0",
    "Monitor weekly as changes occur slowly",
    "Avoid over-correction",
];

const CN_ABOVE: &[&str] = &[
    "Add nitrogen-rich greens",
    "Mix 1 part nitrogen to 2-3 parts carbon by volume",
    "Blood meal or feather meal boost",
    "Turn thoroughly after 48 hours",
    "Expect C/N 20-25:1 within 7-10 days",
    "Monitor for ammonia smell",
];

const CN_BELOW: &[&str] = &[
    "Add dry carbon materials",
    "Mix 1 part nitrogen to 2-3 parts carbon by volume",
    "Shred materials for faster decomposition",
    "Turn thoroughly after 48 hours",
    "Target C/N 25-30:1 within one week",
    "Monitor for ammonia smell",
];

const GI_BELOW: &[&str] = &[
    "Continue composting for 7-12 more days",
    "Turn pile weekly for aerobic conditions",
    "Maintain 50-60% moisture consistently",
    "Wait for GI to reach 80%+",
    "Test weekly using cress seed bioassay",
    "Monitor temperature cooling",
];

const GI_PHYTOTOXIC: &[&str] = &[
    "Continue composting for 15-20 more days",
    "Turn pile weekly for aerobic conditions",
    "Maintain 50-60% moisture consistently",
    "DO NOT use if GI < 50 - phytotoxic",
    "Test weekly using cress seed bioassay",
    "Add mature compost inoculant",
];

const EC_ABOVE: &[&str] = &[
    "Leach with water - excess salts present",
    "Apply 2-3 volumes water per compost volume",
    "Blend 1:1 with low-EC material (peat, coir)",
    "Spread in thin layer, irrigate repeatedly",
    "Re-test EC after treatment - target <4.0 ms/cm",
    "Use only salt-tolerant species if EC remains high",
];

/// Monitored parameters in evaluation order
pub static REMEDIATION_RULES: &[RemediationRule] = &[
    RemediationRule {
        parameter: ParameterKey::Temperature,
        label: "Temperature",
        safe: Band::new(20.0, 55.0),
        // Cold piles are never urgent
        tolerance: Band::at_most(55.0),
        actions: ActionTemplates { above: TEMPERATURE_ABOVE, below: TEMPERATURE_BELOW, below_critical: None },
        format_current: |v| format!("{:.1}°C", v),
    },
    RemediationRule {
        parameter: ParameterKey::Moisture,
        label: "MC(%)",
        safe: Band::new(40.0, 65.0),
        tolerance: Band::new(35.0, 70.0),
        actions: ActionTemplates { above: MOISTURE_ABOVE, below: MOISTURE_BELOW, below_critical: None },
        format_current: |v| format!("{:.1}%", v),
    },
    RemediationRule {
        parameter: ParameterKey::Ph,
        label: "pH",
        safe: Band::new(6.5, 8.5),
        tolerance: Band::new(6.0, 9.0),
        actions: ActionTemplates { above: PH_ABOVE, below: PH_BELOW, below_critical: None },
        format_current: |v| format!("{:.1}", v),
    },
    RemediationRule {
        parameter: ParameterKey::CnRatio,
        label: "C/N Ratio",
        safe: Band::new(15.0, 30.0),
        tolerance: Band::new(12.0, 35.0),
        actions: ActionTemplates { above: CN_ABOVE, below: CN_BELOW, below_critical: None },
        format_current: |v| format!("{:.1}:1", v),
    },
    RemediationRule {
        parameter: ParameterKey::GerminationIndex,
        label: "GI(%)",
        safe: Band::at_least(80.0),
        tolerance: Band::at_least(super::PHYTOTOXIC_GI),
        actions: ActionTemplates { above: &[], below: GI_BELOW, below_critical: Some(GI_PHYTOTOXIC) },
        format_current: |v| format!("{:.0}%", v),
    },
    RemediationRule {
        parameter: ParameterKey::ElectricalConductivity,
        label: "EC(ms/cm)",
        safe: Band::at_most(4.0),
        tolerance: Band::at_most(5.0),
        actions: ActionTemplates { above: EC_ABOVE, below: &[], below_critical: None },
        format_current: |v| format!("{:.1}", v),
    },
];

/// Evaluate every rule, sort High before Medium (stable) and cap the list
pub fn recommend_remediation(params: &ParameterSet) -> Vec<RemediationItem> {
    let mut items: Vec<RemediationItem> = REMEDIATION_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(params))
        .collect();

    items.sort_by_key(|item| item.priority);
    items.truncate(MAX_REMEDIATION_ITEMS);
    items
}

/// One-line summary used in reports
pub fn improvement_summary(items: &[RemediationItem]) -> String {
    if items.is_empty() {
        "All parameters optimal".to_string()
    } else {
        format!("{} parameters need adjustment", items.len())
    }
}
