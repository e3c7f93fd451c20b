use crate::assessment::{AssessmentReport, RemediationItem, SuitabilityVerdict};

/// Markdown formatter for assessment reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &AssessmentReport) -> String {
        let mut md = String::with_capacity(4096);

        md.push_str("# Compost Assessment\n\n");
        md.push_str(&format!(
            "**Quality Score:** {:.2}/100 ({})\n\n",
            report.score,
            report.quality_status.display_text()
        ));
        md.push_str(&format!(
            "**Maturity Stage:** {} - {}\n\n",
            report.stage.display_text(),
            report.stage.description()
        ));
        if report.is_ready() {
            md.push_str("**Days to Maturity:** ready now\n\n");
        } else {
            md.push_str(&format!("**Days to Maturity:** {}\n\n", report.days_to_maturity));
        }
        md.push_str(&format!("{}\n\n", report.recommendation));

        // Measured parameters
        md.push_str("## Parameters\n\n");
        md.push_str("| Parameter | Value | Unit |\n");
        md.push_str("|-----------|-------|------|\n");
        for (key, value) in report.parameters.iter() {
            md.push_str(&format!("| {} | {} | {} |\n", key.display_name(), value, key.unit()));
        }
        md.push('\n');

        // Remediation
        md.push_str("## Compost Improvements\n\n");
        md.push_str(&format!("*{}*\n\n", report.improvement_summary));
        for item in &report.remediation {
            Self::format_remediation(&mut md, item);
        }

        // Plants
        md.push_str("## Plant Suitability\n\n");

        md.push_str(&format!("### Suitable ({})\n\n", report.plants.suitable.len()));
        if report.plants.suitable.is_empty() {
            md.push_str("*No plants suitable for immediate use.*\n\n");
        }
        for verdict in &report.plants.suitable {
            Self::format_usable(&mut md, verdict);
        }

        md.push_str(&format!(
            "### Conditionally Usable ({})\n\n",
            report.plants.conditional.len()
        ));
        for verdict in &report.plants.conditional {
            Self::format_usable(&mut md, verdict);
        }

        md.push_str(&format!("### Not Suitable ({})\n\n", report.plants.not_suitable.len()));
        if !report.plants.not_suitable.is_empty() {
            md.push_str("| Plant | Type | Reason |\n");
            md.push_str("|-------|------|--------|\n");
            for verdict in &report.plants.not_suitable {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    verdict.plant_name,
                    verdict.plant_type,
                    verdict.reason.as_deref().unwrap_or("")
                ));
            }
            md.push('\n');
        }

        md
    }

    fn format_remediation(md: &mut String, item: &RemediationItem) {
        md.push_str(&format!(
            "### {} - {} ({} priority)\n\n",
            item.label,
            item.status.display_text(),
            item.priority.display_text()
        ));
        md.push_str(&format!("Current: {}\n\n", item.current));
        for (i, action) in item.actions.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, action));
        }
        md.push('\n');
    }

    fn format_usable(md: &mut String, verdict: &SuitabilityVerdict) {
        md.push_str(&format!(
            "#### {} ({}) - {:.0}% match\n\n",
            verdict.plant_name,
            verdict.plant_type,
            verdict.match_fraction * 100.0
        ));

        if let Some(advice) = verdict.usage_advice {
            md.push_str(&format!("{}\n\n", advice));
        }
        if let Some(reason) = &verdict.reason {
            md.push_str(&format!("**Issues:** {}  \n", reason));
        }
        if let Some(when) = verdict.when_to_use {
            md.push_str(&format!("**When to use:** {}\n\n", when.display_text()));
        }

        if let Some(growth) = verdict.growth {
            md.push_str(&format!(
                "- Growth rate: {}\n- Time to harvest: {}\n- Yield potential: {}\n",
                growth.growth_rate, growth.time_to_harvest, growth.yield_potential
            ));
            md.push_str(&format!("- Advantages: {}\n", growth.advantages.join(", ")));
            md.push_str(&format!("- Disadvantages: {}\n\n", growth.disadvantages.join(", ")));
        }

        if let Some(impact) = &verdict.growth_impact {
            for line in &impact.lines {
                md.push_str(&format!("- {}\n", line.render()));
            }
            md.push_str(&format!("\n**{}**\n\n", impact.headline));
            for (stage, outlook) in impact.outlook.stages() {
                md.push_str(&format!("- {}: {}\n", stage, outlook));
            }
            md.push('\n');
        }
    }
}
