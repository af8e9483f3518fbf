//! # Report Generation
//!
//! Renders a calculation into a plain-text report for download or
//! archiving. The report is a write-only sink: it echoes inputs and
//! results but feeds nothing back into the calculation.

use chrono::Utc;

use crate::calculations::spring_rate::CalculationResult;
use crate::setup::SpringSetup;

const DISCLAIMER: &str = "Engineering Disclaimer: Actual requirements may deviate due to damper \
valving, friction, and dynamic riding loads. Physical verification via sag \
measurement is mandatory.";

/// Render a finished calculation as a plain-text report.
///
/// Returns a "cannot calculate" stub when the result is not computable,
/// so a download button wired to a mid-edit form never emits misleading
/// numbers.
pub fn render_report(setup: &SpringSetup, result: &CalculationResult, bike_model: &str) -> String {
    let mut out = String::new();
    let date = Utc::now().format("%Y-%m-%d");

    out.push_str("MTB Spring Rate Calculation Report\n");
    out.push_str(&format!("Generated: {date}\n\n"));

    if !result.computable {
        out.push_str("Inputs incomplete: spring rate could not be calculated.\n");
        return out;
    }

    out.push_str("1. Calculation Summary\n");
    out.push_str(&format!("   Bike: {bike_model}\n"));
    out.push_str(&format!("   Category: {}\n", setup.chassis.category));
    out.push_str(&format!("   Sprung Mass: {:.1} kg\n", result.sprung_mass_kg));
    out.push_str(&format!(
        "   Calculated Rear Load: {:.1} lbs\n",
        result.rear_load_lbs
    ));
    out.push_str(&format!(
        "   Effective Leverage Ratio: {:.2}:1\n",
        result.effective_lr
    ));
    out.push_str(&format!(
        "   Mathematical Baseline: {:.0} lbs/in\n",
        result.raw_rate_lbs_per_in
    ));

    out.push_str("\n2. Setup Guide\n");
    out.push_str(&format!("   Spring Type: {}\n", setup.spring_type));
    out.push_str(&format!(
        "   Recommended Rate: {} lbs/in\n",
        result.recommended_rate_lbs_per_in
    ));
    out.push_str(&format!("   Target Sag: {:.0} %\n", setup.target_sag_pct));

    out.push_str("\n3. Alternative Rates\n");
    for alt in &result.alternatives {
        out.push_str(&format!(
            "   {} lbs/in: {:.1} % sag ({})\n",
            alt.rate_lbs, alt.sag_pct, alt.feel
        ));
    }

    out.push_str(&format!("\n{DISCLAIMER}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::spring_rate::calculate;
    use crate::categories::BikeCategory;
    use crate::setup::SpringSetup;

    #[test]
    fn test_report_sections() {
        let setup = SpringSetup::for_category(BikeCategory::Enduro);
        let result = calculate(&setup);
        let report = render_report(&setup, &result, "Zeta Enduro 29");

        assert!(report.contains("1. Calculation Summary"));
        assert!(report.contains("Zeta Enduro 29"));
        assert!(report.contains("2. Setup Guide"));
        assert!(report.contains("3. Alternative Rates"));
        assert!(report.contains("Engineering Disclaimer"));
        assert!(report.contains(&format!(
            "Recommended Rate: {} lbs/in",
            result.recommended_rate_lbs_per_in
        )));
    }

    #[test]
    fn test_not_computable_report() {
        let mut setup = SpringSetup::for_category(BikeCategory::Enduro);
        setup.kinematics.stroke_mm = 0.0;
        let result = calculate(&setup);
        let report = render_report(&setup, &result, "Any Bike");

        assert!(report.contains("could not be calculated"));
        assert!(!report.contains("Recommended Rate"));
    }
}
