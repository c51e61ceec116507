//! Results panel rendering
//!
//! Per-mile amounts are shown with 4 decimal places, annual totals are
//! rounded to whole dollars.

use std::fmt::Write;

use crate::costs::{DerivedMetrics, Winner};

/// Rendering switches for the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    /// Include the annual totals section
    pub show_annual: bool,
}

/// Format a per-mile amount with 4 decimals
///
/// # Example
/// ```
/// use evvgas_core_rs::report::format_per_mile;
///
/// assert_eq!(format_per_mile(0.13 / 3.0), "0.0433");
/// ```
pub fn format_per_mile(value: f64) -> String {
    format!("{:.4}", value)
}

/// Format an annual total rounded to the nearest whole unit
///
/// Halves round toward positive infinity, so -620.5 shows as -620.
pub fn format_annual(value: f64) -> String {
    let rounded = (value + 0.5).floor();
    // Avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.0}", rounded)
}

/// Label for the electric side of the comparison
pub fn ev_label(metrics: &DerivedMetrics) -> &'static str {
    if metrics.is_phev() {
        "PHEV"
    } else {
        "EV"
    }
}

/// The one-line verdict shown under the results
pub fn comparison_sentence(metrics: &DerivedMetrics) -> String {
    let difference = format_per_mile(metrics.comparison.cost_difference_per_mile);
    match metrics.comparison.winner {
        Winner::EvCheaper => format!(
            "{} is cheaper by ${} per mile.",
            ev_label(metrics),
            difference
        ),
        Winner::GasCheaper => format!("Gas Car is cheaper by ${} per mile.", difference),
        Winner::Equal => "Both cost the same per mile.".to_string(),
    }
}

/// Render the full results panel as plain text
pub fn render_text(metrics: &DerivedMetrics, options: ReportOptions) -> String {
    let mut out = String::new();
    let label = ev_label(metrics);

    // Writing into a String cannot fail
    let _ = writeln!(out, "{} Cost per Mile", label);
    let _ = writeln!(
        out,
        "  Energy Cost per Mile:  ${}",
        format_per_mile(metrics.ev_fuel_cost_per_mile)
    );
    if let (Some(blended), Some(split)) = (metrics.phev_blended_cost_per_mile, metrics.usage_split) {
        let _ = writeln!(
            out,
            "  Blended Cost per Mile: ${} ({}% gas / {}% electric)",
            format_per_mile(blended),
            split.gas_percentage,
            split.electric_percentage
        );
    }
    let _ = writeln!(
        out,
        "  Road Tax per Mile:     ${}",
        format_per_mile(metrics.ev_road_tax_per_mile)
    );
    let _ = writeln!(
        out,
        "  Total Cost per Mile:   ${}",
        format_per_mile(metrics.ev_total_cost_per_mile)
    );
    out.push('\n');

    let _ = writeln!(out, "Gas Car Cost per Mile");
    let _ = writeln!(
        out,
        "  Fuel Cost per Mile:    ${}",
        format_per_mile(metrics.gas_fuel_cost_per_mile)
    );
    let _ = writeln!(
        out,
        "  Maintenance per Mile:  ${}",
        format_per_mile(metrics.gas_maintenance_per_mile)
    );
    let _ = writeln!(
        out,
        "  Total Cost per Mile:   ${}",
        format_per_mile(metrics.gas_total_cost_per_mile)
    );
    out.push('\n');

    if options.show_annual {
        let _ = writeln!(out, "Annual Cost");
        let _ = writeln!(
            out,
            "  {:<8} ${}",
            format!("{}:", label),
            format_annual(metrics.annual.ev_total_cost)
        );
        let _ = writeln!(
            out,
            "  {:<8} ${}",
            "Gas Car:",
            format_annual(metrics.annual.gas_total_cost)
        );
        out.push('\n');
    }

    out.push_str(&comparison_sentence(metrics));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::compute_metrics;
    use crate::inputs::{InputParameters, Variant};

    #[test]
    fn test_format_per_mile() {
        assert_eq!(format_per_mile(0.15), "0.1500");
        assert_eq!(format_per_mile(100.0 / 12000.0), "0.0083");
        assert_eq!(format_per_mile(0.0), "0.0000");
    }

    #[test]
    fn test_format_annual() {
        assert_eq!(format_annual(1800.0), "1800");
        assert_eq!(format_annual(620.4), "620");
        assert_eq!(format_annual(620.6), "621");
        assert_eq!(format_annual(-0.2), "0");
    }

    #[test]
    fn test_format_annual_halves_round_up() {
        assert_eq!(format_annual(620.5), "621");
        assert_eq!(format_annual(-620.5), "-620");
        assert_eq!(format_annual(-620.6), "-621");
        assert_eq!(format_annual(-0.5), "0");
    }

    #[test]
    fn test_tiny_divisor_renders_numbers() {
        let mut params = InputParameters::for_variant(Variant::Phev);
        params.mpg = 1e-320;
        let text = render_text(&compute_metrics(&params), ReportOptions { show_annual: true });
        assert!(!text.contains("NaN"), "{text}");
        assert!(!text.contains("inf"), "{text}");
        assert!(text.contains("PHEV is cheaper by $"), "{text}");
    }

    #[test]
    fn test_sentence_equal() {
        let mut params = InputParameters::default();
        params.gas_price = 0.0;
        params.maintenance_cost = 0.0;
        params.electricity_cost = 0.0;
        params.ev_road_tax = 0.0;
        let metrics = compute_metrics(&params);
        assert_eq!(comparison_sentence(&metrics), "Both cost the same per mile.");
    }

    #[test]
    fn test_sentence_gas_cheaper() {
        let mut params = InputParameters::default();
        params.electricity_cost = 0.6;
        let metrics = compute_metrics(&params);
        assert!(comparison_sentence(&metrics).starts_with("Gas Car is cheaper by $"));
    }

    #[test]
    fn test_phev_label() {
        let metrics = compute_metrics(&InputParameters::for_variant(Variant::Phev));
        assert!(comparison_sentence(&metrics).starts_with("PHEV is cheaper by $"));
        assert!(render_text(&metrics, ReportOptions::default()).contains("Blended Cost per Mile"));
    }

    #[test]
    fn test_annual_section_is_optional() {
        let metrics = compute_metrics(&InputParameters::default());
        assert!(!render_text(&metrics, ReportOptions::default()).contains("Annual Cost"));

        let text = render_text(&metrics, ReportOptions { show_annual: true });
        assert!(text.contains("Annual Cost"));
        assert!(text.contains("$620"));
        assert!(text.contains("$1800"));
    }
}
