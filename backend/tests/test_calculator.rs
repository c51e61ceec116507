//! Tests for the calculator session
//!
//! Every edit mutates the parameters in place and the next read reflects
//! it; nothing is cached between edits.

use evvgas_core_rs::report::format_per_mile;
use evvgas_core_rs::{Calculator, Field, InputParameters, Variant, Winner};

#[test]
fn test_session_starts_with_defaults() {
    let calc = Calculator::new(Variant::Simple);
    assert_eq!(*calc.params(), InputParameters::for_variant(Variant::Simple));

    let metrics = calc.metrics();
    assert_eq!(format_per_mile(metrics.ev_total_cost_per_mile), "0.0517");
}

#[test]
fn test_each_edit_recomputes() {
    let mut calc = Calculator::new(Variant::Simple);

    let metrics = calc.set_field(Field::GasPrice, "5");
    assert_eq!(format_per_mile(metrics.gas_fuel_cost_per_mile), "0.2000");

    let metrics = calc.set_field(Field::Mpg, "50");
    assert_eq!(format_per_mile(metrics.gas_fuel_cost_per_mile), "0.1000");

    assert_eq!(calc.metrics(), metrics);
}

#[test]
fn test_keystroke_sequence() {
    // Typing "12000" one character at a time, including the empty field
    let mut calc = Calculator::new(Variant::Simple);
    for raw in ["", "1", "12", "120", "1200", "12000"] {
        let metrics = calc.set_field(Field::AnnualMiles, raw);
        assert!(metrics.ev_road_tax_per_mile.is_finite(), "{raw:?}");
    }
    assert_eq!(calc.params().annual_miles, 12000.0);
}

#[test]
fn test_empty_annual_miles_uses_one() {
    let mut calc = Calculator::new(Variant::Simple);
    let metrics = calc.set_field(Field::AnnualMiles, "");
    assert_eq!(metrics.ev_road_tax_per_mile, 100.0);
    assert_eq!(metrics.comparison.winner, Winner::GasCheaper);
}

#[test]
fn test_phev_percentage_edit_switches_variant() {
    let mut calc = Calculator::new(Variant::Simple);
    let metrics = calc.set_field(Field::PhevGasPercentage, "50");

    assert_eq!(calc.variant(), Variant::Phev);
    assert_eq!(format_per_mile(metrics.phev_blended_cost_per_mile.unwrap()), "0.0967");
    assert_eq!(format_per_mile(metrics.ev_total_cost_per_mile), "0.1050");
}

#[test]
fn test_phev_percentage_clamped_in_session() {
    let mut calc = Calculator::new(Variant::Phev);

    calc.set_field(Field::PhevGasPercentage, "150");
    assert_eq!(calc.params().phev_gas_percentage, Some(100.0));
    assert_eq!(calc.raw(Field::PhevGasPercentage), Some("150"));

    calc.set_field(Field::PhevGasPercentage, "-5");
    assert_eq!(calc.params().phev_gas_percentage, Some(0.0));

    calc.set_field(Field::PhevGasPercentage, "");
    assert_eq!(calc.params().phev_gas_percentage, Some(0.0));
}

#[test]
fn test_snapshot_json() {
    let calc = Calculator::new(Variant::Phev);
    let json = serde_json::to_value(calc.snapshot()).unwrap();

    assert_eq!(json["variant"], "phev");
    assert_eq!(json["inputs"]["evRoadTax"], 140.0);
    assert!(json["metrics"]["phevBlendedCostPerMile"].is_number());
}

#[test]
fn test_subnormal_mpg_with_all_electric_phev() {
    let mut calc = Calculator::new(Variant::Phev);
    let metrics = calc.set_field(Field::Mpg, "1e-320");

    assert_eq!(calc.params().mpg, 1.0);
    assert_eq!(calc.raw(Field::Mpg), Some("1e-320"));
    assert_eq!(metrics.gas_fuel_cost_per_mile, 2.99);
    // 0% gas is the pure EV total
    assert_eq!(metrics.phev_blended_cost_per_mile, Some(metrics.ev_fuel_cost_per_mile));
    assert_eq!(
        metrics.ev_total_cost_per_mile,
        metrics.ev_fuel_cost_per_mile + metrics.ev_road_tax_per_mile
    );
    assert_eq!(metrics.comparison.winner, Winner::EvCheaper);
    assert!(metrics.comparison.cost_difference_per_mile > 0.0);
}

#[test]
fn test_subnormal_miles_per_kwh() {
    let mut calc = Calculator::new(Variant::Simple);
    let metrics = calc.set_field(Field::MilesPerKwh, "1e-320");

    assert_eq!(calc.params().miles_per_kwh, 1.0);
    assert_eq!(metrics.ev_fuel_cost_per_mile, 0.13);
    assert!(metrics.ev_total_cost_per_mile.is_finite());
    assert!(metrics.annual.ev_total_cost.is_finite());
}
