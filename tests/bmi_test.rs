#[macro_use]
extern crate assert_float_eq;

use fit_planner_rs::bmi::{
    calculate_bmi, calculate_bmi_checked, classify_bmi, ideal_weight_range, CM_PER_INCH,
    HEALTHY_BMI_MAX, HEALTHY_BMI_MIN, KG_PER_POUND,
};
use fit_planner_rs::models::{BmiCategory, UnitSystem};
use fit_planner_rs::FitError;

#[test]
fn test_metric_formula() {
    for (height_cm, weight_kg) in [(180.0, 75.0), (155.5, 48.2), (201.0, 130.0)] {
        let result = calculate_bmi(
            UnitSystem::Metric,
            &height_cm.to_string(),
            &weight_kg.to_string(),
        );
        let expected = weight_kg / ((height_cm / 100.0) * (height_cm / 100.0));
        assert_float_absolute_eq!(result.bmi, expected, 1e-9);
    }
}

#[test]
fn test_reference_example() {
    let result = calculate_bmi(UnitSystem::Metric, "180", "75");

    assert_float_absolute_eq!(result.bmi, 23.148, 0.001);
    assert_eq!(result.category, BmiCategory::NormalWeight);
    assert_eq!(result.category.label(), "Normal weight");
    assert_float_absolute_eq!(result.ideal_weight_range.min, 59.94, 0.001);
    assert_float_absolute_eq!(result.ideal_weight_range.max, 80.676, 0.001);
}

#[test]
fn test_imperial_matches_metric_equivalent() {
    let (height_in, weight_lb) = (70.0_f64, 160.0_f64);
    let imperial = calculate_bmi(UnitSystem::Imperial, "70", "160");
    let metric = calculate_bmi(
        UnitSystem::Metric,
        &(height_in * CM_PER_INCH).to_string(),
        &(weight_lb * KG_PER_POUND).to_string(),
    );

    assert_float_absolute_eq!(imperial.bmi, metric.bmi, 1e-9);
    assert_eq!(imperial.category, metric.category);
    assert_float_absolute_eq!(
        imperial.ideal_weight_range.min,
        metric.ideal_weight_range.min,
        1e-9
    );
}

#[test]
fn test_category_boundaries_half_open() {
    assert_eq!(classify_bmi(18.499), BmiCategory::Underweight);
    assert_eq!(classify_bmi(18.5), BmiCategory::NormalWeight);
    assert_eq!(classify_bmi(24.999), BmiCategory::NormalWeight);
    assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(classify_bmi(29.999), BmiCategory::Overweight);
    assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_ideal_range_monotonic_in_height() {
    let mut previous = ideal_weight_range(1.0);
    for step in 1..=100 {
        let height_m = 1.0 + f64::from(step) * 0.01;
        let range = ideal_weight_range(height_m);
        assert!(range.min > previous.min);
        assert!(range.max > previous.max);
        previous = range;
    }
}

#[test]
fn test_ideal_range_ignores_weight() {
    let light = calculate_bmi(UnitSystem::Metric, "170", "50");
    let heavy = calculate_bmi(UnitSystem::Metric, "170", "110");
    assert_eq!(light.ideal_weight_range, heavy.ideal_weight_range);
}

#[test]
fn test_healthy_bounds_constant() {
    for unit in UnitSystem::ALL {
        let result = calculate_bmi(unit, "65", "140");
        assert_eq!(result.healthy_range_min, HEALTHY_BMI_MIN);
        assert_eq!(result.healthy_range_max, HEALTHY_BMI_MAX);
    }
}

#[test]
fn test_bad_input_propagates_nan() {
    let result = calculate_bmi(UnitSystem::Metric, "", "75");
    assert!(result.bmi.is_nan());
    assert!(result.ideal_weight_range.min.is_nan());

    let result = calculate_bmi(UnitSystem::Metric, "180", "heavy");
    assert!(result.bmi.is_nan());
    assert!(!result.ideal_weight_range.min.is_nan());
}

#[test]
fn test_checked_reports_field() {
    match calculate_bmi_checked(UnitSystem::Imperial, "70", "0") {
        Err(FitError::InvalidMeasurement { field, value }) => {
            assert_eq!(field, "weight");
            assert_eq!(value, "0");
        }
        other => panic!("expected invalid weight, got {:?}", other),
    }
}

#[test]
fn test_checked_agrees_with_lenient_on_valid_input() {
    let checked = calculate_bmi_checked(UnitSystem::Imperial, "68.5", "172").unwrap();
    let lenient = calculate_bmi(UnitSystem::Imperial, "68.5", "172");
    assert_eq!(checked, lenient);
}
