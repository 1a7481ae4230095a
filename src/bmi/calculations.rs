use tracing::{debug, warn};

use crate::bmi::constants::*;
use crate::error::{FitError, Result};
use crate::models::{BmiCategory, BmiResult, MeasurementInput, UnitSystem, WeightRange};

/// Parse a measurement the way a browser's `parseFloat` would.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"180cm"` reads as 180. Input without a numeric prefix yields `NaN`.
pub fn parse_measurement(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().unwrap_or(f64::NAN)
}

/// Normalize height and weight to meters and kilograms.
pub fn to_si(unit: UnitSystem, height: f64, weight: f64) -> (f64, f64) {
    match unit {
        UnitSystem::Metric => (height / CM_PER_M, weight),
        UnitSystem::Imperial => (height * CM_PER_INCH / CM_PER_M, weight * KG_PER_POUND),
    }
}

/// Weight in kilograms divided by height in meters squared.
#[inline]
pub fn calculate_bmi_value(height_m: f64, weight_kg: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Map a BMI to its category.
///
/// Thresholds are half-open: 18.5 is normal weight, 25.0 overweight, 30.0
/// obese. `NaN` fails every comparison and lands in `Obese`.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < NORMAL_MAX {
        BmiCategory::NormalWeight
    } else if bmi < OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Weights (kg) that keep the BMI inside the healthy range for this height.
pub fn ideal_weight_range(height_m: f64) -> WeightRange {
    let height_sq = height_m * height_m;
    WeightRange {
        min: HEALTHY_BMI_MIN * height_sq,
        max: HEALTHY_BMI_MAX * height_sq,
    }
}

fn build_result(height_m: f64, weight_kg: f64) -> BmiResult {
    let bmi = calculate_bmi_value(height_m, weight_kg);
    BmiResult {
        bmi,
        category: classify_bmi(bmi),
        healthy_range_min: HEALTHY_BMI_MIN,
        healthy_range_max: HEALTHY_BMI_MAX,
        ideal_weight_range: ideal_weight_range(height_m),
    }
}

/// Compute a BMI result from raw form strings.
///
/// Never fails: unparseable or non-positive input propagates as `NaN` or
/// infinity into the result.
pub fn calculate_bmi(unit: UnitSystem, height: &str, weight: &str) -> BmiResult {
    let (height_m, weight_kg) = to_si(unit, parse_measurement(height), parse_measurement(weight));
    let result = build_result(height_m, weight_kg);

    if result.is_finite() {
        debug!(%unit, bmi = result.bmi, category = %result.category, "computed BMI");
    } else {
        warn!(%unit, height, weight, "BMI computed from unusable input");
    }

    result
}

fn require_positive(field: &'static str, raw: &str) -> Result<f64> {
    let value = parse_measurement(raw);
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        warn!(field, value = raw, "rejected measurement");
        Err(FitError::InvalidMeasurement {
            field,
            value: raw.to_string(),
        })
    }
}

/// Like [`calculate_bmi`] but rejects missing, non-finite, zero, or negative
/// height and weight.
pub fn calculate_bmi_checked(unit: UnitSystem, height: &str, weight: &str) -> Result<BmiResult> {
    let height_value = require_positive("height", height)?;
    let weight_value = require_positive("weight", weight)?;
    let (height_m, weight_kg) = to_si(unit, height_value, weight_value);
    let result = build_result(height_m, weight_kg);
    debug!(%unit, bmi = result.bmi, category = %result.category, "computed BMI");
    Ok(result)
}

/// Compute from captured form input. Gender, activity, and age are ignored.
pub fn calculate_from_input(input: &MeasurementInput) -> BmiResult {
    calculate_bmi(input.unit, &input.height, &input.weight)
}

/// Position of `bmi` on the 0..40 gauge as a fraction in `[0, 1]`.
pub fn scale_position(bmi: f64) -> f64 {
    if bmi.is_nan() {
        return 0.0;
    }
    (bmi / BMI_SCALE_MAX).clamp(0.0, 1.0)
}

/// Start offset and width of the healthy band on the gauge, as fractions.
pub fn healthy_band() -> (f64, f64) {
    (
        HEALTHY_BMI_MIN / BMI_SCALE_MAX,
        (HEALTHY_BMI_MAX - HEALTHY_BMI_MIN) / BMI_SCALE_MAX,
    )
}

/// Express a kilogram value in the unit system the user entered.
pub fn kg_to_display(kg: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Metric => kg,
        UnitSystem::Imperial => kg / KG_PER_POUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measurement_prefix() {
        assert_eq!(parse_measurement("180"), 180.0);
        assert_eq!(parse_measurement("  72.5kg"), 72.5);
        assert_eq!(parse_measurement(".5"), 0.5);
        assert_eq!(parse_measurement("-3"), -3.0);
        assert_eq!(parse_measurement("1e2"), 100.0);
        assert_eq!(parse_measurement("1e"), 1.0);
        assert_eq!(parse_measurement("Infinity"), f64::INFINITY);
    }

    #[test]
    fn test_parse_measurement_nan() {
        assert!(parse_measurement("").is_nan());
        assert!(parse_measurement("abc").is_nan());
        assert!(parse_measurement(".").is_nan());
        assert!(parse_measurement("-").is_nan());
    }

    #[test]
    fn test_to_si_metric() {
        let (h, w) = to_si(UnitSystem::Metric, 180.0, 75.0);
        assert!((h - 1.8).abs() < 1e-12);
        assert_eq!(w, 75.0);
    }

    #[test]
    fn test_classify_nan_is_obese() {
        assert_eq!(classify_bmi(f64::NAN), BmiCategory::Obese);
    }

    #[test]
    fn test_zero_height_is_infinite() {
        let result = calculate_bmi(UnitSystem::Metric, "0", "70");
        assert!(result.bmi.is_infinite());
        assert_eq!(result.category, BmiCategory::Obese);
    }

    #[test]
    fn test_checked_rejects_bad_input() {
        assert!(calculate_bmi_checked(UnitSystem::Metric, "", "70").is_err());
        assert!(calculate_bmi_checked(UnitSystem::Metric, "180", "-1").is_err());
        assert!(calculate_bmi_checked(UnitSystem::Metric, "0", "70").is_err());
        assert!(calculate_bmi_checked(UnitSystem::Metric, "180", "75").is_ok());
    }

    #[test]
    fn test_scale_position_clamped() {
        assert_eq!(scale_position(20.0), 0.5);
        assert_eq!(scale_position(55.0), 1.0);
        assert_eq!(scale_position(-2.0), 0.0);
        assert_eq!(scale_position(f64::NAN), 0.0);
    }

    #[test]
    fn test_kg_to_display() {
        assert_eq!(kg_to_display(70.0, UnitSystem::Metric), 70.0);
        assert!((kg_to_display(KG_PER_POUND, UnitSystem::Imperial) - 1.0).abs() < 1e-12);
    }
}
