use std::fmt;

use serde::{Deserialize, Serialize};

/// BMI category from the standard adult thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight bounds in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// Outcome of a single BMI calculation.
///
/// Created fresh on every calculation. Values are not validated here, so a
/// result built from bad input may carry `NaN` or infinities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub healthy_range_min: f64,
    pub healthy_range_max: f64,
    pub ideal_weight_range: WeightRange,
}

impl BmiResult {
    /// Whether every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        self.bmi.is_finite()
            && self.ideal_weight_range.min.is_finite()
            && self.ideal_weight_range.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_camel_case() {
        let result = BmiResult {
            bmi: 22.0,
            category: BmiCategory::NormalWeight,
            healthy_range_min: 18.5,
            healthy_range_max: 24.9,
            ideal_weight_range: WeightRange { min: 60.0, max: 80.0 },
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["category"], "Normal weight");
        assert_eq!(json["healthyRangeMin"], 18.5);
        assert_eq!(json["idealWeightRange"]["max"], 80.0);
    }

    #[test]
    fn test_is_finite() {
        let mut result = BmiResult {
            bmi: f64::NAN,
            category: BmiCategory::Obese,
            healthy_range_min: 18.5,
            healthy_range_max: 24.9,
            ideal_weight_range: WeightRange { min: 0.0, max: 0.0 },
        };
        assert!(!result.is_finite());
        result.bmi = 21.0;
        assert!(result.is_finite());
    }
}
