use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Unit system the user enters measurements in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Centimeters and kilograms.
    #[default]
    Metric,
    /// Inches and pounds.
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Label shown next to the height field.
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Label shown next to the weight field.
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(FitError::InvalidSelector(format!("unknown unit system '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(FitError::InvalidSelector(format!("unknown gender '{}'", other))),
        }
    }
}

/// Self-reported activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 times/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 times/week",
            ActivityLevel::Active => "Hard exercise 6-7 times/week",
            ActivityLevel::VeryActive => "Professional athlete",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == key)
            .ok_or_else(|| FitError::InvalidSelector(format!("unknown activity level '{}'", s)))
    }
}

/// Raw form input for the BMI calculator.
///
/// Height and weight are kept as the strings the user typed; conversion happens
/// in the BMI engine. Gender, activity, and age are collected but do not
/// influence the computed result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub unit: UnitSystem,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub height: String,
    pub weight: String,
    pub age: String,
}

impl MeasurementInput {
    pub fn new(unit: UnitSystem, height: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            unit,
            height: height.into(),
            weight: weight.into(),
            ..Self::default()
        }
    }

    /// All three numeric fields have been filled in.
    pub fn is_complete(&self) -> bool {
        !self.height.is_empty() && !self.weight.is_empty() && !self.age.is_empty()
    }
}
