mod bmi;
mod meal;
mod measurement;

pub use bmi::{BmiCategory, BmiResult, WeightRange};
pub use meal::{Goal, Meal, MealPlan, PlanMeals};
pub use measurement::{ActivityLevel, Gender, MeasurementInput, UnitSystem};
