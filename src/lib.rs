pub mod bmi;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod meals;
pub mod models;
pub mod state;

pub use error::{FitError, Result};
pub use models::{BmiResult, MealPlan};
