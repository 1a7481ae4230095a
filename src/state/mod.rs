mod browser;
mod calculator;
mod persistence;

pub use browser::{BrowserAction, BrowserState};
pub use calculator::{CalculatorAction, CalculatorState};
pub use persistence::{load_catalog, save_catalog, write_meals_csv};
