use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::meals::{DietSelector, GoalSelector};
use crate::models::{ActivityLevel, Gender, UnitSystem};

/// FitPlanner — BMI calculator and meal plan browser.
#[derive(Parser, Debug)]
#[command(name = "fit_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Meal plan catalog JSON file (defaults to the built-in catalog).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Calculate BMI and ideal weight range.
    Bmi {
        /// Unit system: metric (cm/kg) or imperial (in/lbs).
        #[arg(short, long, default_value = "metric")]
        unit: UnitSystem,

        /// Height in cm (metric) or inches (imperial).
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kg (metric) or pounds (imperial).
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Age in years. Recorded only.
        #[arg(long)]
        age: Option<String>,

        /// Recorded only.
        #[arg(long, default_value = "male")]
        gender: Gender,

        /// Recorded only.
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,

        /// Skip validation and let bad input flow through as NaN/inf.
        #[arg(long)]
        lenient: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List meal plans matching the given filters.
    Plans {
        /// Case-insensitive title search.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Dietary tag (vegetarian, vegan, keto, paleo) or "all".
        #[arg(short, long, default_value = "all")]
        diet: DietSelector,

        /// Goal (weight-loss, muscle-gain, maintenance) or "all".
        #[arg(short, long, default_value = "all")]
        goal: GoalSelector,

        /// Print matching plans as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one meal plan in detail, by id or title.
    Show {
        plan: String,
    },

    /// Interactive BMI form followed by plan browsing.
    #[default]
    Interactive,
}
