pub mod catalog;
pub mod filter;

pub use catalog::{sample_catalog, Catalog};
pub use filter::{
    filter_plans, matches_diet, matches_goal, matches_search, DietSelector, GoalSelector,
    PlanFilter, DIETARY_OPTIONS, GOAL_OPTIONS,
};
