use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::FitError;
use crate::models::{Goal, MealPlan};

/// Dietary selector values offered in the browser, with display labels.
pub const DIETARY_OPTIONS: [(&str, &str); 5] = [
    ("all", "All Diets"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("keto", "Keto"),
    ("paleo", "Paleo"),
];

/// Goal selector values offered in the browser, with display labels.
pub const GOAL_OPTIONS: [(&str, &str); 4] = [
    ("all", "All Goals"),
    ("weight-loss", "Weight Loss"),
    ("muscle-gain", "Muscle Gain"),
    ("maintenance", "Maintenance"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DietSelector {
    #[default]
    All,
    Tag(String),
}

impl fmt::Display for DietSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietSelector::All => f.write_str("all"),
            DietSelector::Tag(tag) => f.write_str(tag),
        }
    }
}

impl FromStr for DietSelector {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "" => Err(FitError::InvalidSelector("empty dietary tag".to_string())),
            "all" => Ok(DietSelector::All),
            _ => Ok(DietSelector::Tag(key)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalSelector {
    #[default]
    All,
    Goal(Goal),
}

impl fmt::Display for GoalSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalSelector::All => f.write_str("all"),
            GoalSelector::Goal(goal) => write!(f, "{}", goal),
        }
    }
}

impl FromStr for GoalSelector {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(GoalSelector::All)
        } else {
            s.parse().map(GoalSelector::Goal)
        }
    }
}

/// Current search and selector values of the plan browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanFilter {
    pub search: String,
    pub diet: DietSelector,
    pub goal: GoalSelector,
}

impl PlanFilter {
    pub fn matches(&self, plan: &MealPlan) -> bool {
        matches_search(plan, &self.search)
            && matches_diet(plan, &self.diet)
            && matches_goal(plan, self.goal)
    }
}

/// Case-insensitive substring match on the plan title. Empty search matches.
pub fn matches_search(plan: &MealPlan, search: &str) -> bool {
    plan.title.to_lowercase().contains(&search.to_lowercase())
}

/// Only breakfast, lunch and dinner tags are consulted; snacks are not.
pub fn matches_diet(plan: &MealPlan, diet: &DietSelector) -> bool {
    match diet {
        DietSelector::All => true,
        DietSelector::Tag(tag) => plan
            .meals
            .main_meals()
            .iter()
            .any(|(_, meal)| meal.has_tag(tag)),
    }
}

pub fn matches_goal(plan: &MealPlan, goal: GoalSelector) -> bool {
    match goal {
        GoalSelector::All => true,
        GoalSelector::Goal(goal) => plan.goal == goal,
    }
}

/// Plans passing every predicate, in catalog order.
pub fn filter_plans<'a>(plans: &'a [MealPlan], filter: &PlanFilter) -> Vec<&'a MealPlan> {
    let matched: Vec<&MealPlan> = plans.iter().filter(|p| filter.matches(p)).collect();
    debug!(
        search = %filter.search,
        diet = %filter.diet,
        goal = %filter.goal,
        matched = matched.len(),
        total = plans.len(),
        "filtered meal plans"
    );
    matched
}
