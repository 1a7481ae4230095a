use dialoguer::{Confirm, Input, Select};

use crate::error::{FitError, Result};
use crate::interface::render::capitalize;
use crate::meals::{Catalog, DietSelector, GoalSelector, DIETARY_OPTIONS, GOAL_OPTIONS};
use crate::models::{ActivityLevel, Gender, MealPlan, UnitSystem};
use crate::state::{CalculatorAction, CalculatorState};

/// Prompt for the unit system.
pub fn prompt_unit(current: UnitSystem) -> Result<UnitSystem> {
    let items: Vec<String> = UnitSystem::ALL.iter().map(|u| capitalize(u.as_str())).collect();
    let default = UnitSystem::ALL.iter().position(|u| *u == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Unit system")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(UnitSystem::ALL[selection])
}

pub fn prompt_gender(current: Gender) -> Result<Gender> {
    let items: Vec<String> = Gender::ALL.iter().map(|g| capitalize(g.as_str())).collect();
    let default = Gender::ALL.iter().position(|g| *g == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Gender::ALL[selection])
}

pub fn prompt_activity(current: ActivityLevel) -> Result<ActivityLevel> {
    let items: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.description()).collect();
    let default = ActivityLevel::ALL.iter().position(|a| *a == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for a free-form number, returned as typed.
fn prompt_number(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| -> std::result::Result<(), &'static str> {
            match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(()),
                _ => Err("Please enter a number"),
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Walk the user through the BMI form and calculate.
pub fn run_calculator_form(state: CalculatorState) -> Result<CalculatorState> {
    let unit = prompt_unit(state.input.unit)?;
    let gender = prompt_gender(state.input.gender)?;
    let state = state
        .reduce(CalculatorAction::SetUnit(unit))
        .reduce(CalculatorAction::SetGender(gender));

    let height = prompt_number(&format!("Height ({})", unit.height_unit()))?;
    let weight = prompt_number(&format!("Weight ({})", unit.weight_unit()))?;
    let age = prompt_number("Age")?;
    let activity = prompt_activity(state.input.activity)?;

    let state = state
        .reduce(CalculatorAction::SetHeight(height))
        .reduce(CalculatorAction::SetWeight(weight))
        .reduce(CalculatorAction::SetAge(age))
        .reduce(CalculatorAction::SetActivity(activity));

    if !state.can_calculate() {
        return Err(FitError::InvalidInput(
            "Height, weight and age are required".to_string(),
        ));
    }

    Ok(state.reduce(CalculatorAction::Calculate))
}

/// Prompt for search text (may be empty).
pub fn prompt_search() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search meal plans (Enter for all)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

pub fn prompt_diet() -> Result<DietSelector> {
    let labels: Vec<&str> = DIETARY_OPTIONS.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&labels)
        .default(0)
        .interact()?;

    DIETARY_OPTIONS[selection].0.parse()
}

pub fn prompt_goal() -> Result<GoalSelector> {
    let labels: Vec<&str> = GOAL_OPTIONS.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(0)
        .interact()?;

    GOAL_OPTIONS[selection].0.parse()
}

/// Let the user pick one of the visible plans, or none.
pub fn prompt_plan_choice<'a>(plans: &[&'a MealPlan]) -> Result<Option<&'a MealPlan>> {
    if plans.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = plans.iter().map(|p| p.title.clone()).collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("View plan")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(plans.get(selection).copied())
}

/// Resolve a typed plan name, confirming fuzzy guesses.
pub fn prompt_plan_by_name<'a>(catalog: &'a Catalog, query: &str) -> Result<Option<&'a MealPlan>> {
    let needle = query.trim().to_lowercase();
    if let Some(plan) = catalog
        .plans()
        .iter()
        .find(|p| p.id == query || p.title.to_lowercase() == needle)
    {
        return Ok(Some(plan));
    }

    let candidates = catalog.fuzzy_titles(query);
    match candidates.as_slice() {
        [] => {
            println!("No matching meal plan found for '{}'", query);
            Ok(None)
        }
        [(plan, _)] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", plan.title), true)?;
            Ok(confirm.then_some(*plan))
        }
        _ => {
            let plans: Vec<&MealPlan> = candidates.iter().take(5).map(|(p, _)| *p).collect();
            prompt_plan_choice(&plans)
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
