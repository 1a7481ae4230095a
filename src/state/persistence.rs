use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::meals::Catalog;
use crate::models::MealPlan;

/// Collapse plans sharing an id: last occurrence wins, first position kept.
fn dedupe_by_id<'a, I>(plans: I) -> Vec<MealPlan>
where
    I: IntoIterator<Item = &'a MealPlan>,
{
    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, &MealPlan> = HashMap::new();

    for plan in plans {
        if seen.insert(plan.id.clone(), plan).is_some() {
            warn!(id = %plan.id, "duplicate meal plan id, keeping last");
        } else {
            order.push(plan.id.clone());
        }
    }

    order
        .iter()
        .filter_map(|id| seen.get(id).map(|p| (*p).clone()))
        .collect()
}

/// Load a catalog from a JSON array of meal plans.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let plans: Vec<MealPlan> = serde_json::from_str(&content)?;
    let plans = dedupe_by_id(&plans);

    info!(path = %path.display(), plans = plans.len(), "loaded meal plan catalog");
    Ok(Catalog::new(plans))
}

/// Save meal plans as a pretty-printed JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, plans: &[MealPlan]) -> Result<()> {
    let deduped = dedupe_by_id(plans);
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write one CSV row per meal, snacks included.
pub fn write_meals_csv<P: AsRef<Path>>(path: P, plans: &[MealPlan]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "plan_id",
        "plan_title",
        "goal",
        "slot",
        "meal_id",
        "meal_name",
        "calories",
        "protein",
        "carbs",
        "fat",
        "prep_time",
        "dietary_tags",
        "ingredients",
    ])?;

    for plan in plans {
        let slots = plan
            .meals
            .main_meals()
            .into_iter()
            .chain(plan.meals.snacks.iter().map(|s| ("snack", s)));

        for (slot, meal) in slots {
            wtr.write_record([
                plan.id.clone(),
                plan.title.clone(),
                plan.goal.to_string(),
                slot.to_string(),
                meal.id.clone(),
                meal.name.clone(),
                meal.calories.to_string(),
                meal.protein.to_string(),
                meal.carbs.to_string(),
                meal.fat.to_string(),
                meal.prep_time.to_string(),
                meal.dietary_tags.join(";"),
                meal.ingredients.join(";"),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
