use crate::bmi::{healthy_band, kg_to_display, scale_position, BMI_SCALE_MAX};
use crate::models::{BmiResult, Meal, MealPlan, UnitSystem};

/// Character width of the BMI gauge.
const GAUGE_WIDTH: usize = 40;

const BMI_NOTES: [&str; 2] = [
    "BMI is a general indicator and may not be accurate for athletes, elderly, or pregnant women",
    "Consult a healthcare provider for a complete health assessment",
];

/// Text gauge for 0..40 with the healthy band as `=` and the marker as `|`.
pub fn bmi_gauge(bmi: f64) -> String {
    let (band_start, band_width) = healthy_band();
    let start = (band_start * GAUGE_WIDTH as f64).round() as usize;
    let end = ((band_start + band_width) * GAUGE_WIDTH as f64).round() as usize;
    let marker = ((scale_position(bmi) * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH - 1);

    (0..GAUGE_WIDTH)
        .map(|i| {
            if i == marker && !bmi.is_nan() {
                '|'
            } else if (start..end).contains(&i) {
                '='
            } else {
                '-'
            }
        })
        .collect()
}

/// Display a BMI result with the gauge and ideal weight range.
pub fn display_bmi_result(result: &BmiResult, unit: UnitSystem) {
    println!();
    println!("=== Your BMI ===");
    println!();
    println!("  {:.1}  {}", result.bmi, result.category);
    println!();
    println!("  [{}]", bmi_gauge(result.bmi));
    println!(
        "   0{:>w1$}{:>w2$}",
        "20",
        format!("{:.0}", BMI_SCALE_MAX),
        w1 = GAUGE_WIDTH / 2,
        w2 = GAUGE_WIDTH / 2,
    );
    println!(
        "  Healthy range: {:.1} - {:.1}",
        result.healthy_range_min, result.healthy_range_max
    );
    println!();
    println!("--- Ideal Weight Range ---");
    println!("Based on your height, a healthy weight range would be:");
    println!(
        "  {:.1}{} - {:.1}{}",
        kg_to_display(result.ideal_weight_range.min, unit),
        unit.weight_unit(),
        kg_to_display(result.ideal_weight_range.max, unit),
        unit.weight_unit(),
    );
    println!();
    for note in BMI_NOTES {
        println!("  * {}", note);
    }
    println!();
}

/// One line per plan card.
pub fn display_plan_grid(plans: &[&MealPlan]) {
    if plans.is_empty() {
        println!("No meal plans match the current filters.");
        return;
    }

    println!();
    println!("=== Meal Plans ({} found) ===", plans.len());
    println!();

    let max_title_len = plans.iter().map(|p| p.title.len()).max().unwrap_or(10);

    for plan in plans {
        println!(
            "  [{:>3}] {:<width$}  {:<12} {:>5} kcal  {}",
            plan.id,
            plan.title,
            plan.goal.label(),
            plan.calories,
            plan.tag_label(),
            width = max_title_len
        );
        println!("        {}", plan.description);
    }

    println!();
}

fn display_meal(slot: &str, meal: &Meal) {
    println!("--- {} ---", capitalize(slot));
    println!("  {}", meal.name);
    println!(
        "  Calories: {} kcal | Protein: {}g | Carbs: {}g | Fat: {}g",
        meal.calories, meal.protein, meal.carbs, meal.fat
    );
    println!("  Ingredients:");
    for ingredient in &meal.ingredients {
        println!("    - {}", ingredient);
    }
    println!("  {} minutes prep time", meal.prep_time);
    println!();
}

/// Full plan view: main meals in order, then snacks.
pub fn display_plan_detail(plan: &MealPlan) {
    println!();
    println!("=== {} ===", plan.title);
    println!("{}", plan.description);
    println!(
        "Goal: {} | Target: {} kcal | Diet: {}",
        plan.goal.label(),
        plan.calories,
        plan.tag_label()
    );
    println!();

    for (slot, meal) in plan.meals.main_meals() {
        display_meal(slot, meal);
    }

    if !plan.meals.snacks.is_empty() {
        println!("--- Snacks ---");
        for snack in &plan.meals.snacks {
            println!(
                "  {} - {} kcal, Protein: {}g",
                snack.name, snack.calories, snack.protein
            );
        }
        println!();
    }

    println!("--- Summary ---");
    println!("Total calories: {}", plan.total_calories());
    println!("Total protein: {}g", plan.total_protein());
    println!();
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_marker_and_band() {
        let gauge = bmi_gauge(20.0);
        assert_eq!(gauge.chars().count(), GAUGE_WIDTH);
        assert_eq!(gauge.chars().nth(20), Some('|'));
        assert_eq!(gauge.chars().nth(19), Some('='));
        assert_eq!(gauge.chars().nth(0), Some('-'));
    }

    #[test]
    fn test_gauge_nan_has_no_marker() {
        assert!(!bmi_gauge(f64::NAN).contains('|'));
    }

    #[test]
    fn test_gauge_clamps_high_values() {
        assert_eq!(bmi_gauge(80.0).chars().last(), Some('|'));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("breakfast"), "Breakfast");
        assert_eq!(capitalize(""), "");
    }
}
