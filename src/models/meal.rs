use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Target outcome of a meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight-loss",
            Goal::MuscleGain => "muscle-gain",
            Goal::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == key)
            .ok_or_else(|| FitError::InvalidSelector(format!("unknown goal '{}'", s)))
    }
}

/// A single meal with its macro breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub image: String,
    pub calories: f64,
    /// Grams.
    pub protein: f64,
    /// Grams.
    pub carbs: f64,
    /// Grams.
    pub fat: f64,
    /// Minutes.
    pub prep_time: f64,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Meal {
    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// The fixed daily structure of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    #[serde(default)]
    pub snacks: Vec<Meal>,
}

impl PlanMeals {
    /// Breakfast, lunch and dinner, in that order.
    pub fn main_meals(&self) -> [(&'static str, &Meal); 3] {
        [
            ("breakfast", &self.breakfast),
            ("lunch", &self.lunch),
            ("dinner", &self.dinner),
        ]
    }

    /// Main meals followed by snacks.
    pub fn all(&self) -> impl Iterator<Item = &Meal> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .chain(self.snacks.iter())
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub title: String,
    pub description: String,
    pub goal: Goal,
    /// Daily calorie target.
    pub calories: f64,
    pub image: String,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    pub meals: PlanMeals,
}

impl MealPlan {
    /// Calories summed over every meal, snacks included.
    pub fn total_calories(&self) -> f64 {
        self.meals.all().map(|m| m.calories).sum()
    }

    /// Protein grams summed over every meal, snacks included.
    pub fn total_protein(&self) -> f64 {
        self.meals.all().map(|m| m.protein).sum()
    }

    /// Plan-level tags for the card, or "Regular" when untagged.
    pub fn tag_label(&self) -> String {
        if self.dietary_tags.is_empty() {
            "Regular".to_string()
        } else {
            self.dietary_tags.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, calories: f64, protein: f64, tags: &[&str]) -> Meal {
        Meal {
            id: id.to_string(),
            name: id.to_uppercase(),
            image: String::new(),
            calories,
            protein,
            carbs: 0.0,
            fat: 0.0,
            prep_time: 5.0,
            dietary_tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: Vec::new(),
        }
    }

    fn plan() -> MealPlan {
        MealPlan {
            id: "p".to_string(),
            title: "Plan".to_string(),
            description: String::new(),
            goal: Goal::Maintenance,
            calories: 2000.0,
            image: String::new(),
            dietary_tags: Vec::new(),
            meals: PlanMeals {
                breakfast: meal("b", 300.0, 10.0, &["vegan"]),
                lunch: meal("l", 500.0, 20.0, &[]),
                dinner: meal("d", 700.0, 30.5, &[]),
                snacks: vec![meal("s", 100.0, 5.0, &[])],
            },
        }
    }

    #[test]
    fn test_totals_include_snacks() {
        let plan = plan();
        assert_eq!(plan.total_calories(), 1600.0);
        assert_eq!(plan.total_protein(), 65.5);
    }

    #[test]
    fn test_totals_with_huge_calories() {
        let mut plan = plan();
        plan.meals.breakfast.calories = f64::from(u32::MAX);
        plan.meals.lunch.calories = f64::from(u32::MAX);
        assert_eq!(plan.total_calories(), 2.0 * f64::from(u32::MAX) + 800.0);
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let mut snack = meal("x", 100.0, 1.0, &["Keto"]);
        assert!(snack.has_tag("keto"));
        assert!(snack.has_tag("KETO"));
        snack.dietary_tags.clear();
        assert!(!snack.has_tag("keto"));
    }

    #[test]
    fn test_fractional_macros_deserialize() {
        let json = r#"{
            "id": "m", "name": "Oats", "image": "", "calories": 310.5,
            "protein": 12.5, "carbs": 54.25, "fat": 5.5, "prepTime": 7.5,
            "dietaryTags": ["Vegan"], "ingredients": ["Oats"]
        }"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.protein, 12.5);
        assert_eq!(meal.prep_time, 7.5);
        assert!(meal.has_tag("vegan"));
    }

    #[test]
    fn test_tag_label_defaults_to_regular() {
        let mut plan = plan();
        assert_eq!(plan.tag_label(), "Regular");
        plan.dietary_tags = vec!["vegetarian".to_string(), "keto".to_string()];
        assert_eq!(plan.tag_label(), "vegetarian, keto");
    }

    #[test]
    fn test_goal_parse() {
        assert_eq!("muscle-gain".parse::<Goal>().unwrap(), Goal::MuscleGain);
        assert_eq!("Weight_Loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert!("bulk".parse::<Goal>().is_err());
    }

    #[test]
    fn test_main_meals_order() {
        let plan = plan();
        let names: Vec<&str> = plan.meals.main_meals().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ["breakfast", "lunch", "dinner"]);
        assert!(plan.meals.breakfast.has_tag("vegan"));
    }
}
