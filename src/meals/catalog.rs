use std::sync::LazyLock;

use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{FitError, Result};
use crate::models::{Goal, Meal, MealPlan, PlanMeals};

/// Minimum Jaro-Winkler similarity for a fuzzy title match.
const TITLE_MATCH_THRESHOLD: f64 = 0.7;

const UNSPLASH: &str = "https://images.unsplash.com";
const IMAGE_PARAMS: &str = "?auto=format&fit=crop&q=80";

fn image(photo: &str) -> String {
    format!("{}/{}{}", UNSPLASH, photo, IMAGE_PARAMS)
}

fn meal(
    id: &str,
    name: &str,
    photo: &str,
    (calories, protein, carbs, fat): (f64, f64, f64, f64),
    prep_time: f64,
    tags: &[&str],
    ingredients: &[&str],
) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        image: image(photo),
        calories,
        protein,
        carbs,
        fat,
        prep_time,
        dietary_tags: tags.iter().map(|t| t.to_string()).collect(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
    }
}

static SAMPLE_CATALOG: LazyLock<Vec<MealPlan>> = LazyLock::new(|| {
    vec![
        MealPlan {
            id: "1".to_string(),
            title: "Weight Loss Essentials".to_string(),
            description: "A balanced, calorie-controlled plan for sustainable weight loss"
                .to_string(),
            goal: Goal::WeightLoss,
            calories: 1500.0,
            image: image("photo-1490645935967-10de6ba17061"),
            dietary_tags: vec!["vegetarian".to_string()],
            meals: PlanMeals {
                breakfast: meal(
                    "b1",
                    "Greek Yogurt Parfait",
                    "photo-1488477181946-6428a0291777",
                    (300.0, 20.0, 30.0, 10.0),
                    10.0,
                    &["vegetarian"],
                    &["Greek yogurt", "Mixed berries", "Granola", "Honey"],
                ),
                lunch: meal(
                    "l1",
                    "Mediterranean Quinoa Bowl",
                    "photo-1512621776951-a57141f2eefd",
                    (400.0, 15.0, 45.0, 15.0),
                    20.0,
                    &["vegetarian", "vegan"],
                    &["Quinoa", "Chickpeas", "Cucumber", "Tomatoes", "Olive oil"],
                ),
                dinner: meal(
                    "d1",
                    "Grilled Salmon with Vegetables",
                    "photo-1467003909585-2f8a72700288",
                    (500.0, 35.0, 20.0, 25.0),
                    30.0,
                    &[],
                    &["Salmon fillet", "Asparagus", "Sweet potato", "Lemon"],
                ),
                snacks: vec![meal(
                    "s1",
                    "Apple with Almond Butter",
                    "photo-1568702846914-96b305d2aaeb",
                    (150.0, 5.0, 20.0, 8.0),
                    5.0,
                    &["vegetarian", "vegan"],
                    &["Apple", "Almond butter"],
                )],
            },
        },
        MealPlan {
            id: "2".to_string(),
            title: "Muscle Builder Pro".to_string(),
            description: "High-protein meals designed for muscle growth and recovery"
                .to_string(),
            goal: Goal::MuscleGain,
            calories: 3000.0,
            image: image("photo-1547496502-affa22d38842"),
            dietary_tags: Vec::new(),
            meals: PlanMeals {
                breakfast: meal(
                    "b2",
                    "Protein Oatmeal Bowl",
                    "photo-1517673132405-a56a62b18caf",
                    (600.0, 40.0, 70.0, 15.0),
                    15.0,
                    &["vegetarian"],
                    &["Oats", "Protein powder", "Banana", "Peanut butter"],
                ),
                lunch: meal(
                    "l2",
                    "Chicken Rice Bowl",
                    "photo-1604908176997-125f25cc6f3d",
                    (800.0, 50.0, 90.0, 20.0),
                    25.0,
                    &[],
                    &["Chicken breast", "Brown rice", "Broccoli", "Avocado"],
                ),
                dinner: meal(
                    "d2",
                    "Steak with Sweet Potato",
                    "photo-1544025162-d76694265947",
                    (900.0, 60.0, 60.0, 35.0),
                    35.0,
                    &[],
                    &["Ribeye steak", "Sweet potato", "Spinach", "Olive oil"],
                ),
                snacks: vec![meal(
                    "s2",
                    "Protein Smoothie",
                    "photo-1553530666-ba11a7da3888",
                    (300.0, 25.0, 30.0, 10.0),
                    5.0,
                    &["vegetarian"],
                    &["Protein powder", "Banana", "Almond milk", "Berries"],
                )],
            },
        },
    ]
});

/// The built-in catalog.
pub fn sample_catalog() -> &'static [MealPlan] {
    &SAMPLE_CATALOG
}

/// Read-only collection of meal plans in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    plans: Vec<MealPlan>,
}

impl Catalog {
    pub fn new(plans: Vec<MealPlan>) -> Self {
        Self { plans }
    }

    /// A copy of the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(sample_catalog().to_vec())
    }

    pub fn plans(&self) -> &[MealPlan] {
        &self.plans
    }

    /// Look up a plan by id.
    pub fn get(&self, id: &str) -> Option<&MealPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Resolve a user-supplied id or title.
    ///
    /// Tries the id, then a case-insensitive exact title, then the closest
    /// fuzzy title above the similarity threshold.
    pub fn find(&self, query: &str) -> Result<&MealPlan> {
        if let Some(plan) = self.get(query) {
            return Ok(plan);
        }

        let needle = query.trim().to_lowercase();
        if let Some(plan) = self.plans.iter().find(|p| p.title.to_lowercase() == needle) {
            return Ok(plan);
        }

        let candidates = self.fuzzy_titles(query);
        match candidates.first() {
            Some((plan, score)) => {
                debug!(query, title = %plan.title, score, "fuzzy plan match");
                Ok(*plan)
            }
            None => Err(FitError::PlanNotFound(query.to_string())),
        }
    }

    /// Plans whose titles resemble `query`, best match first.
    pub fn fuzzy_titles(&self, query: &str) -> Vec<(&MealPlan, f64)> {
        let needle = query.trim().to_lowercase();
        let mut candidates: Vec<(&MealPlan, f64)> = self
            .plans
            .iter()
            .map(|p| (p, jaro_winkler(&p.title.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > TITLE_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
