use crate::meals::{filter_plans, Catalog, DietSelector, GoalSelector, PlanFilter};
use crate::models::MealPlan;

/// User actions on the meal plan browser.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserAction {
    SetSearch(String),
    SetDiet(DietSelector),
    SetGoal(GoalSelector),
    Select(String),
    CloseDetail,
}

/// State of the meal plan browser: the filter plus the plan open in detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub filter: PlanFilter,
    pub selected: Option<String>,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, action: BrowserAction) -> Self {
        let Self {
            mut filter,
            mut selected,
        } = self;

        match action {
            BrowserAction::SetSearch(search) => filter.search = search,
            BrowserAction::SetDiet(diet) => filter.diet = diet,
            BrowserAction::SetGoal(goal) => filter.goal = goal,
            BrowserAction::Select(id) => selected = Some(id),
            BrowserAction::CloseDetail => selected = None,
        }

        Self { filter, selected }
    }

    /// Plans shown in the grid, recomputed from scratch.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MealPlan> {
        filter_plans(catalog.plans(), &self.filter)
    }

    /// The plan open in the detail view, if its id is in the catalog.
    pub fn selected_plan<'a>(&self, catalog: &'a Catalog) -> Option<&'a MealPlan> {
        self.selected.as_deref().and_then(|id| catalog.get(id))
    }
}
