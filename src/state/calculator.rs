use crate::bmi::calculate_from_input;
use crate::models::{ActivityLevel, BmiResult, Gender, MeasurementInput, UnitSystem};

/// User actions on the BMI form.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorAction {
    SetUnit(UnitSystem),
    SetGender(Gender),
    SetActivity(ActivityLevel),
    SetHeight(String),
    SetWeight(String),
    SetAge(String),
    Calculate,
    Reset,
}

/// State of the BMI calculator view.
///
/// Transitions go through [`CalculatorState::reduce`], which consumes the old
/// state and returns the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub input: MeasurementInput,
    pub result: Option<BmiResult>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the calculate action is enabled (height, weight and age set).
    pub fn can_calculate(&self) -> bool {
        self.input.is_complete()
    }

    /// Apply one action. Input changes keep the previous result on screen.
    pub fn reduce(self, action: CalculatorAction) -> Self {
        let Self { mut input, result } = self;

        match action {
            CalculatorAction::SetUnit(unit) => input.unit = unit,
            CalculatorAction::SetGender(gender) => input.gender = gender,
            CalculatorAction::SetActivity(activity) => input.activity = activity,
            CalculatorAction::SetHeight(height) => input.height = height,
            CalculatorAction::SetWeight(weight) => input.weight = weight,
            CalculatorAction::SetAge(age) => input.age = age,
            CalculatorAction::Calculate => {
                let result = calculate_from_input(&input);
                return Self {
                    input,
                    result: Some(result),
                };
            }
            CalculatorAction::Reset => return Self::default(),
        }

        Self { input, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BmiCategory;

    fn filled() -> CalculatorState {
        [
            CalculatorAction::SetHeight("180".to_string()),
            CalculatorAction::SetWeight("75".to_string()),
            CalculatorAction::SetAge("30".to_string()),
        ]
        .into_iter()
        .fold(CalculatorState::new(), CalculatorState::reduce)
    }

    #[test]
    fn test_can_calculate_needs_all_fields() {
        let state = CalculatorState::new().reduce(CalculatorAction::SetHeight("180".to_string()));
        assert!(!state.can_calculate());
        assert!(filled().can_calculate());
    }

    #[test]
    fn test_calculate_sets_result() {
        let state = filled().reduce(CalculatorAction::Calculate);
        let result = state.result.unwrap();
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_input_change_keeps_result_until_recalculated() {
        let state = filled().reduce(CalculatorAction::Calculate);
        let before = state.result;

        let state = state.reduce(CalculatorAction::SetWeight("120".to_string()));
        assert_eq!(state.result, before);

        let state = state.reduce(CalculatorAction::Calculate);
        assert_eq!(state.result.unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn test_dead_parameters_do_not_change_result() {
        let base = filled().reduce(CalculatorAction::Calculate).result;
        let other = filled()
            .reduce(CalculatorAction::SetGender(Gender::Female))
            .reduce(CalculatorAction::SetActivity(ActivityLevel::VeryActive))
            .reduce(CalculatorAction::SetAge("80".to_string()))
            .reduce(CalculatorAction::Calculate)
            .result;
        assert_eq!(base, other);
    }

    #[test]
    fn test_reset() {
        let state = filled()
            .reduce(CalculatorAction::Calculate)
            .reduce(CalculatorAction::Reset);
        assert_eq!(state, CalculatorState::default());
    }
}
