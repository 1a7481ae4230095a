pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_diet, prompt_goal, prompt_plan_by_name, prompt_plan_choice, prompt_search,
    prompt_yes_no, run_calculator_form,
};
pub use render::{bmi_gauge, display_bmi_result, display_plan_detail, display_plan_grid};
