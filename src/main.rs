use clap::Parser;
use tracing::info;

use fit_planner_rs::bmi::{calculate_bmi_checked, calculate_from_input};
use fit_planner_rs::cli::{Cli, Command};
use fit_planner_rs::error::Result;
use fit_planner_rs::interface::{
    display_bmi_result, display_plan_detail, display_plan_grid, prompt_diet, prompt_goal,
    prompt_plan_by_name, prompt_plan_choice, prompt_search, prompt_yes_no, run_calculator_form,
};
use fit_planner_rs::logging;
use fit_planner_rs::meals::{filter_plans, Catalog, PlanFilter};
use fit_planner_rs::models::MeasurementInput;
use fit_planner_rs::state::{load_catalog, BrowserAction, BrowserState, CalculatorState};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };

    match cli.command.unwrap_or_default() {
        Command::Bmi {
            unit,
            height,
            weight,
            age,
            gender,
            activity,
            lenient,
            json,
        } => {
            let input = MeasurementInput {
                unit,
                gender,
                activity,
                height,
                weight,
                age: age.unwrap_or_default(),
            };
            cmd_bmi(&input, lenient, json)
        }
        Command::Plans {
            search,
            diet,
            goal,
            json,
        } => cmd_plans(&catalog, PlanFilter { search, diet, goal }, json),
        Command::Show { plan } => cmd_show(&catalog, &plan),
        Command::Interactive => cmd_interactive(&catalog),
    }
}

/// Calculate and print a BMI result.
fn cmd_bmi(input: &MeasurementInput, lenient: bool, json: bool) -> Result<()> {
    // Recorded with the request but not part of the calculation.
    info!(gender = %input.gender, activity = %input.activity, age = %input.age, "bmi request");

    let result = if lenient {
        calculate_from_input(input)
    } else {
        calculate_bmi_checked(input.unit, &input.height, &input.weight)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_bmi_result(&result, input.unit);
    }

    Ok(())
}

/// Print the filtered plan grid.
fn cmd_plans(catalog: &Catalog, filter: PlanFilter, json: bool) -> Result<()> {
    let plans = filter_plans(catalog.plans(), &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        display_plan_grid(&plans);
    }

    Ok(())
}

/// Print one plan in detail.
fn cmd_show(catalog: &Catalog, query: &str) -> Result<()> {
    let plan = catalog.find(query)?;
    display_plan_detail(plan);
    Ok(())
}

/// BMI form, then an optional browse through the catalog.
fn cmd_interactive(catalog: &Catalog) -> Result<()> {
    let calculator = run_calculator_form(CalculatorState::new())?;
    if let Some(result) = &calculator.result {
        display_bmi_result(result, calculator.input.unit);
    }

    if !prompt_yes_no("Browse meal plans?", true)? {
        return Ok(());
    }

    let mut browser = BrowserState::new()
        .reduce(BrowserAction::SetSearch(prompt_search()?))
        .reduce(BrowserAction::SetDiet(prompt_diet()?))
        .reduce(BrowserAction::SetGoal(prompt_goal()?));

    loop {
        let visible = browser.visible(catalog);
        display_plan_grid(&visible);

        let chosen = if visible.is_empty() && !browser.filter.search.is_empty() {
            // Nothing contains the search text; offer the closest titles instead.
            prompt_plan_by_name(catalog, &browser.filter.search)?
        } else {
            prompt_plan_choice(&visible)?
        };

        if let Some(plan) = chosen {
            browser = browser.reduce(BrowserAction::Select(plan.id.clone()));
            if let Some(plan) = browser.selected_plan(catalog) {
                display_plan_detail(plan);
            }
            browser = browser.reduce(BrowserAction::CloseDetail);
        }

        if !prompt_yes_no("Change filters?", false)? {
            break;
        }

        browser = browser
            .reduce(BrowserAction::SetSearch(prompt_search()?))
            .reduce(BrowserAction::SetDiet(prompt_diet()?))
            .reduce(BrowserAction::SetGoal(prompt_goal()?));
    }

    Ok(())
}
