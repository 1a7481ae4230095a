use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use fit_planner_rs::error::Result;
use fit_planner_rs::logging;
use fit_planner_rs::meals::Catalog;
use fit_planner_rs::models::MealPlan;
use fit_planner_rs::state::{load_catalog, save_catalog, write_meals_csv};

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Export and check meal plan catalogs")]
struct Args {
    /// Catalog to read (defaults to the built-in catalog)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the catalog as JSON
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write one CSV row per meal
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Check a catalog file for problems instead of exporting
    #[arg(long)]
    check: Option<PathBuf>,
}

/// Problems found in a raw catalog file.
fn check_plans(plans: &[MealPlan]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut ids = HashSet::new();

    for (i, plan) in plans.iter().enumerate() {
        if !ids.insert(plan.id.as_str()) {
            problems.push(format!("plan #{}: duplicate id '{}'", i + 1, plan.id));
        }
        if plan.title.trim().is_empty() {
            problems.push(format!("plan #{} ('{}'): empty title", i + 1, plan.id));
        }
        for meal in plan.meals.all() {
            if meal.name.trim().is_empty() {
                problems.push(format!("plan '{}': meal '{}' has no name", plan.id, meal.id));
            }
        }
    }

    problems
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.check {
        let content = std::fs::read_to_string(path)?;
        let plans: Vec<MealPlan> = serde_json::from_str(&content)?;
        let problems = check_plans(&plans);

        println!("{}: {} plans", path.display(), plans.len());
        if problems.is_empty() {
            println!("No problems found.");
        } else {
            for problem in &problems {
                println!("  - {}", problem);
            }
            std::process::exit(2);
        }
        return Ok(());
    }

    let catalog = match &args.input {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };

    if args.out.is_none() && args.csv.is_none() {
        println!("{}", serde_json::to_string_pretty(catalog.plans())?);
        return Ok(());
    }

    if let Some(path) = &args.out {
        save_catalog(path, catalog.plans())?;
        info!(path = %path.display(), "wrote catalog JSON");
        println!("Wrote {} plans to {}", catalog.len(), path.display());
    }

    if let Some(path) = &args.csv {
        write_meals_csv(path, catalog.plans())?;
        info!(path = %path.display(), "wrote meal CSV");
        println!("Wrote meals CSV to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_planner_rs::meals::sample_catalog;

    #[test]
    fn test_builtin_catalog_is_clean() {
        assert!(check_plans(sample_catalog()).is_empty());
    }

    #[test]
    fn test_check_reports_duplicates_and_blank_titles() {
        let mut plans = sample_catalog().to_vec();
        let mut dup = plans[0].clone();
        dup.title = "  ".to_string();
        plans.push(dup);

        let problems = check_plans(&plans);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("duplicate id '1'"));
        assert!(problems[1].contains("empty title"));
    }
}
