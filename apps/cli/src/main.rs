//! # Costify CLI
//!
//! Prices the recipes of a JSON catalog.
//!
//! ## Usage
//! ```bash
//! # Price every recipe in ./catalog.json
//! cargo run -p costify-cli
//!
//! # One recipe, as JSON
//! cargo run -p costify-cli -- --catalog ./bakery.json --recipe Cake --output json
//!
//! # List units or ingredients
//! cargo run -p costify-cli -- units
//! cargo run -p costify-cli -- ingredients -c ./bakery.json
//! ```
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. CliConfig::from_env + args ──► Invocation (Run / Help)              │
//! │  2. init_tracing (stderr, RUST_LOG / COSTIFY_LOG)                       │
//! │  3. catalog::load ──► IngredientCatalog + Vec<Recipe>                   │
//! │  4. per recipe: resolve ──► CostCalculationService::recalculate         │
//! │  5. report::render_* ──► stdout                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exit codes: `0` success, `1` catalog or cost error, `2` bad configuration.

mod catalog;
mod config;
mod report;

use anyhow::{bail, Context};
use chrono::Utc;
use std::env;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use costify_core::{CostCalculationService, CoreError, Recipe, RecipeCost, Unit, UuidGenerator};

use crate::catalog::{CatalogError, LoadedCatalog};
use crate::config::{CliConfig, Command, Invocation, OutputFormat, DEFAULT_LOG_FILTER};

fn main() -> ExitCode {
    let invocation = match CliConfig::from_env().and_then(|config| config.with_args(env::args().skip(1))) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    let config = match invocation {
        Invocation::Help => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Invocation::Run(config) => config,
    };

    init_tracing(&config.log_filter);

    match run(&config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = error_code(&e);
            error!(code, error = %e, "Command failed");
            eprintln!("error [{}]: {:#}", code, e);
            ExitCode::FAILURE
        }
    }
}

/// Executes the configured command and returns what to print.
fn run(config: &CliConfig) -> anyhow::Result<String> {
    if config.command == Command::Units {
        return render_units(config);
    }

    let loaded = catalog::load(&config.catalog_path, &UuidGenerator)
        .with_context(|| format!("loading {}", config.catalog_path.display()))?;

    match config.command {
        Command::Ingredients => render_ingredients(config, &loaded),
        _ => {
            let costs = price_recipes(loaded, config.recipe.as_deref())?;
            let rendered = match config.output {
                OutputFormat::Text => report::render_text(&costs, &config.currency_symbol),
                OutputFormat::Json => report::render_json(&costs, Utc::now())? + "\n",
            };
            Ok(rendered)
        }
    }
}

/// Prices every recipe, or only the one matching `selector` by id or name.
fn price_recipes(loaded: LoadedCatalog, selector: Option<&str>) -> anyhow::Result<Vec<RecipeCost>> {
    let LoadedCatalog {
        ingredients,
        recipes,
    } = loaded;

    let mut selected: Vec<Recipe> = match selector {
        Some(wanted) => recipes
            .into_iter()
            .filter(|r| r.id().value() == wanted || r.name() == wanted)
            .collect(),
        None => recipes,
    };

    if selected.is_empty() {
        match selector {
            Some(wanted) => bail!("No recipe with id or name '{}'", wanted),
            None => info!("Catalog has no recipes"),
        }
    }

    let service = CostCalculationService::new();
    let mut costs = Vec::with_capacity(selected.len());

    for recipe in &mut selected {
        let resolved = ingredients
            .resolve(recipe)
            .with_context(|| format!("recipe '{}'", recipe.name()))?;
        let cost = service
            .recalculate(recipe, &resolved)
            .with_context(|| format!("recipe '{}'", recipe.name()))?;

        info!(
            recipe_id = %recipe.id(),
            total = %recipe.total_cost(),
            "Recipe priced"
        );
        costs.push(cost);
    }

    Ok(costs)
}

fn render_units(config: &CliConfig) -> anyhow::Result<String> {
    Ok(match config.output {
        OutputFormat::Text => report::render_units_text(Unit::all()),
        OutputFormat::Json => report::render_units_json(Unit::all())? + "\n",
    })
}

fn render_ingredients(config: &CliConfig, loaded: &LoadedCatalog) -> anyhow::Result<String> {
    Ok(match config.output {
        OutputFormat::Text => {
            report::render_ingredients_text(loaded.ingredients.iter(), &config.currency_symbol)
        }
        OutputFormat::Json => report::render_ingredients_json(loaded.ingredients.iter())? + "\n",
    })
}

/// Stable code for the first domain error in the chain.
fn error_code(error: &anyhow::Error) -> &'static str {
    error
        .chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<CoreError>()
                .or_else(|| cause.downcast_ref::<CatalogError>().and_then(CatalogError::core_error))
        })
        .map(CoreError::code)
        .unwrap_or("CLI_ERROR")
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for reports.
///
/// ## Log Levels
/// - `COSTIFY_LOG=info` - One line per priced recipe
/// - `COSTIFY_LOG=costify_core=trace` - Every priced line
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn print_help() {
    println!("Costify - recipe cost calculator");
    println!();
    println!("Usage: costify [COMMAND] [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  cost           Price recipes from the catalog (default)");
    println!("  units          List available units");
    println!("  ingredients    List catalog ingredients with their unit cost");
    println!();
    println!("Options:");
    println!("  -c, --catalog <PATH>   Catalog file (default: catalog.json, env: COSTIFY_CATALOG)");
    println!("  -o, --output <FORMAT>  text or json (default: text, env: COSTIFY_OUTPUT)");
    println!("  -r, --recipe <ID|NAME> Only price this recipe");
    println!("  -h, --help             Show this help message");
    println!();
    println!("Environment:");
    println!("  COSTIFY_LOG              Log filter, e.g. info or costify_core=trace");
    println!("  COSTIFY_CURRENCY_SYMBOL  Prefix for amounts in text output (default: $)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use costify_core::SequentialIdGenerator;

    const CATALOG: &str = r#"{
        "ingredients": [
            { "id": "flour", "name": "Flour", "packageQuantity": 1, "packagePrice": 10.0, "packageUnit": "KG" },
            { "id": "sugar", "name": "Sugar", "packageQuantity": 1, "packagePrice": 5.0, "packageUnit": "KG" },
            { "id": "milk", "name": "Milk", "packageQuantity": 1, "packagePrice": 4.5, "packageUnit": "L" }
        ],
        "recipes": [
            { "id": "cake", "name": "Cake", "ingredients": [
                { "ingredientId": "flour", "quantity": 500, "unit": "G" },
                { "ingredientId": "sugar", "quantity": 200, "unit": "G" }
            ] },
            { "id": "bread", "name": "Bread", "ingredients": [
                { "ingredientId": "flour", "quantity": 0.5, "unit": "KG" }
            ] }
        ]
    }"#;

    fn loaded(json: &str) -> LoadedCatalog {
        catalog::parse(json, &SequentialIdGenerator::new("t")).unwrap()
    }

    #[test]
    fn test_price_all_recipes() {
        let costs = price_recipes(loaded(CATALOG), None).unwrap();
        assert_eq!(costs.len(), 2);
        assert_eq!(costs[0].total_cost().amount(), 6.0);
        assert_eq!(costs[1].total_cost().amount(), 5.0);
    }

    #[test]
    fn test_price_selected_by_name_or_id() {
        let by_name = price_recipes(loaded(CATALOG), Some("Bread")).unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].recipe_name(), "Bread");

        let by_id = price_recipes(loaded(CATALOG), Some("cake")).unwrap();
        assert_eq!(by_id[0].recipe_name(), "Cake");
    }

    #[test]
    fn test_unknown_selection_fails() {
        let err = price_recipes(loaded(CATALOG), Some("Pie")).unwrap_err();
        assert!(err.to_string().contains("Pie"));
        assert_eq!(error_code(&err), "CLI_ERROR");
    }

    #[test]
    fn test_missing_ingredient_reports_core_code() {
        let json = r#"{
            "ingredients": [],
            "recipes": [{ "name": "Toast", "ingredients": [{ "ingredientId": "bread", "quantity": 1, "unit": "UN" }] }]
        }"#;
        let err = price_recipes(loaded(json), None).unwrap_err();
        assert_eq!(error_code(&err), "INGREDIENT_NOT_FOUND");
        assert!(format!("{:#}", err).contains("Toast"));
    }

    #[test]
    fn test_incompatible_units_reports_core_code() {
        let json = r#"{
            "ingredients": [{ "id": "milk", "name": "Milk", "packageQuantity": 1, "packagePrice": 4.5, "packageUnit": "L" }],
            "recipes": [{ "name": "Custard", "ingredients": [{ "ingredientId": "milk", "quantity": 100, "unit": "G" }] }]
        }"#;
        let err = price_recipes(loaded(json), None).unwrap_err();
        assert_eq!(error_code(&err), "INCOMPATIBLE_UNITS");
    }

    #[test]
    fn test_catalog_error_code_passes_through() {
        let err = anyhow::Error::new(
            catalog::parse(
                r#"{ "recipes": [{ "name": "Air", "ingredients": [] }] }"#,
                &SequentialIdGenerator::new("t"),
            )
            .unwrap_err(),
        );
        assert_eq!(error_code(&err), "EMPTY_RECIPE");
    }

    #[test]
    fn test_empty_catalog_prices_nothing() {
        let costs = price_recipes(loaded("{}"), None).unwrap();
        assert!(costs.is_empty());
    }
}
