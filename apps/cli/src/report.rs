//! # Report Rendering
//!
//! Text tables for people, JSON for machines. Rendering is pure: callers
//! pass in the timestamp and currency symbol.

use chrono::{DateTime, Utc};
use serde::Serialize;

use costify_core::dto::{IngredientDto, RecipeCostDto, UnitDto};
use costify_core::{Ingredient, Money, RecipeCost, Unit};

/// JSON envelope for recipe cost reports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CostReport {
    generated_at: DateTime<Utc>,
    recipes: Vec<RecipeCostDto>,
}

/// Formats an amount with a caller-chosen symbol (`R$12.34`).
pub fn format_money(money: Money, symbol: &str) -> String {
    let cents = money.cents();
    format!("{}{}.{:02}", symbol, cents / 100, cents % 100)
}

// =============================================================================
// Recipe Costs
// =============================================================================

/// One table per recipe, separated by a blank line.
///
/// ```text
/// Cake (cake)
///   Ingredient                 Quantity  Unit               Cost
///   Flour                        500.00  G                 $5.00
///   Sugar                        200.00  G                 $1.00
///   Total                                                  $6.00
/// ```
pub fn render_text(costs: &[RecipeCost], symbol: &str) -> String {
    let mut out = String::new();

    for (i, cost) in costs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} ({})\n", cost.recipe_name(), cost.recipe_id()));
        out.push_str(&format!(
            "  {:<24} {:>10}  {:<12} {:>12}\n",
            "Ingredient", "Quantity", "Unit", "Cost"
        ));
        for line in cost.ingredient_costs() {
            out.push_str(&format!(
                "  {:<24} {:>10.2}  {:<12} {:>12}\n",
                line.ingredient_name(),
                line.quantity_used(),
                line.unit().name(),
                format_money(line.cost(), symbol)
            ));
        }
        out.push_str(&format!(
            "  {:<24} {:>10}  {:<12} {:>12}\n",
            "Total",
            "",
            "",
            format_money(cost.total_cost(), symbol)
        ));
    }

    out
}

pub fn render_json(
    costs: &[RecipeCost],
    generated_at: DateTime<Utc>,
) -> serde_json::Result<String> {
    let report = CostReport {
        generated_at,
        recipes: costs.iter().map(RecipeCostDto::from).collect(),
    };
    serde_json::to_string_pretty(&report)
}

// =============================================================================
// Listings
// =============================================================================

pub fn render_units_text(units: &[Unit]) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {:<12} {:<8} {:>12}\n", "Unit", "Type", "Base factor"));
    for unit in units {
        out.push_str(&format!(
            "  {:<12} {:<8} {:>12}  ({})\n",
            unit.name(),
            format!("{:?}", unit.unit_type()),
            unit.factor_to_base(),
            unit.unit_type().base_unit()
        ));
    }
    out
}

pub fn render_units_json(units: &[Unit]) -> serde_json::Result<String> {
    let dtos: Vec<UnitDto> = units.iter().copied().map(UnitDto::from).collect();
    serde_json::to_string_pretty(&dtos)
}

/// Ingredients sorted by name.
pub fn render_ingredients_text<'a, I>(ingredients: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    let mut sorted: Vec<&Ingredient> = ingredients.into_iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<24} {:>14} {:>12} {:>14}\n",
        "Ingredient", "Package", "Price", "Per base unit"
    ));
    for ingredient in sorted {
        let package = format!(
            "{} {}",
            ingredient.package_quantity(),
            ingredient.package_unit()
        );
        let per_base = format!(
            "{:.4}/{}",
            ingredient.unit_cost(),
            ingredient.package_unit().unit_type().base_unit()
        );
        out.push_str(&format!(
            "  {:<24} {:>14} {:>12} {:>14}\n",
            ingredient.name(),
            package,
            format_money(ingredient.package_price(), symbol),
            per_base
        ));
    }
    out
}

/// Ingredients sorted by name.
pub fn render_ingredients_json<'a, I>(ingredients: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    let mut dtos: Vec<IngredientDto> = ingredients.into_iter().map(IngredientDto::from).collect();
    dtos.sort_by(|a, b| a.name.cmp(&b.name));
    serde_json::to_string_pretty(&dtos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use costify_core::{Id, IngredientCost};

    fn cake_cost() -> RecipeCost {
        let lines = vec![
            IngredientCost::new(Id::of("flour"), "Flour", 500.0, Unit::G, Money::of(5.0).unwrap())
                .unwrap(),
            IngredientCost::new(Id::of("sugar"), "Sugar", 200.0, Unit::G, Money::of(1.0).unwrap())
                .unwrap(),
        ];
        RecipeCost::new(Id::of("cake"), "Cake", lines).unwrap()
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Money::of(6.0).unwrap(), "$"), "$6.00");
        assert_eq!(format_money(Money::of(1234.5).unwrap(), "R$"), "R$1234.50");
        assert_eq!(format_money(Money::zero(), "€"), "€0.00");
    }

    #[test]
    fn test_render_text_table() {
        let text = render_text(&[cake_cost()], "$");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Cake (cake)");
        assert!(lines[2].starts_with("  Flour"));
        assert!(lines[2].contains("500.00"));
        assert!(lines[2].trim_end().ends_with("$5.00"));
        assert!(lines[3].trim_end().ends_with("$1.00"));
        assert!(lines[4].starts_with("  Total"));
        assert!(lines[4].trim_end().ends_with("$6.00"));
        assert_eq!(lines.len(), 5);
        assert!(text.ends_with("$6.00\n"));
    }

    #[test]
    fn test_render_text_separates_recipes() {
        let text = render_text(&[cake_cost(), cake_cost()], "$");
        assert_eq!(text.matches("Cake (cake)").count(), 2);
        assert!(text.contains("\n\nCake (cake)"));
    }

    #[test]
    fn test_render_json_envelope() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&[cake_cost()], at).unwrap()).unwrap();

        assert_eq!(json["generatedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["recipes"][0]["recipeName"], "Cake");
        assert_eq!(json["recipes"][0]["totalCost"], 6.0);
        assert_eq!(
            json["recipes"][0]["ingredientCosts"].as_array().unwrap().len(),
            2
        );
    }

    #[test]
    fn test_render_units() {
        let text = render_units_text(Unit::all());
        assert!(text.contains("TBSP_BUTTER"));
        assert_eq!(text.lines().count(), Unit::all().len() + 1);

        let json: serde_json::Value =
            serde_json::from_str(&render_units_json(Unit::all()).unwrap()).unwrap();
        assert_eq!(json[1]["name"], "L");
        assert_eq!(json[1]["factorToBase"], 1000.0);
    }

    #[test]
    fn test_render_ingredients_sorted() {
        let sugar =
            Ingredient::new(Id::of("s"), "Sugar", 1.0, Money::of(5.0).unwrap(), Unit::KG).unwrap();
        let flour =
            Ingredient::new(Id::of("f"), "Flour", 1.0, Money::of(10.0).unwrap(), Unit::KG).unwrap();

        let text = render_ingredients_text([&sugar, &flour], "$");
        let flour_at = text.find("Flour").unwrap();
        let sugar_at = text.find("Sugar").unwrap();
        assert!(flour_at < sugar_at);
        assert!(text.contains("0.0100/G"));
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));

        let json: serde_json::Value =
            serde_json::from_str(&render_ingredients_json([&sugar, &flour]).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "Flour");
        assert_eq!(json[0]["unitCost"], 0.01);
    }
}
