//! # Response DTOs
//!
//! Flat, primitive-only shapes for anything that leaves the process: JSON
//! reports, and the generated TypeScript bindings for a UI.
//!
//! Domain types keep their invariants behind private fields; these structs
//! are plain data with public fields and are built only *from* the domain.
//! Money is exposed as its decimal amount, units by registry name.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cost::{IngredientCost, RecipeCost};
use crate::ingredient::Ingredient;
use crate::unit::{Unit, UnitType};

// =============================================================================
// Cost Breakdown
// =============================================================================

/// One priced recipe line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IngredientCostDto {
    pub ingredient_id: String,
    /// Name as it was when the cost was calculated.
    pub ingredient_name: String,
    /// Quantity in the recipe line's own unit.
    pub quantity_used: f64,
    pub unit: String,
    pub cost: f64,
}

impl From<&IngredientCost> for IngredientCostDto {
    fn from(cost: &IngredientCost) -> Self {
        IngredientCostDto {
            ingredient_id: cost.ingredient_id().to_string(),
            ingredient_name: cost.ingredient_name().to_string(),
            quantity_used: cost.quantity_used(),
            unit: cost.unit().name().to_string(),
            cost: cost.cost().amount(),
        }
    }
}

/// Full cost breakdown of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecipeCostDto {
    pub recipe_id: String,
    pub recipe_name: String,
    pub ingredient_costs: Vec<IngredientCostDto>,
    pub total_cost: f64,
}

impl From<&RecipeCost> for RecipeCostDto {
    fn from(cost: &RecipeCost) -> Self {
        RecipeCostDto {
            recipe_id: cost.recipe_id().to_string(),
            recipe_name: cost.recipe_name().to_string(),
            ingredient_costs: cost
                .ingredient_costs()
                .iter()
                .map(IngredientCostDto::from)
                .collect(),
            total_cost: cost.total_cost().amount(),
        }
    }
}

// =============================================================================
// Catalog Entries
// =============================================================================

/// An ingredient with its derived per-base-unit cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IngredientDto {
    pub id: String,
    pub name: String,
    pub package_quantity: f64,
    pub package_price: f64,
    pub package_unit: String,
    /// Price per ML, G or UN. Not rounded.
    pub unit_cost: f64,
}

impl From<&Ingredient> for IngredientDto {
    fn from(ingredient: &Ingredient) -> Self {
        IngredientDto {
            id: ingredient.id().to_string(),
            name: ingredient.name().to_string(),
            package_quantity: ingredient.package_quantity(),
            package_price: ingredient.package_price().amount(),
            package_unit: ingredient.package_unit().name().to_string(),
            unit_cost: ingredient.unit_cost(),
        }
    }
}

/// A registry unit, as listed to users picking a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UnitDto {
    pub name: String,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub factor_to_base: f64,
}

impl From<Unit> for UnitDto {
    fn from(unit: Unit) -> Self {
        UnitDto {
            name: unit.name().to_string(),
            unit_type: unit.unit_type(),
            factor_to_base: unit.factor_to_base(),
        }
    }
}

impl UnitDto {
    /// Every registry unit, in registry order.
    pub fn list_available() -> Vec<UnitDto> {
        Unit::all().iter().copied().map(UnitDto::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;
    use crate::money::Money;

    fn flour() -> Ingredient {
        Ingredient::new(Id::of("flour-1"), "Flour", 1.0, Money::of(5.0).unwrap(), Unit::KG).unwrap()
    }

    #[test]
    fn test_ingredient_dto_carries_unit_cost() {
        let dto = IngredientDto::from(&flour());
        assert_eq!(dto.id, "flour-1");
        assert_eq!(dto.package_price, 5.0);
        assert_eq!(dto.package_unit, "KG");
        assert_eq!(dto.unit_cost, flour().unit_cost());
    }

    #[test]
    fn test_recipe_cost_dto_json_shape() {
        let line = IngredientCost::new(
            Id::of("flour-1"),
            "Flour",
            500.0,
            Unit::G,
            Money::of(2.5).unwrap(),
        )
        .unwrap();
        let cost = RecipeCost::new(Id::of("bread-1"), "Bread", vec![line]).unwrap();

        let json = serde_json::to_value(RecipeCostDto::from(&cost)).unwrap();
        assert_eq!(json["recipeId"], "bread-1");
        assert_eq!(json["recipeName"], "Bread");
        assert_eq!(json["totalCost"], 2.5);
        assert_eq!(json["ingredientCosts"][0]["ingredientName"], "Flour");
        assert_eq!(json["ingredientCosts"][0]["quantityUsed"], 500.0);
        assert_eq!(json["ingredientCosts"][0]["unit"], "G");
        assert_eq!(json["ingredientCosts"][0]["cost"], 2.5);
    }

    #[test]
    fn test_unit_dto_list() {
        let units = UnitDto::list_available();
        assert_eq!(units.len(), Unit::all().len());

        let tbsp_butter = units.iter().find(|u| u.name == "TBSP_BUTTER").unwrap();
        assert_eq!(tbsp_butter.unit_type, UnitType::Weight);
        assert_eq!(tbsp_butter.factor_to_base, 14.0);

        let json = serde_json::to_value(&units[0]).unwrap();
        assert_eq!(json["type"], "VOLUME");
        assert_eq!(json["factorToBase"], 1.0);
    }
}
