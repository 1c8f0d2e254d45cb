//! # Cost Breakdown
//!
//! Computed aggregates produced by
//! [`CostCalculationService`](crate::service::CostCalculationService).
//! Never persisted.
//!
//! ```text
//! RecipeCost "Cake"
//! ├── IngredientCost  Flour   500 G   $5.00
//! ├── IngredientCost  Sugar   200 G   $1.00
//! └── total_cost                      $6.00   (always re-summed, never passed in)
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::id::Id;
use crate::money::Money;
use crate::unit::Unit;
use crate::validation::{validate_name, validate_quantity};

// =============================================================================
// Ingredient Cost
// =============================================================================

/// Cost of one recipe line.
///
/// Uses the snapshot pattern: the ingredient name is frozen at calculation
/// time, and quantity/unit are the recipe line's own (not converted).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCost {
    ingredient_id: Id,
    ingredient_name: String,
    quantity_used: f64,
    unit: Unit,
    cost: Money,
}

impl IngredientCost {
    /// ## Errors
    /// - [`CoreError::InvalidIngredientName`] if the snapshot name is blank
    /// - [`CoreError::InvalidQuantity`] if `quantity_used <= 0`
    pub fn new(
        ingredient_id: Id,
        ingredient_name: impl Into<String>,
        quantity_used: f64,
        unit: Unit,
        cost: Money,
    ) -> CoreResult<Self> {
        let ingredient_name = ingredient_name.into();
        validate_name("ingredient name", &ingredient_name)
            .map_err(|_| CoreError::InvalidIngredientName)?;
        validate_quantity("quantity used", quantity_used)?;

        Ok(IngredientCost {
            ingredient_id,
            ingredient_name,
            quantity_used,
            unit,
            cost,
        })
    }

    pub fn ingredient_id(&self) -> &Id {
        &self.ingredient_id
    }

    pub fn ingredient_name(&self) -> &str {
        &self.ingredient_name
    }

    pub fn quantity_used(&self) -> f64 {
        self.quantity_used
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    /// Field-wise equality with money compared within [`Money::EPSILON`].
    pub fn approx_eq(&self, other: &IngredientCost) -> bool {
        self.ingredient_id == other.ingredient_id
            && self.ingredient_name == other.ingredient_name
            && self.quantity_used == other.quantity_used
            && self.unit == other.unit
            && self.cost.approx_eq(other.cost)
    }
}

impl fmt::Display for IngredientCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {:.2} {} = {}",
            self.ingredient_name, self.ingredient_id, self.quantity_used, self.unit, self.cost
        )
    }
}

// =============================================================================
// Recipe Cost
// =============================================================================

/// Full cost breakdown of a recipe.
///
/// One [`IngredientCost`] per recipe line, same order. `total_cost` is the
/// sequential sum of the line costs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCost {
    recipe_id: Id,
    recipe_name: String,
    ingredient_costs: Vec<IngredientCost>,
    total_cost: Money,
}

impl RecipeCost {
    /// Builds the breakdown and derives the total.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidRecipeName`] if `recipe_name` is blank
    /// - [`CoreError::EmptyRecipe`] if `ingredient_costs` is empty
    /// - [`CoreError::AmountOutOfRange`] if the total overflows
    pub fn new(
        recipe_id: Id,
        recipe_name: impl Into<String>,
        ingredient_costs: Vec<IngredientCost>,
    ) -> CoreResult<Self> {
        let recipe_name = recipe_name.into();
        validate_name("recipe name", &recipe_name).map_err(|_| CoreError::InvalidRecipeName)?;
        if ingredient_costs.is_empty() {
            return Err(CoreError::EmptyRecipe);
        }

        let total_cost = Money::try_sum(ingredient_costs.iter().map(IngredientCost::cost))?;

        Ok(RecipeCost {
            recipe_id,
            recipe_name,
            ingredient_costs,
            total_cost,
        })
    }

    pub fn recipe_id(&self) -> &Id {
        &self.recipe_id
    }

    pub fn recipe_name(&self) -> &str {
        &self.recipe_name
    }

    pub fn ingredient_costs(&self) -> &[IngredientCost] {
        &self.ingredient_costs
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    /// Equality with money compared within [`Money::EPSILON`].
    pub fn approx_eq(&self, other: &RecipeCost) -> bool {
        self.recipe_id == other.recipe_id
            && self.recipe_name == other.recipe_name
            && self.total_cost.approx_eq(other.total_cost)
            && self.ingredient_costs.len() == other.ingredient_costs.len()
            && self
                .ingredient_costs
                .iter()
                .zip(&other.ingredient_costs)
                .all(|(a, b)| a.approx_eq(b))
    }
}

impl fmt::Display for RecipeCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} across {} ingredient(s)",
            self.recipe_name,
            self.recipe_id,
            self.total_cost,
            self.ingredient_costs.len()
        )
    }
}
