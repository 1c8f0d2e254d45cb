//! # Cost Calculation Service
//!
//! Turns a recipe plus its resolved ingredients into a [`RecipeCost`].
//!
//! ## Algorithm (per recipe line, in stored order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line: 500 G of "flour"                                                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  1. look up "flour" in the map ──── missing? ──► IngredientNotFound     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  2. line unit type == package unit type? ── no ─► IncompatibleUnits     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  3. unit_cost = package price / package quantity in base units          │
//! │     │           ($10.00 / 1000 G = 0.01)                                │
//! │     ▼                                                                   │
//! │  4. base_qty  = line unit.to_base(line quantity)    (500 G)             │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  5. line cost = Money::of(unit_cost × base_qty)     ($5.00)             │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  6. IngredientCost snapshot (name, original qty + unit, cost)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//!          │
//!          ▼
//!   RecipeCost::new(...) re-validates non-empty and sums the lines
//! ```
//!
//! Any failure aborts the whole calculation: there is no partial result.
//! The service holds no state, so one instance can be shared freely across
//! threads and repeated calls on the same inputs return equal results.

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::cost::{IngredientCost, RecipeCost};
use crate::error::{CoreError, CoreResult};
use crate::id::Id;
use crate::ingredient::Ingredient;
use crate::money::Money;
use crate::recipe::{Recipe, RecipeIngredient};

/// Stateless recipe cost calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct CostCalculationService;

impl CostCalculationService {
    pub fn new() -> Self {
        CostCalculationService
    }

    /// Computes the full cost breakdown of `recipe`.
    ///
    /// `ingredients` must hold every id the recipe references; the service
    /// never fetches anything itself. The map is only borrowed for the call.
    ///
    /// ## Errors
    /// - [`CoreError::IngredientNotFound`] for the first unresolved line
    /// - [`CoreError::IncompatibleUnits`] if a line's unit type differs from
    ///   its ingredient's package unit type
    /// - any [`Money`] error raised while pricing a line
    ///
    /// ## Example
    /// ```rust
    /// use std::collections::HashMap;
    /// use costify_core::{CostCalculationService, Id, Ingredient, Money, Recipe, RecipeIngredient, Unit};
    ///
    /// let flour = Ingredient::new(Id::of("flour"), "Flour", 1.0, Money::of(10.0)?, Unit::KG)?;
    /// let recipe = Recipe::new(
    ///     Id::of("bread"),
    ///     "Bread",
    ///     vec![RecipeIngredient::new(Id::of("flour"), 500.0, Unit::G)?],
    ///     Money::zero(),
    /// )?;
    ///
    /// let ingredients = HashMap::from([(flour.id().clone(), flour)]);
    /// let cost = CostCalculationService::new().calculate_cost(&recipe, &ingredients)?;
    /// assert_eq!(cost.total_cost().amount(), 5.0);
    /// # Ok::<(), costify_core::CoreError>(())
    /// ```
    pub fn calculate_cost(
        &self,
        recipe: &Recipe,
        ingredients: &HashMap<Id, Ingredient>,
    ) -> CoreResult<RecipeCost> {
        debug!(
            recipe_id = %recipe.id(),
            lines = recipe.ingredients().len(),
            resolved = ingredients.len(),
            "Calculating recipe cost"
        );

        let ingredient_costs = recipe
            .ingredients()
            .iter()
            .map(|line| {
                let ingredient = ingredients
                    .get(line.ingredient_id())
                    .ok_or_else(|| CoreError::IngredientNotFound(line.ingredient_id().to_string()))?;
                self.price_line(ingredient, line)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let cost = RecipeCost::new(recipe.id().clone(), recipe.name(), ingredient_costs)?;

        debug!(
            recipe_id = %recipe.id(),
            total = %cost.total_cost(),
            "Recipe cost calculated"
        );

        Ok(cost)
    }

    /// Computes the breakdown and stores its total on `recipe`.
    ///
    /// On error the recipe keeps its previous total.
    pub fn recalculate(
        &self,
        recipe: &mut Recipe,
        ingredients: &HashMap<Id, Ingredient>,
    ) -> CoreResult<RecipeCost> {
        let cost = self.calculate_cost(recipe, ingredients)?;
        recipe.update_total_cost(&cost)?;
        Ok(cost)
    }

    /// Prices a single recipe line against its resolved ingredient.
    fn price_line(
        &self,
        ingredient: &Ingredient,
        line: &RecipeIngredient,
    ) -> CoreResult<IngredientCost> {
        let package_unit = ingredient.package_unit();
        if !line.unit().is_compatible_with(&package_unit) {
            return Err(CoreError::IncompatibleUnits {
                ingredient_id: ingredient.id().to_string(),
                line_unit: line.unit().name().to_string(),
                line_type: line.unit().unit_type(),
                package_unit: package_unit.name().to_string(),
                package_type: package_unit.unit_type(),
            });
        }

        let unit_cost = ingredient.unit_cost();
        let base_quantity = line.base_quantity();
        let cost = Money::of(unit_cost * base_quantity)?;

        trace!(
            ingredient_id = %ingredient.id(),
            unit_cost,
            base_quantity,
            cost = %cost,
            "Priced recipe line"
        );

        IngredientCost::new(
            ingredient.id().clone(),
            ingredient.name(),
            line.quantity(),
            line.unit(),
            cost,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
