//! # Recipe
//!
//! A named, ordered list of recipe lines plus the last computed total cost.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Recipe::create(lines, Money::ZERO)                                     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CostCalculationService::recalculate(&mut recipe, &ingredients)         │
//! │        │   (computes RecipeCost, stores total_cost)                     │
//! │        ▼                                                                │
//! │  add_ingredient / remove_ingredient ──► total_cost is now STALE         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  recalculate again                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `total_cost` is a cached value. The line mutators do not touch it;
//! [`Recipe::update_total_cost`] or
//! [`crate::service::CostCalculationService::recalculate`] bring it back in
//! line.

use serde::Serialize;

use crate::cost::RecipeCost;
use crate::error::{CoreError, CoreResult};
use crate::id::{Id, IdGenerator};
use crate::money::Money;
use crate::unit::Unit;
use crate::validation::{validate_name, validate_quantity};

// =============================================================================
// Recipe Ingredient
// =============================================================================

/// One recipe line: how much of which ingredient, in which unit.
///
/// The ingredient reference is weak. Resolving it is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    ingredient_id: Id,
    quantity: f64,
    unit: Unit,
}

impl RecipeIngredient {
    /// ## Errors
    /// [`CoreError::InvalidQuantity`] if `quantity <= 0`.
    pub fn new(ingredient_id: Id, quantity: f64, unit: Unit) -> CoreResult<Self> {
        validate_quantity("quantity", quantity)?;
        Ok(RecipeIngredient {
            ingredient_id,
            quantity,
            unit,
        })
    }

    pub fn ingredient_id(&self) -> &Id {
        &self.ingredient_id
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Quantity expressed in the base unit of this line's unit type.
    pub fn base_quantity(&self) -> f64 {
        self.unit.to_base(self.quantity)
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// A recipe. Never has zero lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    id: Id,
    name: String,
    ingredients: Vec<RecipeIngredient>,
    total_cost: Money,
}

impl Recipe {
    /// Rebuilds a recipe with a known id.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidRecipeName`] if `name` is blank
    /// - [`CoreError::EmptyRecipe`] if `ingredients` is empty
    pub fn new(
        id: Id,
        name: impl Into<String>,
        ingredients: Vec<RecipeIngredient>,
        total_cost: Money,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_recipe(&name, &ingredients)?;

        Ok(Recipe {
            id,
            name,
            ingredients,
            total_cost,
        })
    }

    /// Creates a new recipe with an id from `generator`.
    pub fn create(
        generator: &dyn IdGenerator,
        name: impl Into<String>,
        ingredients: Vec<RecipeIngredient>,
        total_cost: Money,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_recipe(&name, &ingredients)?;

        Recipe::new(Id::generate(generator), name, ingredients, total_cost)
    }

    /// Appends a line. Does NOT recompute `total_cost`.
    pub fn add_ingredient(&mut self, ingredient: RecipeIngredient) {
        self.ingredients.push(ingredient);
    }

    /// Drops every line that references `ingredient_id`.
    /// Does NOT recompute `total_cost`.
    ///
    /// ## Errors
    /// [`CoreError::EmptyRecipe`] if nothing would remain. The recipe is left
    /// untouched in that case.
    pub fn remove_ingredient(&mut self, ingredient_id: &Id) -> CoreResult<()> {
        let remaining: Vec<RecipeIngredient> = self
            .ingredients
            .iter()
            .filter(|line| line.ingredient_id() != ingredient_id)
            .cloned()
            .collect();

        if remaining.is_empty() {
            return Err(CoreError::EmptyRecipe);
        }

        self.ingredients = remaining;
        Ok(())
    }

    /// Replaces every line at once.
    ///
    /// ## Errors
    /// [`CoreError::EmptyRecipe`] if `ingredients` is empty.
    pub fn replace_ingredients(&mut self, ingredients: Vec<RecipeIngredient>) -> CoreResult<()> {
        if ingredients.is_empty() {
            return Err(CoreError::EmptyRecipe);
        }
        self.ingredients = ingredients;
        Ok(())
    }

    /// ## Errors
    /// [`CoreError::InvalidRecipeName`] if `name` is blank.
    pub fn rename(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_name("recipe name", &name).map_err(|_| CoreError::InvalidRecipeName)?;
        self.name = name;
        Ok(())
    }

    /// Stores the total from a breakdown computed for this recipe.
    ///
    /// ## Errors
    /// [`CoreError::RecipeMismatch`] if `cost` belongs to another recipe.
    pub fn update_total_cost(&mut self, cost: &RecipeCost) -> CoreResult<()> {
        if cost.recipe_id() != &self.id {
            return Err(CoreError::RecipeMismatch {
                recipe_id: self.id.to_string(),
                cost_recipe_id: cost.recipe_id().to_string(),
            });
        }
        self.total_cost = cost.total_cost();
        Ok(())
    }

    /// Every distinct ingredient id referenced, in first-seen order.
    pub fn ingredient_ids(&self) -> Vec<&Id> {
        let mut ids: Vec<&Id> = Vec::with_capacity(self.ingredients.len());
        for line in &self.ingredients {
            if !ids.contains(&line.ingredient_id()) {
                ids.push(line.ingredient_id());
            }
        }
        ids
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrowed view of the lines; only the mutators above can change them.
    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }
}

fn validate_recipe(name: &str, ingredients: &[RecipeIngredient]) -> CoreResult<()> {
    validate_name("recipe name", name).map_err(|_| CoreError::InvalidRecipeName)?;
    if ingredients.is_empty() {
        return Err(CoreError::EmptyRecipe);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
