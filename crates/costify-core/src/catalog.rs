//! # Ingredient Catalog
//!
//! In-memory lookup of known ingredients by id. Bridges "a list of
//! ingredients from somewhere" and the `HashMap<Id, Ingredient>` the
//! [`CostCalculationService`](crate::service::CostCalculationService) wants.
//!
//! ```text
//! Recipe "Cake" ──► ingredient_ids() = [flour, sugar]
//!                          │
//!                          ▼
//!   IngredientCatalog::resolve ──► { flour: Ingredient, sugar: Ingredient }
//!                          │
//!                          └── unknown id? ──► IngredientNotFound
//! ```

use std::collections::HashMap;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::id::Id;
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;

/// Ingredients keyed by id. Later inserts replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    ingredients: HashMap<Id, Ingredient>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an ingredient, returning the one it replaced.
    pub fn insert(&mut self, ingredient: Ingredient) -> Option<Ingredient> {
        self.ingredients.insert(ingredient.id().clone(), ingredient)
    }

    pub fn get(&self, id: &Id) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ingredients.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Iterates in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Collects exactly the ingredients `recipe` references.
    ///
    /// ## Errors
    /// [`CoreError::IngredientNotFound`] for the first referenced id the
    /// catalog does not know, in recipe line order.
    pub fn resolve(&self, recipe: &Recipe) -> CoreResult<HashMap<Id, Ingredient>> {
        let resolved = recipe
            .ingredient_ids()
            .into_iter()
            .map(|id| {
                self.ingredients
                    .get(id)
                    .map(|ingredient| (id.clone(), ingredient.clone()))
                    .ok_or_else(|| CoreError::IngredientNotFound(id.to_string()))
            })
            .collect::<CoreResult<HashMap<_, _>>>()?;

        debug!(
            recipe_id = %recipe.id(),
            resolved = resolved.len(),
            "Resolved recipe ingredients"
        );
        Ok(resolved)
    }
}

impl FromIterator<Ingredient> for IngredientCatalog {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        let mut catalog = IngredientCatalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Ingredient> for IngredientCatalog {
    fn extend<I: IntoIterator<Item = Ingredient>>(&mut self, iter: I) {
        for ingredient in iter {
            self.insert(ingredient);
        }
    }
}
