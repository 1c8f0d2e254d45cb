//! # Ingredient
//!
//! A purchased good: a package of some quantity, in some unit, at some price.
//!
//! ```text
//! Flour: 1 KG for $10.00
//!          │
//!          ▼
//!   to_base(1 KG) = 1000 G
//!          │
//!          ▼
//!   unit_cost = 10.00 / 1000 = $0.01 per G
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::id::{Id, IdGenerator};
use crate::money::Money;
use crate::unit::Unit;
use crate::validation::{validate_name, validate_quantity};

/// A purchasable ingredient.
///
/// Read-only after construction. Storage collaborators rebuild it through
/// [`Ingredient::new`] with the persisted id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    id: Id,
    name: String,
    package_quantity: f64,
    package_price: Money,
    package_unit: Unit,
}

impl Ingredient {
    /// Rebuilds an ingredient with a known id.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidIngredientName`] if `name` is blank
    /// - [`CoreError::InvalidQuantity`] if `package_quantity <= 0`
    pub fn new(
        id: Id,
        name: impl Into<String>,
        package_quantity: f64,
        package_price: Money,
        package_unit: Unit,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_name("ingredient name", &name).map_err(|_| CoreError::InvalidIngredientName)?;
        validate_quantity("package quantity", package_quantity)?;

        Ok(Ingredient {
            id,
            name,
            package_quantity,
            package_price,
            package_unit,
        })
    }

    /// Creates a new ingredient with an id from `generator`.
    ///
    /// Validation runs before an id is drawn.
    pub fn create(
        generator: &dyn IdGenerator,
        name: impl Into<String>,
        package_quantity: f64,
        package_price: Money,
        package_unit: Unit,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_name("ingredient name", &name).map_err(|_| CoreError::InvalidIngredientName)?;
        validate_quantity("package quantity", package_quantity)?;

        Ingredient::new(
            Id::generate(generator),
            name,
            package_quantity,
            package_price,
            package_unit,
        )
    }

    /// Price per base unit (per ML, G or UN) of this ingredient.
    ///
    /// `package_quantity > 0` and `factor_to_base > 0` are both construction
    /// invariants, so the divisor is never zero.
    pub fn unit_cost(&self) -> f64 {
        let base_quantity = self.package_unit.to_base(self.package_quantity);
        self.package_price.amount() / base_quantity
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_quantity(&self) -> f64 {
        self.package_quantity
    }

    pub fn package_price(&self) -> Money {
        self.package_price
    }

    pub fn package_unit(&self) -> Unit {
        self.package_unit
    }
}
