//! # costify-core: Pure Recipe Cost Logic for Costify
//!
//! This crate is the **heart** of Costify. It knows what ingredients cost,
//! how units convert, and what a recipe costs to make. It has zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Costify Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    costify-cli (apps/cli)                       │   │
//! │  │    env + args ──► catalog.json ──► report (text / JSON)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ domain objects                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ costify-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   unit    │  │ ingredient│  │  service  │  │   │
//! │  │   │   Money   │  │   Unit    │  │  recipe   │  │ CostCalc  │  │   │
//! │  │   │  (cents)  │  │ UnitType  │  │   cost    │  │  catalog  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Non-negative money, rounded to cents on every operation
//! - [`unit`] - Unit registry and conversion to base units
//! - [`id`] - Opaque identifiers and id generators
//! - [`ingredient`] - Purchasable ingredients and their unit cost
//! - [`recipe`] - Recipes and recipe lines
//! - [`cost`] - Computed cost breakdowns
//! - [`service`] - The cost calculation algorithm
//! - [`catalog`] - In-memory ingredient lookup
//! - [`dto`] - Primitive response shapes with TypeScript bindings
//! - [`error`] - Domain error types
//! - [`validation`] - Shared constructor checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same recipe + same ingredients = same cost
//! 2. **No I/O**: storage and fetching belong to callers
//! 3. **Cents Everywhere**: money is rounded to two places at every step
//! 4. **Explicit Errors**: every failure is a typed [`CoreError`], never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use costify_core::{CostCalculationService, Id, Ingredient, Money, Recipe, RecipeIngredient, Unit};
//!
//! let flour = Ingredient::new(Id::of("flour"), "Flour", 1.0, Money::of(10.0)?, Unit::KG)?;
//! let sugar = Ingredient::new(Id::of("sugar"), "Sugar", 1.0, Money::of(5.0)?, Unit::KG)?;
//!
//! let cake = Recipe::new(
//!     Id::of("cake"),
//!     "Cake",
//!     vec![
//!         RecipeIngredient::new(Id::of("flour"), 500.0, Unit::G)?,
//!         RecipeIngredient::new(Id::of("sugar"), 200.0, Unit::G)?,
//!     ],
//!     Money::zero(),
//! )?;
//!
//! let ingredients: HashMap<Id, Ingredient> = [flour, sugar]
//!     .into_iter()
//!     .map(|i| (i.id().clone(), i))
//!     .collect();
//!
//! let cost = CostCalculationService::new().calculate_cost(&cake, &ingredients)?;
//! assert_eq!(cost.total_cost().amount(), 6.0);
//! # Ok::<(), costify_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod cost;
pub mod dto;
pub mod error;
pub mod id;
pub mod ingredient;
pub mod money;
pub mod recipe;
pub mod service;
pub mod unit;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use costify_core::Money` instead of
// `use costify_core::money::Money`

pub use catalog::IngredientCatalog;
pub use cost::{IngredientCost, RecipeCost};
pub use error::{CoreError, CoreResult, ValidationError};
pub use id::{Id, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use ingredient::Ingredient;
pub use money::Money;
pub use recipe::{Recipe, RecipeIngredient};
pub use service::CostCalculationService;
pub use unit::{Unit, UnitType};
