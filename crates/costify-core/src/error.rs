//! # Error Types
//!
//! Domain-specific error types for costify-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  costify-core errors (this file)                                       │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  costify-cli errors (app)                                              │
//! │  └── ConfigError / anyhow - What the operator sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow → stderr                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is terminal for the operation that raised it. Nothing here is
//! retried and no partial result is ever returned alongside an error.

use thiserror::Error;

use crate::unit::UnitType;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// An operation would produce a negative amount of money.
    ///
    /// ## When This Occurs
    /// - `Money::of(-1.0)`
    /// - Subtracting a larger amount from a smaller one
    /// - Multiplying or dividing by a negative scalar
    #[error("Negative money: {0}")]
    NegativeMoney(String),

    /// Amount is NaN, infinite, or too large to hold in cents.
    #[error("Money amount out of range: {0}")]
    AmountOutOfRange(f64),

    /// Money divided by zero.
    #[error("Cannot divide money by zero")]
    DivisionByZero,

    /// A quantity that must be strictly positive was not.
    #[error("Invalid quantity for {field}: {value} (must be greater than zero)")]
    InvalidQuantity { field: String, value: f64 },

    /// A recipe would end up with no ingredient lines.
    ///
    /// ## When This Occurs
    /// - Constructing a recipe from an empty list
    /// - Removing the last remaining ingredient
    /// - Building a cost breakdown with no lines
    #[error("Recipe must have at least one ingredient")]
    EmptyRecipe,

    /// Ingredient name is blank after trimming.
    #[error("Ingredient name cannot be empty")]
    InvalidIngredientName,

    /// Recipe name is blank after trimming.
    #[error("Recipe name cannot be empty")]
    InvalidRecipeName,

    /// Unit name is blank after trimming.
    #[error("Unit name cannot be empty")]
    InvalidUnitName,

    /// Unit conversion factor is zero, negative, or not finite.
    #[error("Conversion factor for unit {unit} must be greater than zero, got {factor}")]
    InvalidConversionFactor { unit: String, factor: f64 },

    /// Unit name is not in the registry.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// A recipe line references an ingredient the caller did not resolve.
    #[error("Ingredient not found with ID: {0}")]
    IngredientNotFound(String),

    /// A recipe line's unit measures a different dimension than the
    /// ingredient's package unit (e.g. grams of milk bought in litres).
    #[error(
        "Unit {line_unit} ({line_type:?}) cannot be used for ingredient {ingredient_id} \
         packaged in {package_unit} ({package_type:?})"
    )]
    IncompatibleUnits {
        ingredient_id: String,
        line_unit: String,
        line_type: UnitType,
        package_unit: String,
        package_type: UnitType,
    },

    /// A cost breakdown was applied to a recipe it was not computed for.
    #[error("Cost computed for recipe {cost_recipe_id} cannot be applied to recipe {recipe_id}")]
    RecipeMismatch {
        recipe_id: String,
        cost_recipe_id: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Stable machine-readable code for the error kind.
    ///
    /// Collaborators map these onto their own status codes; the text of the
    /// error is diagnostic only.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NegativeMoney(_) => "NEGATIVE_MONEY",
            CoreError::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
            CoreError::DivisionByZero => "DIVISION_BY_ZERO",
            CoreError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            CoreError::EmptyRecipe => "EMPTY_RECIPE",
            CoreError::InvalidIngredientName => "INVALID_INGREDIENT_NAME",
            CoreError::InvalidRecipeName => "INVALID_RECIPE_NAME",
            CoreError::InvalidUnitName => "INVALID_UNIT_NAME",
            CoreError::InvalidConversionFactor { .. } => "INVALID_CONVERSION_FACTOR",
            CoreError::InvalidUnit(_) => "INVALID_UNIT",
            CoreError::IngredientNotFound(_) => "INGREDIENT_NOT_FOUND",
            CoreError::IncompatibleUnits { .. } => "INCOMPATIBLE_UNITS",
            CoreError::RecipeMismatch { .. } => "RECIPE_MISMATCH",
            CoreError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the helpers in [`crate::validation`] before an entity is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
