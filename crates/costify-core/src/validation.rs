//! # Validation Module
//!
//! Shared input checks run by every constructor in this crate.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog / request parsing (outside the core)                 │
//! │  ├── Shape and type checks (deserialization)                           │
//! │  └── Unit names resolved via Unit::parse                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Entity constructors (THIS MODULE)                            │
//! │  ├── Names non-blank after trimming                                    │
//! │  └── Quantities finite and strictly positive                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Money                                                        │
//! │  └── Never negative                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both explicit-id and generated-id constructors go through the same checks.

use crate::error::{CoreError, CoreResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejects names that are empty or whitespace only.
///
/// Callers map the error onto their entity-specific kind
/// (e.g. [`CoreError::InvalidIngredientName`]).
///
/// ## Example
/// ```rust
/// use costify_core::validation::validate_name;
///
/// assert!(validate_name("name", "Flour").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Requires a finite quantity strictly greater than zero.
///
/// ## Errors
/// - [`ValidationError::NotFinite`] (wrapped) for NaN or infinity
/// - [`CoreError::InvalidQuantity`] for zero or negative values
///
/// ## Example
/// ```rust
/// use costify_core::validation::validate_quantity;
///
/// assert!(validate_quantity("quantity", 0.5).is_ok());
/// assert!(validate_quantity("quantity", 0.0).is_err());
/// ```
pub fn validate_quantity(field: &str, quantity: f64) -> CoreResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        }
        .into());
    }
    if quantity <= 0.0 {
        return Err(CoreError::InvalidQuantity {
            field: field.to_string(),
            value: quantity,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Sugar").is_ok());
        assert!(validate_name("name", " x ").is_ok());

        assert_eq!(
            validate_name("name", ""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_name("name", "\t\n").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("quantity", 1.0).is_ok());
        assert!(validate_quantity("quantity", 0.001).is_ok());

        assert!(matches!(
            validate_quantity("quantity", 0.0),
            Err(CoreError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            validate_quantity("quantity", -5.0),
            Err(CoreError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            validate_quantity("quantity", f64::NAN),
            Err(CoreError::Validation(ValidationError::NotFinite { .. }))
        ));
        assert!(matches!(
            validate_quantity("quantity", f64::INFINITY),
            Err(CoreError::Validation(_))
        ));
    }
}
