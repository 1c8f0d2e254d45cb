//! # Measurement Units
//!
//! A fixed registry of units, each converting linearly to the base unit of
//! its dimension.
//!
//! ## Registry
//! ```text
//! ┌──────────────┬──────────┬─────────────────┬───────────────────────────┐
//! │ Name         │ Type     │ Factor to base  │ Note                      │
//! ├──────────────┼──────────┼─────────────────┼───────────────────────────┤
//! │ ML           │ Volume   │ 1               │ base                      │
//! │ L            │ Volume   │ 1000            │                           │
//! │ TBSP         │ Volume   │ 15              │ tablespoon of liquid      │
//! │ G            │ Weight   │ 1               │ base                      │
//! │ KG           │ Weight   │ 1000            │                           │
//! │ TBSP_BUTTER  │ Weight   │ 14              │ tablespoon of butter ≈ 14g│
//! │ UN           │ Count    │ 1               │ base                      │
//! └──────────────┴──────────┴─────────────────┴───────────────────────────┘
//! ```
//!
//! The registry is a `static` array: built at compile time, never mutated,
//! safe to read from any thread.
//!
//! ## Usage
//! ```rust
//! use costify_core::unit::{Unit, UnitType};
//!
//! assert_eq!(Unit::KG.to_base(1.0), 1000.0);
//! assert_eq!(Unit::from_name("KG"), Some(Unit::KG));
//! assert_eq!(Unit::from_name("lbs"), None);
//! assert_eq!(Unit::KG.unit_type(), UnitType::Weight);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Unit Type
// =============================================================================

/// The dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum UnitType {
    /// Base unit: ML
    Volume,
    /// Base unit: G
    Weight,
    /// Base unit: UN
    Count,
}

impl UnitType {
    /// The canonical unit every other unit of this type converts through.
    pub const fn base_unit(&self) -> Unit {
        match self {
            UnitType::Volume => Unit::ML,
            UnitType::Weight => Unit::G,
            UnitType::Count => Unit::UN,
        }
    }
}

// =============================================================================
// Unit
// =============================================================================

/// A named measurement unit with a linear conversion to its base unit.
///
/// Two units are equal iff name, type and factor all match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    name: &'static str,
    factor_to_base: f64,
    unit_type: UnitType,
}

/// Every unit the system knows, in display order.
static REGISTRY: [Unit; 7] = [
    Unit::ML,
    Unit::L,
    Unit::TBSP,
    Unit::G,
    Unit::KG,
    Unit::TBSP_BUTTER,
    Unit::UN,
];

impl Unit {
    // Volume (base: ML)
    pub const ML: Unit = Unit::predefined("ML", 1.0, UnitType::Volume);
    pub const L: Unit = Unit::predefined("L", 1000.0, UnitType::Volume);
    pub const TBSP: Unit = Unit::predefined("TBSP", 15.0, UnitType::Volume);

    // Weight (base: G)
    pub const G: Unit = Unit::predefined("G", 1.0, UnitType::Weight);
    pub const KG: Unit = Unit::predefined("KG", 1000.0, UnitType::Weight);
    pub const TBSP_BUTTER: Unit = Unit::predefined("TBSP_BUTTER", 14.0, UnitType::Weight);

    // Count
    pub const UN: Unit = Unit::predefined("UN", 1.0, UnitType::Count);

    const fn predefined(name: &'static str, factor_to_base: f64, unit_type: UnitType) -> Unit {
        Unit {
            name,
            factor_to_base,
            unit_type,
        }
    }

    /// Builds a unit outside the registry, enforcing the same invariants.
    ///
    /// The name is `&'static str` so `Unit` stays `Copy`: pass a literal or a
    /// registry name. Names read at runtime (files, user input) resolve
    /// through [`Unit::parse`] or [`Unit::from_name`], which only return
    /// registered units.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidUnitName`] if `name` is blank
    /// - [`CoreError::InvalidConversionFactor`] if `factor_to_base` is not a
    ///   finite number greater than zero
    pub fn new(name: &'static str, factor_to_base: f64, unit_type: UnitType) -> CoreResult<Unit> {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidUnitName);
        }
        if !factor_to_base.is_finite() || factor_to_base <= 0.0 {
            return Err(CoreError::InvalidConversionFactor {
                unit: name.to_string(),
                factor: factor_to_base,
            });
        }
        Ok(Unit::predefined(name, factor_to_base, unit_type))
    }

    /// All registered units.
    pub fn all() -> &'static [Unit] {
        &REGISTRY
    }

    /// Looks a unit up by exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Unit> {
        REGISTRY.iter().find(|unit| unit.name == name).copied()
    }

    /// Like [`Unit::from_name`] but with a typed error.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidUnitName`] if `name` is blank
    /// - [`CoreError::InvalidUnit`] if no registered unit has that name
    pub fn parse(name: &str) -> CoreResult<Unit> {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidUnitName);
        }
        Unit::from_name(name).ok_or_else(|| CoreError::InvalidUnit(name.to_string()))
    }

    /// Converts a quantity in this unit to the base unit of its type.
    ///
    /// No type check happens here: callers must compare
    /// [`Unit::unit_type`] first if they mix units.
    #[inline]
    pub fn to_base(&self, quantity: f64) -> f64 {
        quantity * self.factor_to_base
    }

    /// Converts a base-unit quantity back into this unit.
    #[inline]
    pub fn from_base(&self, base_quantity: f64) -> f64 {
        base_quantity / self.factor_to_base
    }

    /// True when both units measure the same dimension.
    #[inline]
    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.unit_type == other.unit_type
    }

    /// True for ML, G and UN.
    pub fn is_base(&self) -> bool {
        *self == self.unit_type.base_unit()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn factor_to_base(&self) -> f64 {
        self.factor_to_base
    }

    #[inline]
    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Units travel as their registry name.
impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Unit::parse(&name).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
