//! cb-ingredients: density-bridged ingredient conversions for cupboard.
//!
//! Provides:
//! - `Ingredient`: a named substance with aliases and an optional density
//! - `IngredientsHandler`: ordered registry, first match wins
//! - the built-in ingredient catalog
//! - YAML/JSON ingredient tables for extending the registry
//!
//! # Example
//!
//! ```
//! use cb_ingredients::convert_quantity;
//!
//! let grams = convert_quantity("flour", 2.0, "cup", "gram").unwrap();
//! assert!((grams.magnitude - 260.2).abs() < 0.1);
//! assert_eq!(grams.unit, "gram");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod handler;
pub mod ingredient;

// Re-exports for ergonomics
pub use catalog::{IngredientCatalogEntry, builtin_ingredients};
pub use config::{IngredientEntry, IngredientTable};
pub use error::{IngredientError, IngredientResult};
pub use handler::IngredientsHandler;
pub use ingredient::{DEFAULT_TARGET_UNIT, Ingredient};

use cb_core::Real;
use cb_units::Measurement;

/// Convert `magnitude` of `ingredient_name` from `from_unit` to `to_unit`
/// using the built-in registries.
pub fn convert_quantity(
    ingredient_name: &str,
    magnitude: Real,
    from_unit: &str,
    to_unit: &str,
) -> IngredientResult<Measurement> {
    IngredientsHandler::shared()?.convert(ingredient_name, magnitude, from_unit, to_unit)
}
