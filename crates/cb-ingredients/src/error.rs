//! Ingredient lookup and conversion errors.

use cb_core::CoreError;
use cb_units::UnitError;
use thiserror::Error;

/// Result type for ingredient operations.
pub type IngredientResult<T> = Result<T, IngredientError>;

/// Errors that can occur while resolving ingredients or converting quantities.
///
/// Every variant is terminal for the call that produced it: no partial result
/// is returned alongside.
#[derive(Error, Debug)]
pub enum IngredientError {
    /// No registered ingredient alias occurs in the requested name.
    #[error("No ingredient matches '{name}'")]
    UnmatchedIngredient { name: String },

    /// Unit text resolves in neither the volume nor the mass set.
    #[error("'{text}' is neither a volume nor a mass unit")]
    UnmatchedUnit { text: String },

    /// Unit text resolves in both the volume and the mass set.
    #[error("'{text}' is both a volume and a mass unit")]
    AmbiguousUnit { text: String },

    /// Volume/mass bridge requested for an ingredient without density.
    #[error("Ingredient '{ingredient}' has no density, cannot convert between volume and mass")]
    MissingDensity { ingredient: String },

    /// Density must be finite and positive.
    #[error("Invalid density for '{ingredient}': {value} kg/L")]
    InvalidDensity { ingredient: String, value: f64 },

    /// Ingredient table file with an extension other than yaml, yml or json.
    #[error("Unsupported ingredient table format: {path}")]
    UnsupportedFormat { path: String },

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
