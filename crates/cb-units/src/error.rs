//! Unit resolution and conversion errors.

use cb_core::CoreError;
use thiserror::Error;

use crate::SiBase;

/// Result type for unit operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors raised while building unit registries or converting through them.
#[derive(Error, Debug)]
pub enum UnitError {
    /// No unit in the searched category matches the text.
    #[error("No {category} unit matches '{text}'")]
    UnmatchedUnit { text: String, category: String },

    /// SI base name outside the fixed enumeration.
    #[error("Invalid SI category '{name}' (expected meter, kilogram, second, liter, kelvin or unknown)")]
    InvalidCategory { name: String },

    /// A unit was pushed into a set with a different SI base.
    #[error("Unit '{unit}' is based on {actual} but its set is based on {expected}")]
    CategoryMismatch {
        unit: String,
        expected: SiBase,
        actual: SiBase,
    },

    /// A set was handed to the registry in the wrong slot.
    #[error("The {slot} set must be based on {expected}, got '{set}' based on {actual}")]
    SetMismatch {
        slot: &'static str,
        set: String,
        expected: SiBase,
        actual: SiBase,
    },

    /// Category name not held by the registry.
    #[error("Unknown unit category '{name}'")]
    UnknownCategory { name: String },

    /// Affine ratio of zero has no inverse.
    #[error("Unit '{unit}' has a zero conversion ratio")]
    ZeroRatio { unit: String },

    /// Placeholder unit (package, bag, can) with no SI conversion.
    #[error("Unit '{unit}' cannot be converted")]
    Unconvertible { unit: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UnitError::UnmatchedUnit {
            text: "furlong".into(),
            category: "volume".into(),
        };
        assert_eq!(err.to_string(), "No volume unit matches 'furlong'");

        let err = UnitError::CategoryMismatch {
            unit: "gram".into(),
            expected: SiBase::Liter,
            actual: SiBase::Kilogram,
        };
        assert!(err.to_string().contains("kilogram"));
        assert!(err.to_string().contains("liter"));
    }

    #[test]
    fn core_error_converts() {
        let err: UnitError = CoreError::InvalidArg { what: "alias" }.into();
        assert!(matches!(err, UnitError::Core(CoreError::InvalidArg { .. })));
    }
}
