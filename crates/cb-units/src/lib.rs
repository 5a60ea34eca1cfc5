//! cb-units: free-text unit resolution for cupboard.
//!
//! Provides:
//! - `Unit`: one named unit with aliases and an affine SI conversion
//! - `UnitSet`: a category of units sharing an SI base, first match wins
//! - `UnitsHandler`: the volume, mass and temperature registry
//! - the fixed constant tables behind the built-in registry
//!
//! # Example
//!
//! ```
//! use cb_units::UnitsHandler;
//!
//! let units = UnitsHandler::new().unwrap();
//! let m = units.volume().convert(3.0, "tsp", Some("Tbsp")).unwrap();
//! assert!((m.magnitude - 1.0).abs() < 1e-12);
//! assert_eq!(m.unit, "Tbsp");
//! ```

pub mod error;
pub mod handler;
pub mod tables;
pub mod unit;
pub mod unit_set;

// Re-exports for ergonomics
pub use error::{UnitError, UnitResult};
pub use handler::UnitsHandler;
pub use tables::UnitDef;
pub use unit::{Conversion, SiBase, Unit};
pub use unit_set::{Measurement, UnitSet};
