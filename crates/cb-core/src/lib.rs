//! cb-core: shared building blocks for the cupboard crates.
//!
//! - `alias`: compiled match rules for unit and ingredient labels
//! - `numeric`: `Real`, float comparison and validation helpers
//! - `units`: density as a uom quantity, with kg/L helpers
//! - `error`: `CoreError`

pub mod alias;
pub mod error;
pub mod numeric;
pub mod units;

pub use alias::{AliasMatcher, MatchPolicy};
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
