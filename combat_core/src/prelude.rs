//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Inputs
pub use crate::stat::{Stat, StatSet};
pub use crate::variant::{select_variant, GameVariant};

// Calculation
pub use crate::formula::{calculate, calculate_with};
pub use crate::result::{CombatResult, CombatStyle};

// Errors and config
pub use crate::config::FormulaConstants;
pub use crate::error::CalcError;
