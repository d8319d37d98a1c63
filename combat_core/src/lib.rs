//! combat_core - Combat level calculation for RuneScape characters
//!
//! This library provides:
//! - StatSet: The immutable set of skill levels for one character
//! - GameVariant: RS3 ("modern") or OSRS ("classic") rules
//! - Formula engine: StatSet + GameVariant -> CombatResult
//! - CombatResult: Melee, Ranged, Magic and Overall combat levels

pub mod config;
pub mod error;
pub mod formula;
pub mod prelude;
pub mod result;
pub mod stat;
pub mod variant;

// Re-export core types for convenience
pub use config::FormulaConstants;
pub use error::CalcError;
pub use formula::{calculate, calculate_with};
pub use result::{CombatResult, CombatStyle};
pub use stat::{Stat, StatSet};
pub use variant::{select_variant, GameVariant};
