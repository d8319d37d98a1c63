//! Calculation errors

use crate::stat::Stat;
use thiserror::Error;

/// Error raised while resolving a variant or computing combat levels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid RuneScape version: '{token}' (expected RS3 or OSRS)")]
    InvalidVariant { token: String },
    #[error("Missing required stat: {0}")]
    MissingStat(Stat),
}
