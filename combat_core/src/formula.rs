//! Combat formula engine
//!
//! Both formulas work in `f64` and floor at fixed sub-expression boundaries.
//! Reordering a floor and a multiply changes results for real characters, so
//! each step below mirrors the published formula exactly.

use crate::config::FormulaConstants;
use crate::error::CalcError;
use crate::result::CombatResult;
use crate::stat::{Stat, StatSet};
use crate::variant::GameVariant;

/// The seven skills shared by both formulas, resolved from a StatSet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatSkills {
    pub attack: u32,
    pub strength: u32,
    pub defence: u32,
    pub ranged: u32,
    pub magic: u32,
    pub hitpoints: u32,
    pub prayer: u32,
}

impl CombatSkills {
    /// Pull the common skills out of a StatSet
    pub fn resolve(stats: &StatSet) -> Result<Self, CalcError> {
        Ok(CombatSkills {
            attack: stats.require(Stat::Attack)?,
            strength: stats.require(Stat::Strength)?,
            defence: stats.require(Stat::Defence)?,
            ranged: stats.require(Stat::Ranged)?,
            magic: stats.require(Stat::Magic)?,
            hitpoints: stats.require(Stat::HitPoints)?,
            prayer: stats.require(Stat::Prayer)?,
        })
    }
}

/// Compute combat levels with the built-in constants
pub fn calculate(stats: &StatSet, variant: GameVariant) -> Result<CombatResult, CalcError> {
    calculate_with(stats, variant, FormulaConstants::embedded())
}

/// Compute combat levels with explicit constants
///
/// Fails with `MissingStat` before any arithmetic if the variant's required
/// stats are not all present.
pub fn calculate_with(
    stats: &StatSet,
    variant: GameVariant,
    constants: &FormulaConstants,
) -> Result<CombatResult, CalcError> {
    variant.validate(stats)?;
    let skills = CombatSkills::resolve(stats)?;

    let result = match variant {
        GameVariant::Modern => {
            let summoning = stats.require(Stat::Summoning)?;
            modern_levels(&skills, summoning, constants)
        }
        GameVariant::Classic => classic_levels(&skills, constants),
    };

    tracing::debug!(
        %variant,
        melee = result.melee(),
        ranged = result.ranged(),
        magic = result.magic(),
        overall = result.overall(),
        "combat levels computed"
    );
    Ok(result)
}

/// RS3 formula
///
/// ```text
/// base   = floor(Prayer/2) + floor(Summoning/2) + Defence + Hitpoints
/// melee  = floor(((Attack + Strength) * 1.3 + base) / 4)
/// ranged = floor(((2 * Ranged) * 1.3 + base) / 4)
/// magic  = floor(((2 * Magic) * 1.3 + base) / 4)
/// ```
pub fn modern_levels(
    skills: &CombatSkills,
    summoning: u32,
    constants: &FormulaConstants,
) -> CombatResult {
    let half = constants.halving_divisor;
    let weight = constants.modern.style_weight;
    let divisor = constants.modern.divisor;

    let base = (f64::from(skills.prayer) / half).floor()
        + (f64::from(summoning) / half).floor()
        + f64::from(skills.defence)
        + f64::from(skills.hitpoints);

    let style = |style_total: f64| to_level(((style_total * weight + base) / divisor).floor());

    let melee = style(f64::from(skills.attack) + f64::from(skills.strength));
    let ranged = style(2.0 * f64::from(skills.ranged));
    let magic = style(2.0 * f64::from(skills.magic));

    CombatResult::from_styles(melee, ranged, magic)
}

/// OSRS formula
///
/// ```text
/// base   = floor((floor(Prayer/2) + Defence + Hitpoints) * 0.25)
/// melee  = floor((Attack + Strength) * 0.325 + base)
/// ranged = floor((floor(Ranged/2) + Ranged) * 0.325 + base)
/// magic  = floor((floor(Magic/2) + Magic) * 0.325 + base)
/// ```
pub fn classic_levels(skills: &CombatSkills, constants: &FormulaConstants) -> CombatResult {
    let half = constants.halving_divisor;
    let weight = constants.classic.style_weight;

    let base = (((f64::from(skills.prayer) / half).floor()
        + f64::from(skills.defence)
        + f64::from(skills.hitpoints))
        * constants.classic.base_weight)
        .floor();

    let style = |style_total: f64| to_level((style_total * weight + base).floor());
    let with_half_bonus = |level: u32| (f64::from(level) / half).floor() + f64::from(level);

    let melee = style(f64::from(skills.attack) + f64::from(skills.strength));
    let ranged = style(with_half_bonus(skills.ranged));
    let magic = style(with_half_bonus(skills.magic));

    CombatResult::from_styles(melee, ranged, magic)
}

// Floored, non-negative inputs only; `as` saturates at the u32 bounds.
fn to_level(value: f64) -> u32 {
    value as u32
}
