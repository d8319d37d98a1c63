//! Stat and StatSet - Skill levels feeding the combat formulas

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A combat-relevant skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Strength,
    Defence,
    Ranged,
    Magic,
    HitPoints,
    Prayer,
    /// RS3 only
    Summoning,
}

impl Stat {
    /// Stats used by every variant, in prompt order
    pub fn common() -> &'static [Stat] {
        &[
            Stat::Attack,
            Stat::Strength,
            Stat::Defence,
            Stat::Ranged,
            Stat::Magic,
            Stat::HitPoints,
            Stat::Prayer,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Stat::Attack => "Attack",
            Stat::Strength => "Strength",
            Stat::Defence => "Defence",
            Stat::Ranged => "Ranged",
            Stat::Magic => "Magic",
            Stat::HitPoints => "Hitpoints",
            Stat::Prayer => "Prayer",
            Stat::Summoning => "Summoning",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable set of skill levels for a single character
///
/// Built once (usually from user input) and read by the formula engine.
/// A stat that was never supplied is absent, not zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSet {
    levels: BTreeMap<Stat, u32>,
}

impl StatSet {
    /// Level for a stat, if present
    pub fn get(&self, stat: Stat) -> Option<u32> {
        self.levels.get(&stat).copied()
    }

    /// Level for a stat, or a `MissingStat` error naming it
    pub fn require(&self, stat: Stat) -> Result<u32, CalcError> {
        self.get(stat).ok_or(CalcError::MissingStat(stat))
    }

    pub fn contains(&self, stat: Stat) -> bool {
        self.levels.contains_key(&stat)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over (stat, level) pairs in stat order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        self.levels.iter().map(|(stat, level)| (*stat, *level))
    }
}

impl FromIterator<(Stat, u32)> for StatSet {
    fn from_iter<I: IntoIterator<Item = (Stat, u32)>>(iter: I) -> Self {
        StatSet {
            levels: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(Stat, u32); N]> for StatSet {
    fn from(pairs: [(Stat, u32); N]) -> Self {
        pairs.into_iter().collect()
    }
}
