//! CombatResult - Derived combat levels for one character

use serde::{Deserialize, Serialize};
use std::fmt;

/// Combat style a sub-level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatStyle {
    Melee,
    Ranged,
    Magic,
}

impl fmt::Display for CombatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatStyle::Melee => f.write_str("Melee"),
            CombatStyle::Ranged => f.write_str("Ranged"),
            CombatStyle::Magic => f.write_str("Magic"),
        }
    }
}

/// Melee, Ranged and Magic levels plus the Overall combat level
///
/// `overall` is always the maximum of the three style levels; the only
/// constructor is [`CombatResult::from_styles`]. Deserializing goes through
/// [`StyleLevels`], so a serialized `overall` is recomputed, never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StyleLevels")]
pub struct CombatResult {
    melee: u32,
    ranged: u32,
    magic: u32,
    overall: u32,
}

/// Serialized form of the three style levels
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StyleLevels {
    pub melee: u32,
    pub ranged: u32,
    pub magic: u32,
}

impl From<StyleLevels> for CombatResult {
    fn from(levels: StyleLevels) -> Self {
        CombatResult::from_styles(levels.melee, levels.ranged, levels.magic)
    }
}

impl CombatResult {
    /// Build a result from the three style levels
    pub fn from_styles(melee: u32, ranged: u32, magic: u32) -> Self {
        CombatResult {
            melee,
            ranged,
            magic,
            overall: melee.max(ranged).max(magic),
        }
    }

    pub fn melee(&self) -> u32 {
        self.melee
    }

    pub fn ranged(&self) -> u32 {
        self.ranged
    }

    pub fn magic(&self) -> u32 {
        self.magic
    }

    /// Overall combat level (max of the style levels)
    pub fn overall(&self) -> u32 {
        self.overall
    }

    /// Level for a given style
    pub fn level(&self, style: CombatStyle) -> u32 {
        match style {
            CombatStyle::Melee => self.melee,
            CombatStyle::Ranged => self.ranged,
            CombatStyle::Magic => self.magic,
        }
    }

    /// Style that sets the overall level (ties prefer Melee, then Ranged)
    pub fn dominant_style(&self) -> CombatStyle {
        [CombatStyle::Melee, CombatStyle::Ranged, CombatStyle::Magic]
            .into_iter()
            .find(|style| self.level(*style) == self.overall)
            .unwrap_or(CombatStyle::Melee)
    }

    /// Breakdown for a named character, one value per line
    pub fn summary(&self, character: &str) -> String {
        format!(
            "{}'s Combat Level is: {}\nMelee: {}\nRanged: {}\nMagic: {}\nHighest Style: {}",
            character,
            self.overall,
            self.melee,
            self.ranged,
            self.magic,
            self.dominant_style()
        )
    }
}
