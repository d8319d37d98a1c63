//! GameVariant - Which rule set (and which required stats) to apply

use crate::error::CalcError;
use crate::stat::{Stat, StatSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MODERN_REQUIRED: &[Stat] = &[
    Stat::Attack,
    Stat::Strength,
    Stat::Defence,
    Stat::Ranged,
    Stat::Magic,
    Stat::HitPoints,
    Stat::Prayer,
    Stat::Summoning,
];

/// Supported game versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameVariant {
    /// RuneScape 3
    Modern,
    /// Old School RuneScape
    Classic,
}

impl GameVariant {
    /// Resolve a user-supplied version token (exact, case-sensitive)
    pub fn from_token(token: &str) -> Result<Self, CalcError> {
        match token {
            "RS3" => Ok(GameVariant::Modern),
            "OSRS" => Ok(GameVariant::Classic),
            _ => Err(CalcError::InvalidVariant {
                token: token.to_string(),
            }),
        }
    }

    /// The token that selects this variant
    pub fn token(&self) -> &'static str {
        match self {
            GameVariant::Modern => "RS3",
            GameVariant::Classic => "OSRS",
        }
    }

    /// Stats the formula needs, in prompt order
    pub fn required_stats(&self) -> &'static [Stat] {
        match self {
            GameVariant::Modern => MODERN_REQUIRED,
            GameVariant::Classic => Stat::common(),
        }
    }

    /// Check that every required stat is present
    ///
    /// Reports the first missing stat in prompt order.
    pub fn validate(&self, stats: &StatSet) -> Result<(), CalcError> {
        match self.required_stats().iter().find(|stat| !stats.contains(**stat)) {
            Some(missing) => Err(CalcError::MissingStat(*missing)),
            None => Ok(()),
        }
    }
}

impl FromStr for GameVariant {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameVariant::from_token(s)
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Resolve a token and confirm the stat set satisfies that variant
pub fn select_variant(token: &str, stats: &StatSet) -> Result<GameVariant, CalcError> {
    let variant = GameVariant::from_token(token)?;
    variant.validate(stats)?;
    tracing::debug!(%variant, stats = stats.len(), "variant selected");
    Ok(variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_stats() -> StatSet {
        Stat::common().iter().map(|stat| (*stat, 30)).collect()
    }

    #[test]
    fn test_recognized_tokens() {
        assert_eq!(GameVariant::from_token("RS3"), Ok(GameVariant::Modern));
        assert_eq!(GameVariant::from_token("OSRS"), Ok(GameVariant::Classic));
        assert_eq!("OSRS".parse::<GameVariant>(), Ok(GameVariant::Classic));
    }

    #[test]
    fn test_tokens_are_case_sensitive_and_exact() {
        for token in ["rs3", "osrs", "RS2", "R3", " RS3", "OSRS ", ""] {
            assert_eq!(
                GameVariant::from_token(token),
                Err(CalcError::InvalidVariant {
                    token: token.to_string()
                }),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_token_round_trip() {
        for variant in [GameVariant::Modern, GameVariant::Classic] {
            assert_eq!(GameVariant::from_token(variant.token()), Ok(variant));
        }
    }

    #[test]
    fn test_only_modern_requires_summoning() {
        assert!(GameVariant::Modern.required_stats().contains(&Stat::Summoning));
        assert!(!GameVariant::Classic.required_stats().contains(&Stat::Summoning));
        assert_eq!(GameVariant::Modern.required_stats().len(), 8);
    }

    #[test]
    fn test_select_classic_with_common_stats() {
        assert_eq!(select_variant("OSRS", &classic_stats()), Ok(GameVariant::Classic));
    }

    #[test]
    fn test_select_modern_without_summoning_fails() {
        assert_eq!(
            select_variant("RS3", &classic_stats()),
            Err(CalcError::MissingStat(Stat::Summoning))
        );
    }

    #[test]
    fn test_invalid_token_checked_before_stats() {
        let result = select_variant("RS2", &StatSet::default());
        assert!(matches!(result, Err(CalcError::InvalidVariant { .. })));
    }

    #[test]
    fn test_validate_reports_first_missing_in_order() {
        let stats = StatSet::from([(Stat::Attack, 1), (Stat::Strength, 1)]);
        assert_eq!(
            GameVariant::Classic.validate(&stats),
            Err(CalcError::MissingStat(Stat::Defence))
        );
    }
}
