//! Formula coefficients

use super::{parse_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static EMBEDDED: OnceLock<FormulaConstants> = OnceLock::new();

/// Coefficients for both combat formulas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConstants {
    /// Divisor for halved skills (Prayer, Summoning, classic style bonus)
    #[serde(default = "default_halving_divisor")]
    pub halving_divisor: f64,
    #[serde(default)]
    pub modern: ModernConstants,
    #[serde(default)]
    pub classic: ClassicConstants,
}

impl Default for FormulaConstants {
    fn default() -> Self {
        FormulaConstants {
            halving_divisor: 2.0,
            modern: ModernConstants::default(),
            classic: ClassicConstants::default(),
        }
    }
}

impl FormulaConstants {
    /// Parse constants from TOML and validate them
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let constants: FormulaConstants = parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Constants compiled into the binary, parsed on first use
    pub fn embedded() -> &'static Self {
        EMBEDDED.get_or_init(|| {
            let toml = include_str!("../../config/formulas.toml");
            Self::from_toml(toml).unwrap_or_else(|err| {
                tracing::warn!(%err, "embedded formula constants rejected, using defaults");
                Self::default()
            })
        })
    }

    /// Reject values that would produce infinities, NaN or negative levels
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_divisor("halving_divisor", self.halving_divisor)?;
        check_divisor("modern.divisor", self.modern.divisor)?;
        check_weight("modern.style_weight", self.modern.style_weight)?;
        check_weight("classic.style_weight", self.classic.style_weight)?;
        check_weight("classic.base_weight", self.classic.base_weight)?;
        Ok(())
    }
}

fn check_divisor(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be a finite positive number, got {}",
            name, value
        )))
    }
}

fn check_weight(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )))
    }
}

/// RS3: `floor((style * style_weight + base) / divisor)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModernConstants {
    #[serde(default = "default_modern_style_weight")]
    pub style_weight: f64,
    #[serde(default = "default_modern_divisor")]
    pub divisor: f64,
}

impl Default for ModernConstants {
    fn default() -> Self {
        ModernConstants {
            style_weight: 1.3,
            divisor: 4.0,
        }
    }
}

fn default_halving_divisor() -> f64 {
    2.0
}
fn default_modern_style_weight() -> f64 {
    1.3
}
fn default_modern_divisor() -> f64 {
    4.0
}

/// OSRS: `floor(style * style_weight + floor(defensive * base_weight))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicConstants {
    #[serde(default = "default_classic_style_weight")]
    pub style_weight: f64,
    #[serde(default = "default_classic_base_weight")]
    pub base_weight: f64,
}

impl Default for ClassicConstants {
    fn default() -> Self {
        ClassicConstants {
            style_weight: 0.325,
            base_weight: 0.25,
        }
    }
}

fn default_classic_style_weight() -> f64 {
    0.325
}
fn default_classic_base_weight() -> f64 {
    0.25
}
