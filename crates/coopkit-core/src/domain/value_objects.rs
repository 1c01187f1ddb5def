//! Domain value objects: Wood, RoofStyle, RoofMaterial, Levels, HardwareFinish.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one is a closed selection set, so once a value exists it is valid.
//! Parsing from text (`FromStr`, serde) is the only place an unknown option
//! can be rejected.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the price term in `pricing.rs` and, if it changes the drawing,
//!    the geometry in `schematic.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Wood ─────────────────────────────────────────────────────────────────────

/// Lumber species used for the frame and cladding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wood {
    #[default]
    Cedar,
    Pine,
}

impl Wood {
    pub const ALL: [Self; 2] = [Self::Cedar, Self::Pine];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cedar => "cedar",
            Self::Pine => "pine",
        }
    }
}

impl fmt::Display for Wood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cedar" => Ok(Self::Cedar),
            "pine" => Ok(Self::Pine),
            other => Err(DomainError::UnknownOption {
                field: "wood",
                value: other.to_string(),
            }),
        }
    }
}

// ── RoofStyle ────────────────────────────────────────────────────────────────

/// Roof shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoofStyle {
    #[default]
    Gable,
    LeanTo,
}

impl RoofStyle {
    pub const ALL: [Self; 2] = [Self::Gable, Self::LeanTo];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gable => "gable",
            Self::LeanTo => "lean-to",
        }
    }
}

impl fmt::Display for RoofStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoofStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gable" => Ok(Self::Gable),
            "lean-to" | "leanto" | "lean_to" => Ok(Self::LeanTo),
            other => Err(DomainError::UnknownOption {
                field: "roof",
                value: other.to_string(),
            }),
        }
    }
}

// ── RoofMaterial ─────────────────────────────────────────────────────────────

/// Roof covering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofMaterial {
    Wood,
    /// Corrugated sheet metal.
    #[default]
    Metal,
}

impl RoofMaterial {
    pub const ALL: [Self; 2] = [Self::Wood, Self::Metal];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Metal => "metal",
        }
    }
}

impl fmt::Display for RoofMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoofMaterial {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wood" => Ok(Self::Wood),
            "metal" | "sheet-metal" | "sheet_metal" => Ok(Self::Metal),
            other => Err(DomainError::UnknownOption {
                field: "roof material",
                value: other.to_string(),
            }),
        }
    }
}

// ── Levels ───────────────────────────────────────────────────────────────────

/// Number of floors. Two levels means a partial loft reached by a ladder.
///
/// Serialized as the plain integer `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Levels {
    One,
    #[default]
    Two,
}

impl Levels {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    pub const fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn has_loft(self) -> bool {
        matches!(self, Self::Two)
    }
}

impl TryFrom<u8> for Levels {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            value => Err(DomainError::InvalidLevels { value }),
        }
    }
}

impl From<Levels> for u8 {
    fn from(levels: Levels) -> Self {
        levels.count()
    }
}

impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl FromStr for Levels {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.trim().parse().map_err(|_| DomainError::UnknownOption {
            field: "levels",
            value: s.trim().to_string(),
        })?;
        Self::try_from(value)
    }
}

// ── HardwareFinish ───────────────────────────────────────────────────────────

/// Finish of hinges, latches and hardware cloth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareFinish {
    #[default]
    Black,
    Galvanized,
}

impl HardwareFinish {
    pub const ALL: [Self; 2] = [Self::Black, Self::Galvanized];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Galvanized => "galvanized",
        }
    }
}

impl fmt::Display for HardwareFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HardwareFinish {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "galvanized" | "galvanised" => Ok(Self::Galvanized),
            other => Err(DomainError::UnknownOption {
                field: "hardware finish",
                value: other.to_string(),
            }),
        }
    }
}
