//! Hull materials and their durability coefficients.
//!
//! | Material   | Coefficient |
//! |------------|-------------|
//! | Wood       | 1.5         |
//! | Aluminium  | 4.0         |
//! | Plastic    | 4.0         |
//! | Fiberglass | 0.75        |
//! | Kevlar     | 0.75        |
//! | (other)    | 1.0         |
//!
//! A higher coefficient means a sturdier hull. Unrecognised material names
//! are kept as [`Material::Other`] so they still display as written.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coefficient used for any material outside the known table.
pub const DEFAULT_DURABILITY: f64 = 1.0;

/// What a canoe's hull is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    /// Traditional wooden hull.
    Wood,
    /// Aluminium hull.
    Aluminium,
    /// Rotomolded plastic hull.
    Plastic,
    /// Fiberglass composite hull.
    Fiberglass,
    /// Kevlar composite hull.
    Kevlar,
    /// Any other material, kept verbatim. Uses [`DEFAULT_DURABILITY`].
    Other(String),
}

impl Material {
    /// Resolve a material name. Matching is exact and case-sensitive;
    /// anything unrecognised becomes [`Material::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "Wood" => Self::Wood,
            "Aluminium" => Self::Aluminium,
            "Plastic" => Self::Plastic,
            "Fiberglass" => Self::Fiberglass,
            "Kevlar" => Self::Kevlar,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The material's durability coefficient.
    pub const fn durability_coefficient(&self) -> f64 {
        match self {
            Self::Wood => 1.5,
            Self::Aluminium | Self::Plastic => 4.0,
            Self::Fiberglass | Self::Kevlar => 0.75,
            Self::Other(_) => DEFAULT_DURABILITY,
        }
    }

    /// The material's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Wood => "Wood",
            Self::Aluminium => "Aluminium",
            Self::Plastic => "Plastic",
            Self::Fiberglass => "Fiberglass",
            Self::Kevlar => "Kevlar",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Material {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for Material {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<Material> for String {
    fn from(material: Material) -> Self {
        match material {
            Material::Other(name) => name,
            known => known.name().to_owned(),
        }
    }
}
