//! The three brands that partition every record.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no known brand.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid brand: {0}")]
pub struct ParseBrandError(pub String);

/// A business entity in the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    /// Café Amka.
    Amka,
    /// Mawimbi Restaurant.
    Mawimbi,
    /// Kasa Resort.
    Kasa,
}

impl Brand {
    /// Every brand, in switcher order.
    pub const ALL: [Self; 3] = [Self::Amka, Self::Mawimbi, Self::Kasa];

    /// Brand a super admin lands on before switching.
    pub const DEFAULT: Self = Self::Amka;

    /// Stable identifier used in JSON and on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Amka => "amka",
            Self::Mawimbi => "mawimbi",
            Self::Kasa => "kasa",
        }
    }

    /// Customer-facing name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Amka => "Café Amka",
            Self::Mawimbi => "Mawimbi Restaurant",
            Self::Kasa => "Kasa Resort",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Brand {
    type Err = ParseBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|brand| brand.slug() == s)
            .ok_or_else(|| ParseBrandError(s.to_owned()))
    }
}

/// Which brands an account is attached to.
///
/// Serialized as the bare brand slug, or `"all"` for global accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BrandScope {
    /// A single brand.
    Brand(Brand),
    /// Every brand (super admins only).
    All,
}

impl BrandScope {
    /// The single brand, if this scope is not global.
    #[must_use]
    pub const fn brand(self) -> Option<Brand> {
        match self {
            Self::Brand(brand) => Some(brand),
            Self::All => None,
        }
    }

    /// Whether records of `brand` fall inside this scope.
    #[must_use]
    pub fn covers(self, brand: Brand) -> bool {
        match self {
            Self::Brand(own) => own == brand,
            Self::All => true,
        }
    }
}

impl fmt::Display for BrandScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brand(brand) => brand.fmt(f),
            Self::All => f.write_str("all"),
        }
    }
}

impl FromStr for BrandScope {
    type Err = ParseBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Brand)
        }
    }
}

impl TryFrom<String> for BrandScope {
    type Error = ParseBrandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BrandScope> for String {
    fn from(scope: BrandScope) -> Self {
        scope.to_string()
    }
}

impl From<Brand> for BrandScope {
    fn from(brand: Brand) -> Self {
        Self::Brand(brand)
    }
}
