//! Military ranks and their tier values.
//!
//! Tier values drive every formula in the simulation: soldier strength,
//! recruitment cost, drill cost, and the experience needed for promotion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ranks in promotion order. Variants are declared lowest first, so the
/// derived ordering matches the tier-value ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Private,
    Corporal,
    Captain,
    Major,
}

impl Rank {
    /// Every rank, lowest first.
    pub const ALL: [Rank; 4] = [Rank::Private, Rank::Corporal, Rank::Captain, Rank::Major];

    pub fn tier_value(&self) -> u32 {
        match self {
            Self::Private  => 1,
            Self::Corporal => 2,
            Self::Captain  => 3,
            Self::Major    => 4,
        }
    }

    /// The next rank up. Major is terminal and promotes to itself.
    pub fn promote(&self) -> Rank {
        match self {
            Self::Private  => Self::Corporal,
            Self::Corporal => Self::Captain,
            Self::Captain  => Self::Major,
            Self::Major    => Self::Major,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.promote() == *self
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Private  => "private",
            Self::Corporal => "corporal",
            Self::Captain  => "captain",
            Self::Major    => "major",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_ascii_uppercase())
    }
}
