//! A single soldier: rank, experience, and the promotion rule.

use crate::{rank::Rank, types::Experience};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience a freshly recruited (or freshly promoted) soldier starts with.
pub const STARTING_EXPERIENCE: Experience = 1;

/// Experience needed per tier value before a soldier is promoted.
pub const PROMOTION_THRESHOLD_PER_TIER: Experience = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soldier {
    pub rank:       Rank,
    pub experience: Experience,
}

impl Soldier {
    pub fn new(rank: Rank, experience: Experience) -> Self {
        Self { rank, experience }
    }

    /// A soldier as they arrive from the recruiting office.
    pub fn recruit(rank: Rank) -> Self {
        Self::new(rank, STARTING_EXPERIENCE)
    }

    /// Combat contribution: tier value × experience.
    pub fn strength(&self) -> u64 {
        u64::from(self.rank.tier_value()) * u64::from(self.experience)
    }

    /// Experience at which this soldier's current rank promotes.
    pub fn promotion_threshold(&self) -> Experience {
        self.rank.tier_value() * PROMOTION_THRESHOLD_PER_TIER
    }

    /// Add one point of experience, promoting when the threshold is reached.
    /// Promotion re-bases experience to 1. Majors never promote, so their
    /// experience keeps climbing. Returns true if the rank changed.
    pub fn gain_experience(&mut self) -> bool {
        self.experience = self.experience.saturating_add(1);
        if self.rank.is_terminal() || self.experience < self.promotion_threshold() {
            return false;
        }
        let from = self.rank;
        self.rank = self.rank.promote();
        self.experience = STARTING_EXPERIENCE;
        log::debug!("soldier promoted: {from} -> {}", self.rank);
        true
    }

    /// Remove one point of experience. Clamps at zero.
    pub fn lose_experience(&mut self) {
        self.experience = self.experience.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.experience > 0
    }
}

impl fmt::Display for Soldier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(EXP: {})", self.rank, self.experience)
    }
}
