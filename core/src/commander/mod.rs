//! Commanders: a treasury and an ordered roster of soldiers.
//!
//! RULE: Every operation that spends gold checks the full cost first.
//! A failed recruit or drill leaves treasury and roster untouched.

mod persistence;

pub use persistence::{CommanderRecord, SaveFile, SoldierRecord, MAX_SAVE_BYTES, SAVE_VERSION};

use crate::{
    error::{WarError, WarResult},
    rank::Rank,
    soldier::Soldier,
    types::{Gold, RosterPosition},
};
use std::{collections::BTreeMap, fmt};

/// Gold per tier value to recruit a soldier of a given rank.
pub const RECRUIT_COST_PER_TIER: Gold = 10;

/// What a drill cost and what it achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrillReport {
    pub participants: usize,
    pub cost:         Gold,
    pub promotions:   usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commander {
    name:     String,
    treasury: Gold,
    roster:   Vec<Soldier>,
}

impl Commander {
    pub fn new(name: impl Into<String>, initial_gold: Gold) -> Self {
        Self {
            name:     name.into(),
            treasury: initial_gold,
            roster:   Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn treasury(&self) -> Gold {
        self.treasury
    }

    pub fn roster(&self) -> &[Soldier] {
        &self.roster
    }

    /// Soldiers can be changed in place (e.g. battle attrition), but joining
    /// or leaving the roster goes through `enlist`, `discharge` and `prune_dead`.
    pub fn roster_mut(&mut self) -> &mut [Soldier] {
        &mut self.roster
    }

    // ── Treasury ─────────────────────────────────────────────

    pub fn add_gold(&mut self, amount: Gold) {
        self.treasury = self.treasury.saturating_add(amount);
    }

    /// Take gold out of the treasury. Never goes below zero.
    pub fn remove_gold(&mut self, amount: Gold) {
        self.treasury = self.treasury.saturating_sub(amount);
    }

    fn charge(&mut self, cost: Gold) -> WarResult<()> {
        if cost > self.treasury {
            log::warn!(
                "{}: cannot pay {cost} gold, treasury holds {}",
                self.name,
                self.treasury
            );
            return Err(WarError::InsufficientFunds {
                needed:    cost,
                available: self.treasury,
            });
        }
        self.remove_gold(cost);
        Ok(())
    }

    // ── Recruitment ──────────────────────────────────────────

    pub fn recruit_cost(rank: Rank) -> Gold {
        RECRUIT_COST_PER_TIER * Gold::from(rank.tier_value())
    }

    /// Buy a new soldier of `rank` and append them to the roster.
    pub fn recruit_soldier(&mut self, rank: Rank) -> WarResult<&Soldier> {
        let cost = Self::recruit_cost(rank);
        self.charge(cost)?;
        self.roster.push(Soldier::recruit(rank));
        log::info!("{}: recruited a {rank} for {cost} gold", self.name);
        Ok(&self.roster[self.roster.len() - 1])
    }

    /// Add an existing soldier to the end of the roster, free of charge.
    pub fn enlist(&mut self, soldier: Soldier) {
        self.roster.push(soldier);
    }

    /// Remove the soldier at `position`, shifting later soldiers forward.
    pub fn discharge(&mut self, position: RosterPosition) -> Option<Soldier> {
        if position < self.roster.len() {
            Some(self.roster.remove(position))
        } else {
            None
        }
    }

    // ── Drills ───────────────────────────────────────────────

    /// Gold needed to drill the given soldiers once each.
    pub fn drill_cost<'a>(participants: impl IntoIterator<Item = &'a Soldier>) -> Gold {
        participants
            .into_iter()
            .map(|s| Gold::from(s.rank.tier_value()))
            .sum()
    }

    /// Drill any set of soldiers, paid from this commander's treasury.
    /// The soldiers do not have to serve on this roster; use `drill_all`
    /// or `drill_selected` for the commander's own troops.
    pub fn drill<'a>(
        &mut self,
        participants: impl IntoIterator<Item = &'a mut Soldier>,
    ) -> WarResult<DrillReport> {
        let participants: Vec<&mut Soldier> = participants.into_iter().collect();
        let cost = Self::drill_cost(participants.iter().map(|s| &**s));
        self.charge(cost)?;

        let mut report = DrillReport {
            participants: participants.len(),
            cost,
            promotions: 0,
        };
        for soldier in participants {
            if soldier.gain_experience() {
                report.promotions += 1;
            }
        }
        self.log_drill(&report);
        Ok(report)
    }

    /// Drill the whole roster in roster order.
    pub fn drill_all(&mut self) -> WarResult<DrillReport> {
        let cost = Self::drill_cost(&self.roster);
        self.charge(cost)?;

        let mut report = DrillReport {
            participants: self.roster.len(),
            cost,
            promotions: 0,
        };
        for soldier in &mut self.roster {
            if soldier.gain_experience() {
                report.promotions += 1;
            }
        }
        self.log_drill(&report);
        Ok(report)
    }

    /// Drill the soldiers at the given roster positions, in the order given.
    /// A position listed twice is drilled, and paid for, twice.
    pub fn drill_selected(&mut self, positions: &[RosterPosition]) -> WarResult<DrillReport> {
        if let Some(&position) = positions.iter().find(|&&p| p >= self.roster.len()) {
            return Err(WarError::SoldierNotFound {
                position,
                roster_len: self.roster.len(),
            });
        }
        let cost = Self::drill_cost(positions.iter().map(|&p| &self.roster[p]));
        self.charge(cost)?;

        let mut report = DrillReport {
            participants: positions.len(),
            cost,
            promotions: 0,
        };
        for &position in positions {
            if self.roster[position].gain_experience() {
                report.promotions += 1;
            }
        }
        self.log_drill(&report);
        Ok(report)
    }

    fn log_drill(&self, report: &DrillReport) {
        log::info!(
            "{}: drilled {} soldiers for {} gold ({} promoted)",
            self.name,
            report.participants,
            report.cost,
            report.promotions
        );
    }

    // ── Army ─────────────────────────────────────────────────

    pub fn army_strength(&self) -> u64 {
        self.roster.iter().map(Soldier::strength).sum()
    }

    /// Head count per rank. Ranks with nobody serving are omitted.
    pub fn army_composition(&self) -> BTreeMap<Rank, usize> {
        let mut composition = BTreeMap::new();
        for soldier in &self.roster {
            *composition.entry(soldier.rank).or_insert(0) += 1;
        }
        composition
    }

    /// Remove every soldier with no experience left. Survivors keep their
    /// relative order. Returns how many were removed.
    pub fn prune_dead(&mut self) -> usize {
        let before = self.roster.len();
        self.roster.retain(Soldier::is_alive);
        let removed = before - self.roster.len();
        if removed > 0 {
            log::debug!("{}: removed {removed} fallen soldiers", self.name);
        }
        removed
    }
}

impl fmt::Display for Commander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commander {} (Gold: {}, Army: [", self.name, self.treasury)?;
        for (i, soldier) in self.roster.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{soldier}")?;
        }
        f.write_str("])")
    }
}
