//! Battles between two commanders.
//!
//! The stronger army wins. The loser pays a tenth of their treasury to the
//! winner, the winner's soldiers gain experience, and the loser's soldiers
//! lose experience. Equal strength is a draw and changes nothing.
//! Fallen soldiers stay on the roster until `prune_dead` is called.

use crate::{commander::Commander, types::Gold};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Share of the loser's treasury, in percent, handed to the winner.
pub const SPOILS_PERCENT: Gold = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    AttackerWon,
    DefenderWon,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attacker:          String,
    pub defender:          String,
    pub attacker_strength: u64,
    pub defender_strength: u64,
    pub outcome:           BattleOutcome,
    pub spoils:            Gold,
    /// Winner's soldiers promoted by the battle.
    pub promotions:        usize,
    /// Loser's soldiers left with no experience.
    pub fallen:            usize,
}

impl BattleReport {
    /// One line for the campaign reporter.
    pub fn narrate(&self) -> String {
        let (winner, loser) = match self.outcome {
            BattleOutcome::AttackerWon => (&self.attacker, &self.defender),
            BattleOutcome::DefenderWon => (&self.defender, &self.attacker),
            BattleOutcome::Draw => {
                return format!(
                    "{} and {} fight to a draw ({} vs {})",
                    self.attacker, self.defender, self.attacker_strength, self.defender_strength
                );
            }
        };
        format!(
            "{winner} defeats {loser} ({} vs {}), taking {} gold; {} promoted, {} fallen",
            self.attacker_strength, self.defender_strength, self.spoils, self.promotions, self.fallen
        )
    }
}

/// Spoils owed by a loser holding `loser_treasury`, rounded down.
/// Computed in `u128` so a saturated treasury cannot overflow.
pub fn spoils_of(loser_treasury: Gold) -> Gold {
    let spoils = u128::from(loser_treasury) * u128::from(SPOILS_PERCENT) / 100;
    spoils as Gold
}

/// Resolve one engagement between `attacker` and `defender`.
pub fn fight(attacker: &mut Commander, defender: &mut Commander) -> BattleReport {
    let attacker_strength = attacker.army_strength();
    let defender_strength = defender.army_strength();

    let mut report = BattleReport {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        attacker_strength,
        defender_strength,
        outcome: BattleOutcome::Draw,
        spoils: 0,
        promotions: 0,
        fallen: 0,
    };

    let (winner, loser) = match attacker_strength.cmp(&defender_strength) {
        Ordering::Greater => {
            report.outcome = BattleOutcome::AttackerWon;
            (attacker, defender)
        }
        Ordering::Less => {
            report.outcome = BattleOutcome::DefenderWon;
            (defender, attacker)
        }
        Ordering::Equal => {
            log::info!("battle: {} vs {} is a draw", report.attacker, report.defender);
            return report;
        }
    };

    report.spoils = spoils_of(loser.treasury());
    loser.remove_gold(report.spoils);
    winner.add_gold(report.spoils);

    for soldier in winner.roster_mut() {
        if soldier.gain_experience() {
            report.promotions += 1;
        }
    }
    for soldier in loser.roster_mut() {
        soldier.lose_experience();
        if !soldier.is_alive() {
            report.fallen += 1;
        }
    }

    log::info!(
        "battle: {} beats {} ({attacker_strength} vs {defender_strength}), spoils={}",
        winner.name(),
        loser.name(),
        report.spoils
    );
    report
}
