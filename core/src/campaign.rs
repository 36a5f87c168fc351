//! A scripted campaign: muster, drill, fight.
//!
//! ORDER (fixed):
//!   1. Muster: each commander recruits their listed ranks, in order.
//!   2. Drill: `drill_rounds` full-roster drills per commander.
//!   3. Battles, in the order listed, pruning the fallen after each one
//!      when `prune_after_battle` is set.
//!
//! Recruits or drills a commander cannot afford are reported and skipped.

use crate::{
    battle::{fight, BattleReport},
    commander::Commander,
    config::ScenarioConfig,
    error::WarError,
    reporter::Reporter,
};

pub struct Campaign {
    commanders: Vec<Commander>,
    battles:    Vec<BattleReport>,
    pub reporter: Reporter,
}

impl Campaign {
    /// Validate `config` and play it to the end.
    pub fn run(config: &ScenarioConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let mut campaign = Self {
            commanders: Vec::with_capacity(config.commanders.len()),
            battles:    Vec::with_capacity(config.battles.len()),
            reporter:   Reporter::new(),
        };
        campaign.muster(config);
        for round in 1..=config.drill_rounds {
            campaign.drill_round(round);
        }
        for battle in &config.battles {
            campaign.battle(&battle.attacker, &battle.defender, config.prune_after_battle)?;
        }
        log::info!(
            "campaign finished: {} commanders, {} battles",
            campaign.commanders.len(),
            campaign.battles.len()
        );
        Ok(campaign)
    }

    pub fn commanders(&self) -> &[Commander] {
        &self.commanders
    }

    pub fn commander(&self, name: &str) -> Option<&Commander> {
        self.commanders.iter().find(|c| c.name() == name)
    }

    pub fn battles(&self) -> &[BattleReport] {
        &self.battles
    }

    fn muster(&mut self, config: &ScenarioConfig) {
        for entry in &config.commanders {
            let mut commander = Commander::new(entry.name.clone(), entry.gold);
            for &rank in &entry.recruits {
                match commander.recruit_soldier(rank) {
                    Ok(_) => self.reporter.log(format!(
                        "{} recruits a {rank} for {} gold",
                        entry.name,
                        Commander::recruit_cost(rank)
                    )),
                    Err(err) => self.reporter.log(format!(
                        "{} cannot recruit a {rank}: {err}",
                        entry.name
                    )),
                }
            }
            self.commanders.push(commander);
        }
    }

    fn drill_round(&mut self, round: u32) {
        for commander in &mut self.commanders {
            if commander.roster().is_empty() {
                continue;
            }
            match commander.drill_all() {
                Ok(report) => self.reporter.log(format!(
                    "Drill {round}: {} drills {} soldiers for {} gold ({} promoted)",
                    commander.name(),
                    report.participants,
                    report.cost,
                    report.promotions
                )),
                Err(err @ WarError::InsufficientFunds { .. }) => self.reporter.log(format!(
                    "Drill {round}: {} skips drill: {err}",
                    commander.name()
                )),
                Err(err) => log::warn!("drill {round}: unexpected failure: {err}"),
            }
        }
    }

    fn battle(&mut self, attacker: &str, defender: &str, prune: bool) -> anyhow::Result<()> {
        let (a, d) = self
            .pair_mut(attacker, defender)
            .ok_or_else(|| anyhow::anyhow!("Battle {attacker} vs {defender}: commander not found"))?;

        let report = fight(a, d);
        self.reporter.log(report.narrate());

        if prune {
            for commander in &mut self.commanders {
                let removed = commander.prune_dead();
                if removed > 0 {
                    self.reporter
                        .log(format!("{} buries {removed} fallen soldiers", commander.name()));
                }
            }
        }
        self.battles.push(report);
        Ok(())
    }

    /// Mutable access to two different commanders at once.
    fn pair_mut(&mut self, first: &str, second: &str) -> Option<(&mut Commander, &mut Commander)> {
        let i = self.commanders.iter().position(|c| c.name() == first)?;
        let j = self.commanders.iter().position(|c| c.name() == second)?;
        if i == j {
            return None;
        }
        let (lo, hi) = (i.min(j), i.max(j));
        let (left, right) = self.commanders.split_at_mut(hi);
        let (low, high) = (&mut left[lo], &mut right[0]);
        Some(if i < j { (low, high) } else { (high, low) })
    }
}
