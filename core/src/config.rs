use crate::{rank::Rank, types::Gold};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommanderConfig {
    pub name: String,
    pub gold: Gold,
    /// Ranks to recruit at muster, in order.
    #[serde(default)]
    pub recruits: Vec<Rank>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    pub attacker: String,
    pub defender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub commanders: Vec<CommanderConfig>,
    /// Full-roster drills each commander runs before the battles.
    #[serde(default)]
    pub drill_rounds: u32,
    #[serde(default)]
    pub battles: Vec<BattleConfig>,
    #[serde(default = "default_prune_after_battle")]
    pub prune_after_battle: bool,
}

fn default_prune_after_battle() -> bool {
    true
}

impl ScenarioConfig {
    /// Load a scenario from a JSON file.
    /// In tests, use ScenarioConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content).map_err(|e| anyhow::anyhow!("Invalid scenario {path}: {e}"))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: ScenarioConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Commander names must be unique, and every battle must name two
    /// different commanders from the scenario.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut names = HashSet::new();
        for commander in &self.commanders {
            if !names.insert(commander.name.as_str()) {
                anyhow::bail!("Duplicate commander '{}'", commander.name);
            }
        }
        for battle in &self.battles {
            for side in [&battle.attacker, &battle.defender] {
                if !names.contains(side.as_str()) {
                    anyhow::bail!("Battle names unknown commander '{side}'");
                }
            }
            if battle.attacker == battle.defender {
                anyhow::bail!("Commander '{}' cannot fight themselves", battle.attacker);
            }
        }
        Ok(())
    }

    /// Two commanders, one drill round, one battle.
    pub fn default_test() -> Self {
        Self {
            commanders: vec![
                CommanderConfig {
                    name:     "Alexander".into(),
                    gold:     100,
                    recruits: vec![Rank::Private, Rank::Captain],
                },
                CommanderConfig {
                    name:     "Napoleon".into(),
                    gold:     100,
                    recruits: vec![Rank::Private, Rank::Corporal],
                },
            ],
            drill_rounds: 1,
            battles: vec![BattleConfig {
                attacker: "Alexander".into(),
                defender: "Napoleon".into(),
            }],
            prune_after_battle: true,
        }
    }
}
