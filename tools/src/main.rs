//! war-runner: headless campaign runner for Wargames.
//!
//! Usage:
//!   war-runner --scenario campaign.json --save ./saves
//!   war-runner --load ./saves/Alexander.sav
//!   war-runner --json

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wargames_core::{BattleReport, Campaign, Commander, ScenarioConfig};

#[derive(serde::Serialize)]
struct CommanderSummary<'a> {
    name: &'a str,
    treasury: u64,
    soldiers: usize,
    strength: u64,
    composition: Vec<(&'static str, usize)>,
}

#[derive(serde::Serialize)]
struct CampaignSummary<'a> {
    commanders: Vec<CommanderSummary<'a>>,
    battles: &'a [BattleReport],
    reports: &'a [String],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|a| a == "--json");

    if let Some(path) = arg_value(&args, "--load") {
        let commander = Commander::load_from_path(path)
            .with_context(|| format!("failed to load {path}"))?;
        print_commander(&commander);
        return Ok(());
    }

    let config = match arg_value(&args, "--scenario") {
        Some(path) => ScenarioConfig::load(path)?,
        None => {
            log::info!("no --scenario given, playing the built-in scenario");
            ScenarioConfig::default_test()
        }
    };

    let campaign = Campaign::run(&config)?;

    if json_mode {
        let summary = build_summary(&campaign);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Wargames: war-runner");
        println!("  commanders: {}", campaign.commanders().len());
        println!("  battles:    {}", campaign.battles().len());
        println!();
        println!("=== REPORTS ===");
        campaign.reporter.print_reports(io::stdout().lock())?;
        println!();
        println!("=== ARMIES ===");
        for commander in campaign.commanders() {
            print_commander(commander);
        }
    }

    if let Some(dir) = arg_value(&args, "--save") {
        // Names differing only in letter case would share a file on
        // case-insensitive filesystems.
        let mut taken = HashSet::new();
        let mut targets = Vec::new();
        for commander in campaign.commanders() {
            let path = save_path(Path::new(dir), commander.name());
            if !taken.insert(path.to_string_lossy().to_lowercase()) {
                bail!(
                    "commanders' save files collide at {}; rename one of them",
                    path.display()
                );
            }
            targets.push((commander, path));
        }
        for (commander, path) in targets {
            commander
                .save_to_path(&path)
                .with_context(|| format!("failed to save {}", path.display()))?;
            log::info!("saved {} to {}", commander.name(), path.display());
        }
    }

    io::stdout().flush()?;
    Ok(())
}

fn build_summary(campaign: &Campaign) -> CampaignSummary<'_> {
    let commanders = campaign
        .commanders()
        .iter()
        .map(|c| CommanderSummary {
            name: c.name(),
            treasury: c.treasury(),
            soldiers: c.roster().len(),
            strength: c.army_strength(),
            composition: c
                .army_composition()
                .into_iter()
                .map(|(rank, count)| (rank.name(), count))
                .collect(),
        })
        .collect();

    CampaignSummary {
        commanders,
        battles: campaign.battles(),
        reports: campaign.reporter.reports(),
    }
}

fn print_commander(commander: &Commander) {
    println!("  {commander}");
    println!("    strength: {}", commander.army_strength());
    for (rank, count) in commander.army_composition() {
        println!("    {:<9} {count}", rank.to_string());
    }
}

/// Save file for a commander. ASCII letters, digits and `-` are kept; every
/// other byte of the name, `_` included, becomes `_xx` in hex, so distinct
/// names always map to distinct files.
fn save_path(dir: &Path, name: &str) -> PathBuf {
    let mut stem = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("_{byte:02x}"));
        }
    }
    if stem.is_empty() {
        stem.push('_');
    }
    dir.join(format!("{stem}.sav"))
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_kept() {
        let dir = Path::new("saves");
        assert_eq!(save_path(dir, "Alexander"), dir.join("Alexander.sav"));
        assert_eq!(save_path(dir, "von-Moltke"), dir.join("von-Moltke.sav"));
    }

    #[test]
    fn non_ascii_names_get_distinct_files() {
        let dir = Path::new("saves");
        let first = save_path(dir, "Ли");
        let second = save_path(dir, "Ким");
        assert_ne!(first, second);
        assert_eq!(first, dir.join("_d0_9b_d0_b8.sav"));
    }

    #[test]
    fn underscore_and_space_do_not_collide() {
        let dir = Path::new("saves");
        assert_ne!(save_path(dir, "a_b"), save_path(dir, "a b"));
        assert_eq!(save_path(dir, "a_b"), dir.join("a_5fb.sav"));
        assert_eq!(save_path(dir, "a b"), dir.join("a_20b.sav"));
    }

    #[test]
    fn empty_and_escaped_names_stay_apart() {
        let dir = Path::new("saves");
        assert_eq!(save_path(dir, ""), dir.join("_.sav"));
        assert_ne!(save_path(dir, ""), save_path(dir, "_"));
        assert_ne!(save_path(dir, "../x"), dir.join("../x.sav"));
    }
}
