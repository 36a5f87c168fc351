//! Wargames core: soldiers, commanders, battles, and save files.
//!
//! Everything here is single-threaded and synchronous. The only I/O is
//! saving and loading a commander against a caller-supplied writer/reader.

pub mod battle;
pub mod campaign;
pub mod commander;
pub mod config;
pub mod error;
pub mod rank;
pub mod reporter;
pub mod soldier;
pub mod types;

pub use battle::{fight, BattleOutcome, BattleReport};
pub use campaign::Campaign;
pub use commander::{Commander, DrillReport};
pub use config::ScenarioConfig;
pub use error::{WarError, WarResult};
pub use rank::Rank;
pub use reporter::Reporter;
pub use soldier::Soldier;
