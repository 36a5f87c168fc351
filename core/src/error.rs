use crate::types::{Gold, RosterPosition};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Insufficient funds: need {needed} gold, treasury holds {available}")]
    InsufficientFunds { needed: Gold, available: Gold },

    #[error("No soldier at roster position {position} (roster size {roster_len})")]
    SoldierNotFound {
        position:   RosterPosition,
        roster_len: usize,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(#[source] bincode::Error),

    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Save is followed by {count} unexpected trailing bytes")]
    TrailingBytes { count: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[source] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WarError {
    /// True for every failure that means "this is not a loadable save".
    pub fn is_deserialization(&self) -> bool {
        matches!(
            self,
            Self::Deserialization(_) | Self::VersionMismatch { .. } | Self::TrailingBytes { .. }
        )
    }
}

pub type WarResult<T> = Result<T, WarError>;
