//! Save/Load for a commander's full state.
//!
//! Uses bincode (varint integers, bounded size) over explicit record types,
//! so the on-disk layout never depends on the in-memory structs.
//!
//! Layout: `version: u32` followed by a `CommanderRecord`.

use super::Commander;
use crate::{
    error::{WarError, WarResult},
    rank::Rank,
    soldier::Soldier,
    types::{Experience, Gold},
};
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::Path,
};

/// Version number for the save format (increment when the layout changes).
pub const SAVE_VERSION: u32 = 1;

/// Upper bound on bytes read or written for one save.
pub const MAX_SAVE_BYTES: u64 = 1024 * 1024;

/// A complete save: format version plus the commander.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version:   u32,
    pub commander: CommanderRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommanderRecord {
    pub name:     String,
    pub treasury: Gold,
    pub roster:   Vec<SoldierRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldierRecord {
    /// Encoded as the variant index, Private = 0 through Major = 3.
    pub rank:       Rank,
    pub experience: Experience,
}

impl From<&Soldier> for SoldierRecord {
    fn from(soldier: &Soldier) -> Self {
        Self {
            rank:       soldier.rank,
            experience: soldier.experience,
        }
    }
}

impl From<SoldierRecord> for Soldier {
    fn from(record: SoldierRecord) -> Self {
        Soldier::new(record.rank, record.experience)
    }
}

impl From<&Commander> for CommanderRecord {
    fn from(commander: &Commander) -> Self {
        Self {
            name:     commander.name.clone(),
            treasury: commander.treasury,
            roster:   commander.roster.iter().map(SoldierRecord::from).collect(),
        }
    }
}

impl From<CommanderRecord> for Commander {
    fn from(record: CommanderRecord) -> Self {
        Self {
            name:     record.name,
            treasury: record.treasury,
            roster:   record.roster.into_iter().map(Soldier::from).collect(),
        }
    }
}

fn codec() -> impl Options {
    bincode::options().with_limit(MAX_SAVE_BYTES)
}

impl Commander {
    /// Write the complete commander state to `writer`.
    pub fn save<W: Write>(&self, writer: W) -> WarResult<()> {
        let file = SaveFile {
            version:   SAVE_VERSION,
            commander: CommanderRecord::from(self),
        };
        codec()
            .serialize_into(writer, &file)
            .map_err(WarError::Serialization)?;
        log::debug!(
            "{}: saved state ({} soldiers, {} gold)",
            self.name,
            self.roster.len(),
            self.treasury
        );
        Ok(())
    }

    /// Rebuild a commander from bytes produced by [`Commander::save`].
    pub fn load<R: Read>(mut reader: R) -> WarResult<Commander> {
        // The version is decoded on its own so a save from another format
        // reports a mismatch rather than a garbled body.
        let version: u32 = codec()
            .deserialize_from(&mut reader)
            .map_err(WarError::Deserialization)?;
        if version != SAVE_VERSION {
            return Err(WarError::VersionMismatch {
                expected: SAVE_VERSION,
                found:    version,
            });
        }

        let record: CommanderRecord = codec()
            .deserialize_from(&mut reader)
            .map_err(WarError::Deserialization)?;
        let commander = Commander::from(record);
        log::debug!(
            "{}: loaded state ({} soldiers, {} gold)",
            commander.name,
            commander.roster.len(),
            commander.treasury
        );
        Ok(commander)
    }

    /// Save to a file, creating parent directories as needed.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> WarResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a save file. The file must hold exactly one save; anything
    /// after it is rejected with `TrailingBytes`.
    pub fn load_from_path(path: impl AsRef<Path>) -> WarResult<Commander> {
        let mut bytes = Vec::new();
        File::open(path.as_ref())?
            .take(MAX_SAVE_BYTES + 1)
            .read_to_end(&mut bytes)?;

        let mut rest = &bytes[..];
        let commander = Commander::load(&mut rest)?;
        if !rest.is_empty() {
            return Err(WarError::TrailingBytes { count: rest.len() });
        }
        Ok(commander)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &impl Serialize) -> Vec<u8> {
        codec().serialize(value).unwrap()
    }

    #[test]
    fn version_leads_the_encoding() {
        let commander = Commander::new("Scipio", 12);
        let mut buffer = Vec::new();
        commander.save(&mut buffer).unwrap();

        let header = encode(&SAVE_VERSION);
        assert_eq!(&buffer[..header.len()], &header[..]);
    }

    #[test]
    fn rank_is_stored_as_variant_index() {
        let record = SoldierRecord { rank: Rank::Captain, experience: 7 };
        assert_eq!(encode(&record), vec![2, 7]);
    }

    #[test]
    fn unknown_rank_tag_is_rejected() {
        let mut bytes = encode(&SAVE_VERSION);
        bytes.extend(encode(&"Scipio"));
        bytes.extend(encode(&12u64));
        bytes.extend(encode(&1u64)); // roster length
        bytes.extend([9, 1]); // rank tag 9 does not exist

        let err = Commander::load(&bytes[..]).unwrap_err();
        assert!(matches!(err, WarError::Deserialization(_)), "got {err:?}");
    }

    #[test]
    fn oversized_length_prefix_is_rejected() {
        let mut bytes = encode(&SAVE_VERSION);
        bytes.extend(encode(&(MAX_SAVE_BYTES * 4))); // claimed name length

        let err = Commander::load(&bytes[..]).unwrap_err();
        assert!(err.is_deserialization(), "got {err:?}");
    }
}
