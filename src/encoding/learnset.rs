//! Level-up learnsets (`wotbl.narc`).
//!
//! Entries are packed u16s, `move` in the low 9 bits and `level` in the high
//! 7, terminated by an all-ones sentinel. The record is variable length; its
//! size is rounded up to a word with zero bytes, since the runtime scans for
//! the sentinel and the archive writer would otherwise pad with `0xFF`.

use super::RecordWriter;
use crate::errors::{CapacityError, DatagenResult};
use crate::symbols::SymbolResolver;
use byteorder::{ByteOrder, LittleEndian};
use schema::{ConstantKind, SpeciesDocument};

/// Most authored entries a learnset may hold, not counting the sentinel.
pub const MAX_LEARNSET_ENTRIES: usize = 26;
pub const LEARNSET_ENTRY_SIZE: usize = 2;

const MOVE_BITS: u32 = 9;
const MOVE_MASK: u16 = (1 << MOVE_BITS) - 1;
const LEVEL_MASK: u16 = (1 << (16 - MOVE_BITS)) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnsetEntry {
    pub move_id: u16,
    pub level: u16,
}

impl LearnsetEntry {
    pub const SENTINEL: Self = Self {
        move_id: MOVE_MASK,
        level: LEVEL_MASK,
    };

    pub fn pack(self) -> u16 {
        (self.move_id & MOVE_MASK) | ((self.level & LEVEL_MASK) << MOVE_BITS)
    }

    pub fn unpack(raw: u16) -> Self {
        Self {
            move_id: raw & MOVE_MASK,
            level: raw >> MOVE_BITS,
        }
    }

    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }
}

/// A sentinel-terminated learnset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpLearnset {
    entries: Vec<LearnsetEntry>,
}

impl LevelUpLearnset {
    pub fn from_document(doc: &SpeciesDocument, resolver: &dyn SymbolResolver) -> DatagenResult<Self> {
        let by_level = &doc.learnset.by_level;
        if by_level.len() > MAX_LEARNSET_ENTRIES {
            return Err(CapacityError::TooManyEntries {
                record: "level-up learnset",
                max: MAX_LEARNSET_ENTRIES,
                found: by_level.len(),
            }
            .into());
        }

        let mut entries = Vec::with_capacity(by_level.len() + 1);
        for (level, move_name) in by_level {
            let move_id = resolver.lookup_u16(ConstantKind::Move, move_name, "learnset move")?;
            // The all-ones move id is reserved for the sentinel.
            if move_id >= MOVE_MASK {
                return Err(CapacityError::ValueOutOfRange {
                    field: "learnset move",
                    value: move_id.into(),
                    max: u32::from(MOVE_MASK) - 1,
                }
                .into());
            }
            if *level > LEVEL_MASK {
                return Err(CapacityError::ValueOutOfRange {
                    field: "learnset level",
                    value: (*level).into(),
                    max: LEVEL_MASK.into(),
                }
                .into());
            }
            entries.push(LearnsetEntry {
                move_id,
                level: *level,
            });
        }
        entries.push(LearnsetEntry::SENTINEL);

        Ok(Self { entries })
    }

    /// Entry count including the sentinel.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[LearnsetEntry] {
        &self.entries
    }

    /// The encoded record, word-aligned with zero bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = RecordWriter::with_capacity(self.entries.len() * LEARNSET_ENTRY_SIZE + 2);
        for entry in &self.entries {
            w.u16(entry.pack());
        }
        w.align();
        w.finish()
    }

    /// Reads entries back up to and including the sentinel.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut entries = Vec::new();
        for chunk in bytes.chunks_exact(LEARNSET_ENTRY_SIZE) {
            let entry = LearnsetEntry::unpack(LittleEndian::read_u16(chunk));
            entries.push(entry);
            if entry.is_sentinel() {
                break;
            }
        }
        Self { entries }
    }
}
