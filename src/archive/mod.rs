//! Ordered record containers and their frozen snapshots.
//!
//! Archive position is identity: the Nth member of a dense archive belongs to
//! the Nth registry entity. Sparse archives only hold entities that authored
//! the optional section, and their records line up only with each other.

pub mod narc;

pub use narc::NarcWriter;

use crate::errors::ArchiveError;

/// How a snapshot's records map onto NARC members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberLayout {
    /// Every record is its own member.
    PerRecord,
    /// All records are concatenated into a single member.
    Concatenated,
}

/// An archive with a fixed number of slots per entity.
#[derive(Debug, Clone)]
pub struct DenseArchive {
    file_name: &'static str,
    slots_per_entity: usize,
    records: Vec<Vec<u8>>,
}

impl DenseArchive {
    pub fn new(file_name: &'static str, slots_per_entity: usize) -> Self {
        Self {
            file_name,
            slots_per_entity,
            records: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn slots_per_entity(&self) -> usize {
        self.slots_per_entity
    }

    /// Appends one slot.
    pub fn push(&mut self, record: impl Into<Vec<u8>>) {
        self.records.push(record.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freezes the archive, checking that every one of `entity_count`
    /// entities filled exactly its slots.
    pub fn freeze(self, entity_count: usize) -> Result<ArchiveSnapshot, ArchiveError> {
        let expected = entity_count * self.slots_per_entity;
        if self.records.len() != expected {
            return Err(ArchiveError::SlotCountMismatch {
                archive: self.file_name,
                expected,
                found: self.records.len(),
            });
        }
        Ok(ArchiveSnapshot {
            file_name: self.file_name,
            layout: MemberLayout::PerRecord,
            records: self.records,
        })
    }
}

/// An archive that only receives a record when one is present.
#[derive(Debug, Clone)]
pub struct SparseArchive {
    file_name: &'static str,
    records: Vec<Vec<u8>>,
}

impl SparseArchive {
    pub fn new(file_name: &'static str) -> Self {
        Self {
            file_name,
            records: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Appends the record if there is one; `None` leaves no trace.
    pub fn push_present(&mut self, record: Option<impl Into<Vec<u8>>>) {
        if let Some(record) = record {
            self.records.push(record.into());
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn freeze(self) -> ArchiveSnapshot {
        ArchiveSnapshot {
            file_name: self.file_name,
            layout: MemberLayout::Concatenated,
            records: self.records,
        }
    }
}

/// Immutable view of a finished archive, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSnapshot {
    file_name: &'static str,
    layout: MemberLayout,
    records: Vec<Vec<u8>>,
}

impl ArchiveSnapshot {
    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn layout(&self) -> MemberLayout {
        self.layout
    }

    pub fn records(&self) -> &[Vec<u8>] {
        &self.records
    }

    pub fn to_narc(&self) -> NarcWriter {
        let mut narc = NarcWriter::new();
        match self.layout {
            MemberLayout::PerRecord => {
                for record in &self.records {
                    narc.pack_file(record);
                }
            }
            MemberLayout::Concatenated => {
                narc.pack_file(&self.records.concat());
            }
        }
        narc
    }
}
