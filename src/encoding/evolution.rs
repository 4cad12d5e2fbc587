//! Evolution lists (`evo.narc`).
//!
//! Each species owns a fixed array of `MAX_EVOLUTIONS` slots of
//! `(method u16, param u16, target u16)`, zero-padded to a word boundary.
//! Unused slots stay zero, which reads back as `EVO_NONE`.

use super::{align_to_word, RecordWriter};
use crate::errors::{CapacityError, DatagenResult, SchemaError};
use crate::symbols::SymbolResolver;
use byteorder::{ByteOrder, LittleEndian};
use schema::{ConstantKind, EvolutionMethod, EvolutionParamKind, SpeciesDocument};
use serde_json::Value;
use std::str::FromStr;

pub const MAX_EVOLUTIONS: usize = 7;
const EVOLUTION_ENTRY_SIZE: usize = 6;
pub const EVOLUTION_RECORD_SIZE: usize = align_to_word(MAX_EVOLUTIONS * EVOLUTION_ENTRY_SIZE);

/// The middle column of an authored evolution row, shaped by its method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionParam {
    None,
    Threshold(u16),
    Item(String),
    Move(String),
    Species(String),
}

/// One evolution row as authored, before any name is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoredEvolution {
    pub method: EvolutionMethod,
    pub param: EvolutionParam,
    pub target: String,
}

/// A resolved slot of the evolution record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeciesEvolution {
    pub method: u16,
    pub param: u16,
    pub target_species: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvolutionList {
    pub entries: [SpeciesEvolution; MAX_EVOLUTIONS],
}

fn row_error(index: usize, reason: impl Into<String>) -> SchemaError {
    SchemaError::Evolution {
        index,
        reason: reason.into(),
    }
}

fn string_at<'a>(row: &'a [Value], column: usize, index: usize) -> Result<&'a str, SchemaError> {
    row.get(column)
        .and_then(Value::as_str)
        .ok_or_else(|| row_error(index, format!("column {column} must be a constant name")))
}

impl AuthoredEvolution {
    /// Reads the method tag first, then parses the rest of the row the way
    /// that method requires.
    pub fn parse(index: usize, row: &[Value]) -> Result<Self, SchemaError> {
        let tag = string_at(row, 0, index)?;
        let method = EvolutionMethod::from_str(tag)
            .map_err(|_| row_error(index, format!("unknown evolution method {tag}")))?;

        let (param, target_column) = match method.param_kind() {
            EvolutionParamKind::None => (EvolutionParam::None, 1),
            EvolutionParamKind::Threshold => {
                let value = row
                    .get(1)
                    .and_then(Value::as_u64)
                    .ok_or_else(|| row_error(index, format!("{tag} needs a numeric parameter")))?;
                let value = u16::try_from(value)
                    .map_err(|_| row_error(index, format!("parameter {value} does not fit in 16 bits")))?;
                (EvolutionParam::Threshold(value), 2)
            }
            EvolutionParamKind::Item => (EvolutionParam::Item(string_at(row, 1, index)?.to_string()), 2),
            EvolutionParamKind::Move => (EvolutionParam::Move(string_at(row, 1, index)?.to_string()), 2),
            EvolutionParamKind::Species => {
                (EvolutionParam::Species(string_at(row, 1, index)?.to_string()), 2)
            }
        };

        Ok(Self {
            method,
            param,
            target: string_at(row, target_column, index)?.to_string(),
        })
    }

    pub fn resolve(&self, resolver: &dyn SymbolResolver) -> DatagenResult<SpeciesEvolution> {
        let param = match &self.param {
            EvolutionParam::None => 0,
            EvolutionParam::Threshold(value) => *value,
            EvolutionParam::Item(name) => resolver.lookup_u16(ConstantKind::Item, name, "evolution item")?,
            EvolutionParam::Move(name) => resolver.lookup_u16(ConstantKind::Move, name, "evolution move")?,
            EvolutionParam::Species(name) => {
                resolver.lookup_u16(ConstantKind::Species, name, "evolution party species")?
            }
        };

        Ok(SpeciesEvolution {
            method: self.method.tag(),
            param,
            target_species: resolver.lookup_u16(ConstantKind::Species, &self.target, "evolution target")?,
        })
    }
}

impl EvolutionList {
    pub fn from_document(doc: &SpeciesDocument, resolver: &dyn SymbolResolver) -> DatagenResult<Self> {
        let mut list = Self::default();
        let Some(rows) = &doc.evolutions else {
            return Ok(list);
        };

        if rows.len() > MAX_EVOLUTIONS {
            return Err(CapacityError::TooManyEntries {
                record: "evolution list",
                max: MAX_EVOLUTIONS,
                found: rows.len(),
            }
            .into());
        }

        for (index, row) in rows.iter().enumerate() {
            list.entries[index] = AuthoredEvolution::parse(index, row)?.resolve(resolver)?;
        }
        Ok(list)
    }

    pub fn to_bytes(&self) -> [u8; EVOLUTION_RECORD_SIZE] {
        let mut w = RecordWriter::with_capacity(EVOLUTION_RECORD_SIZE);
        for entry in &self.entries {
            w.u16(entry.method).u16(entry.param).u16(entry.target_species);
        }
        w.align();
        w.finish_fixed()
    }

    /// Reads a record back, as the runtime would.
    pub fn from_bytes(bytes: &[u8; EVOLUTION_RECORD_SIZE]) -> Self {
        let mut list = Self::default();
        for (slot, chunk) in list
            .entries
            .iter_mut()
            .zip(bytes.chunks_exact(EVOLUTION_ENTRY_SIZE))
        {
            *slot = SpeciesEvolution {
                method: LittleEndian::read_u16(&chunk[0..2]),
                param: LittleEndian::read_u16(&chunk[2..4]),
                target_species: LittleEndian::read_u16(&chunk[4..6]),
            };
        }
        list
    }

    /// Slots up to the first `EVO_NONE`.
    pub fn authored(&self) -> impl Iterator<Item = &SpeciesEvolution> {
        self.entries
            .iter()
            .take_while(|entry| entry.method != EvolutionMethod::None.tag())
    }
}
