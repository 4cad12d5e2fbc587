//! Name-to-id resolution for the symbolic constants used in species documents.
//!
//! The tables themselves are produced elsewhere; this module only loads them
//! from a RON registry file and answers lookups. Every lookup either yields
//! the id or fails, there is no fallback value.

use crate::errors::{CapacityError, DatagenResult, ResolveError, ResolveResult, SchemaError};
use schema::ConstantKind;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Resolves a constant name within one enumeration to its numeric id.
pub trait SymbolResolver {
    fn lookup(&self, kind: ConstantKind, name: &str) -> ResolveResult<u32>;

    /// Looks up a constant destined for a one-byte field.
    fn lookup_u8(&self, kind: ConstantKind, name: &str, field: &'static str) -> DatagenResult<u8> {
        let id = self.lookup(kind, name)?;
        Ok(narrow(id, field)?)
    }

    /// Looks up a constant destined for a two-byte field.
    fn lookup_u16(&self, kind: ConstantKind, name: &str, field: &'static str) -> DatagenResult<u16> {
        let id = self.lookup(kind, name)?;
        Ok(narrow(id, field)?)
    }
}

/// Narrows a resolved id into the width of the field that stores it.
pub fn narrow<T>(value: u32, field: &'static str) -> Result<T, CapacityError>
where
    T: TryFrom<u32> + Into<u32> + Bounded,
{
    T::try_from(value).map_err(|_| CapacityError::ValueOutOfRange {
        field,
        value,
        max: T::MAX_VALUE.into(),
    })
}

/// Upper bound of an unsigned field type.
pub trait Bounded: Sized {
    const MAX_VALUE: Self;
}

impl Bounded for u8 {
    const MAX_VALUE: Self = u8::MAX;
}

impl Bounded for u16 {
    const MAX_VALUE: Self = u16::MAX;
}

/// How one enumeration is written in the registry file.
#[derive(Debug, Clone, Deserialize)]
enum EnumerationDef {
    /// Ids are list positions, starting at 0.
    Sequential(Vec<String>),
    /// Ids are spelled out.
    Explicit(HashMap<String, u32>),
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    enumerations: HashMap<ConstantKind, EnumerationDef>,
}

/// Constant tables loaded once per run and shared read-only by every encoder.
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    tables: HashMap<ConstantKind, HashMap<String, u32>>,
}

impl ConstantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a registry from its RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, SchemaError> {
        let file: RegistryFile =
            ron::from_str(text).map_err(|e| SchemaError::Registry(e.to_string()))?;

        let mut registry = Self::new();
        for (kind, def) in file.enumerations {
            match def {
                EnumerationDef::Sequential(names) => {
                    registry = registry.with_sequential(kind, names);
                }
                EnumerationDef::Explicit(values) => {
                    registry.tables.entry(kind).or_default().extend(values);
                }
            }
        }
        Ok(registry)
    }

    /// Loads a registry file from disk.
    pub fn load(path: &Path) -> DatagenResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| crate::DatagenError::io(path, e))?;
        Ok(Self::from_ron_str(&text)?)
    }

    /// Registers an enumeration whose ids are the names' positions.
    pub fn with_sequential<I, S>(mut self, kind: ConstantKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = self.tables.entry(kind).or_default();
        for (id, name) in names.into_iter().enumerate() {
            table.insert(name.into(), id as u32);
        }
        self
    }

    /// Registers a single constant with an explicit value.
    pub fn with_value(mut self, kind: ConstantKind, name: impl Into<String>, value: u32) -> Self {
        self.tables.entry(kind).or_default().insert(name.into(), value);
        self
    }

    pub fn len(&self, kind: ConstantKind) -> usize {
        self.tables.get(&kind).map_or(0, HashMap::len)
    }
}

impl SymbolResolver for ConstantRegistry {
    fn lookup(&self, kind: ConstantKind, name: &str) -> ResolveResult<u32> {
        let table = self.tables.get(&kind).ok_or(ResolveError::UnknownKind(kind))?;
        table
            .get(name)
            .copied()
            .ok_or_else(|| ResolveError::UnknownName {
                kind,
                name: name.to_string(),
            })
    }
}
