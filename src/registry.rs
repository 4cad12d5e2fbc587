//! The ordered list of entities a run compiles: base species followed by
//! alternate forms.

use crate::errors::{DatagenError, DatagenResult};
use std::fs;
use std::path::Path;

/// Reserved entries at the tail of the base list (egg and bad egg) that are
/// not part of the national dex.
const RESERVED_TAIL: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<String>,
    base_len: usize,
}

impl Registry {
    pub fn new(base: Vec<String>, forms: Vec<String>) -> Self {
        let base_len = base.len();
        let mut entries = base;
        entries.extend(forms);
        Self { entries, base_len }
    }

    /// Builds the registry from a `;`-delimited base list and the text of a
    /// forms file with one name per line.
    pub fn from_parts(base_list: &str, forms_text: &str) -> Self {
        Self::new(parse_base_list(base_list), parse_forms(forms_text))
    }

    pub fn load(base_list: &str, forms_path: &Path) -> DatagenResult<Self> {
        let forms_text =
            fs::read_to_string(forms_path).map_err(|e| DatagenError::io(forms_path, e))?;
        Ok(Self::from_parts(base_list, &forms_text))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// The last national dex species, the entry just before the reserved tail.
    pub fn last_national_dex(&self) -> Option<(usize, &str)> {
        let index = self.base_len.checked_sub(RESERVED_TAIL + 1)?;
        self.entries.get(index).map(|name| (index, name.as_str()))
    }
}

fn parse_base_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_forms(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
