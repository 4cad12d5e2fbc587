//! Where species documents come from.

use crate::errors::{DatagenError, DatagenResult, SchemaError};
use schema::{SpeciesDocument, SpriteDocument};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SPECIES_DATA_FILE: &str = "data.json";
pub const SPRITE_DATA_FILE: &str = "sprite_data.json";

/// Supplies the authored documents for an entity by registry name.
pub trait SpeciesSource {
    fn load_species(&self, name: &str) -> DatagenResult<SpeciesDocument>;

    /// `Ok(None)` when the entity has no companion sprite document.
    fn load_sprite(&self, name: &str) -> DatagenResult<Option<SpriteDocument>>;
}

/// Reads `<root>/<name>/data.json` and `<root>/<name>/sprite_data.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str, file: &str) -> PathBuf {
        self.root.join(name).join(file)
    }
}

impl SpeciesSource for DirectorySource {
    fn load_species(&self, name: &str) -> DatagenResult<SpeciesDocument> {
        let path = self.path_for(name, SPECIES_DATA_FILE);
        let json = fs::read_to_string(&path).map_err(|e| DatagenError::io(&path, e))?;
        SpeciesDocument::from_json(&json)
            .map_err(|e| SchemaError::json("species data", e).into())
    }

    fn load_sprite(&self, name: &str) -> DatagenResult<Option<SpriteDocument>> {
        let path = self.path_for(name, SPRITE_DATA_FILE);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DatagenError::io(&path, e)),
        };
        let doc = SpriteDocument::from_json(&json).map_err(|e| SchemaError::json("sprite data", e))?;
        Ok(Some(doc))
    }
}
