//! Command-line configuration.
//!
//! Positional arguments name the output and input locations. The base
//! species list comes from `--species` or the `SPECIES` environment
//! variable, `;`-delimited, and the constant tables from `--constants` or
//! `SPECIES_DATAGEN_CONSTANTS`.

use crate::errors::{DatagenError, DatagenResult, SchemaError};
use crate::registry::Registry;
use crate::source::DirectorySource;
use crate::symbols::ConstantRegistry;
use clap::Parser;
use schema::TutorSchema;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "species-datagen",
    about = "Compiles species documents into NARC archives and generated headers",
    version
)]
pub struct DatagenConfig {
    /// Directory the archives and headers are written to
    pub out_dir: PathBuf,

    /// Directory holding one `<species>/data.json` per entity
    pub root_dir: PathBuf,

    /// File listing alternate forms, one per line
    pub forms_registry: PathBuf,

    /// Tutor schema JSON document
    pub tutor_schema: PathBuf,

    /// RON file with the constant enumerations
    #[arg(long, env = "SPECIES_DATAGEN_CONSTANTS")]
    pub constants: PathBuf,

    /// Base species names, `;`-delimited
    #[arg(long, env = "SPECIES")]
    pub species: String,
}

impl DatagenConfig {
    /// Parse configuration from command-line arguments.
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn registry(&self) -> DatagenResult<Registry> {
        Registry::load(&self.species, &self.forms_registry)
    }

    pub fn constants(&self) -> DatagenResult<ConstantRegistry> {
        ConstantRegistry::load(&self.constants)
    }

    pub fn tutor_schema(&self) -> DatagenResult<TutorSchema> {
        let json = fs::read_to_string(&self.tutor_schema)
            .map_err(|e| DatagenError::io(&self.tutor_schema, e))?;
        Ok(TutorSchema::from_json(&json).map_err(|e| SchemaError::json("tutor schema", e))?)
    }

    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.root_dir)
    }
}
