// In: src/lib.rs

//! Species Data Compiler
//!
//! Turns per-species JSON documents into the byte-exact NARC archives and
//! generated C headers the game runtime reads. Every archive is positional:
//! record N belongs to entity N of the registry, so the whole pass runs in
//! registry order and is only written out once every entity has encoded.

// --- MODULE DECLARATIONS ---
pub mod archive;
pub mod compiler;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod registry;
pub mod source;
pub mod symbols;
pub mod tables;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Authored document shapes and the enumerations they reference.
pub use schema::{
    ConstantKind, EvolutionMethod, SpeciesDocument, SpriteDocument, TutorMove, TutorSchema,
};

// --- From this crate's modules (`src/`) ---

// The driver and its result.
pub use compiler::{CompiledOutput, Compiler};
pub use config::DatagenConfig;
pub use registry::Registry;

// Collaborator seams.
pub use archive::{ArchiveSnapshot, DenseArchive, NarcWriter, SparseArchive};
pub use source::{DirectorySource, SpeciesSource};
pub use symbols::{ConstantRegistry, SymbolResolver};

// Crate-specific error and result types.
pub use errors::{
    ArchiveError, CapacityError, CompileError, DatagenError, DatagenResult, ResolveError,
    ResolveResult, SchemaError,
};
