use schema::ConstantKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the species data compiler
///
/// Every message already includes its cause, so no variant reports a
/// separate `source()`.
#[derive(Debug, Error)]
pub enum DatagenError {
    /// A symbolic name did not resolve to a numeric id
    #[error("Resolution error: {0}")]
    Resolve(ResolveError),
    /// A document was missing a field or had one of the wrong shape
    #[error("Schema error: {0}")]
    Schema(SchemaError),
    /// An authored list or value does not fit its fixed-size record
    #[error("Capacity error: {0}")]
    Capacity(CapacityError),
    /// An archive did not receive the number of records its layout demands
    #[error("Archive error: {0}")]
    Archive(ArchiveError),
    /// An entity failed to compile; carries the entity name
    #[error(transparent)]
    Compile(Box<CompileError>),
    /// A source file could not be read or an output file written
    #[error("I/O error on {}: {error}", path.display())]
    Io { path: PathBuf, error: std::io::Error },
}

/// Errors raised by the symbol resolver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The enumeration knows no constant by this name
    #[error("unknown {kind} constant {name}")]
    UnknownName { kind: ConstantKind, name: String },
    /// The registry file did not define this enumeration at all
    #[error("no {0} enumeration is registered")]
    UnknownKind(ConstantKind),
}

/// Errors related to document shape
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document failed to deserialize
    #[error("malformed {document}: {error}")]
    Json {
        document: &'static str,
        error: serde_json::Error,
    },
    /// An evolution row does not match the shape its method demands
    #[error("evolution entry {index}: {reason}")]
    Evolution { index: usize, reason: String },
    /// A `by_tm` label is not `TMnn` or `HMnn`
    #[error("unrecognized TM learnset entry {0}")]
    TmLabel(String),
    /// A `by_tutor` move that no tutor in the schema teaches
    #[error("Move {0} is not available via move tutors")]
    NotTutorable(String),
    /// A gendered offset required by the species' gender ratio is absent
    #[error("sprite data is missing the {face} {gender} y_offset")]
    MissingOffset {
        face: &'static str,
        gender: &'static str,
    },
    /// A field that is optional in the document shape but required here
    #[error("{document} is missing {field}")]
    MissingField {
        document: &'static str,
        field: &'static str,
    },
    /// A constant registry file failed to parse
    #[error("malformed constant registry: {0}")]
    Registry(String),
}

/// Errors related to fixed-size records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// More entries were authored than the record has slots for
    #[error("{record} holds at most {max} entries, found {found}")]
    TooManyEntries {
        record: &'static str,
        max: usize,
        found: usize,
    },
    /// A value does not fit the width of its encoded field
    #[error("{field} value {value} exceeds the encodable maximum {max}")]
    ValueOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Errors related to archive assembly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    /// A dense archive's slot count disagrees with the registry
    #[error("{archive} expects {expected} records, got {found}")]
    SlotCountMismatch {
        archive: &'static str,
        expected: usize,
        found: usize,
    },
}

/// A failure attributed to the entity being compiled when it happened.
#[derive(Debug, Error)]
#[error("exception parsing data file for {species}: {cause}")]
pub struct CompileError {
    pub species: String,
    pub cause: DatagenError,
}

impl CompileError {
    pub fn new(species: impl Into<String>, cause: impl Into<DatagenError>) -> Self {
        Self {
            species: species.into(),
            cause: cause.into(),
        }
    }
}

impl From<ResolveError> for DatagenError {
    fn from(err: ResolveError) -> Self {
        DatagenError::Resolve(err)
    }
}

impl From<SchemaError> for DatagenError {
    fn from(err: SchemaError) -> Self {
        DatagenError::Schema(err)
    }
}

impl From<CapacityError> for DatagenError {
    fn from(err: CapacityError) -> Self {
        DatagenError::Capacity(err)
    }
}

impl From<ArchiveError> for DatagenError {
    fn from(err: ArchiveError) -> Self {
        DatagenError::Archive(err)
    }
}

impl From<CompileError> for DatagenError {
    fn from(err: CompileError) -> Self {
        DatagenError::Compile(Box::new(err))
    }
}

impl DatagenError {
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        DatagenError::Io {
            path: path.into(),
            error,
        }
    }
}

impl SchemaError {
    pub fn json(document: &'static str, error: serde_json::Error) -> Self {
        SchemaError::Json { document, error }
    }
}

/// Type alias for Results using DatagenError
pub type DatagenResult<T> = Result<T, DatagenError>;

/// Type alias for Results using ResolveError
pub type ResolveResult<T> = Result<T, ResolveError>;
