/// Read-only reading dictionary consulted by segmenters
pub trait ReadingDictionary: Send + Sync {
    /// Canonical reading stored per key
    type Reading;

    /// Exact match on a contiguous character span
    fn lookup(&self, span: &str) -> Option<&[Self::Reading]>;

    /// Length in characters of the longest key present
    fn max_key_length(&self) -> usize;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
    pub max_key_length: usize,
}

/// Failure while building a dictionary from its source data.
///
/// Construction is all-or-nothing: any of these aborts the build and no
/// partially populated dictionary is handed out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("Malformed dictionary source: {0}")]
    Malformed(String),

    #[error("Empty key in dictionary source")]
    EmptyKey,

    #[error("Duplicate key {0:?}")]
    DuplicateKey(String),

    #[error("Entry {key:?}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Entry {key:?}: reading {reading:?} is not valid: {reason}")]
    InvalidReading {
        key: String,
        reading: String,
        reason: String,
    },

    #[error("Entry {key:?}: reading {reading:?} has {found} syllables, key has {expected} characters")]
    SyllableCount {
        key: String,
        reading: String,
        expected: usize,
        found: usize,
    },

    #[error("Entry {key:?}: character {character:?} has no standalone entry")]
    MissingCharacter { key: String, character: char },

    #[error("Entry {key:?}: conflicting readings {existing:?} and {incoming:?}")]
    Conflict {
        key: String,
        existing: Vec<String>,
        incoming: Vec<String>,
    },
}

impl ConstructionError {
    /// Key the error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ConstructionError::Malformed(_) | ConstructionError::EmptyKey => None,
            ConstructionError::DuplicateKey(key) => Some(key),
            ConstructionError::InvalidValue { key, .. }
            | ConstructionError::InvalidReading { key, .. }
            | ConstructionError::SyllableCount { key, .. }
            | ConstructionError::MissingCharacter { key, .. }
            | ConstructionError::Conflict { key, .. } => Some(key),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
