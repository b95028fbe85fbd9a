// crates/shared-kernel/src/error.rs
use std::io;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CharStatsError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CharStatsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, CharStatsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A frequency index cannot be built from a missing or blank source name.
    #[error("Source name is empty")]
    EmptySourceName,

    /// Absence is an error here, not a zero count.
    #[error("Character {ch:?} never appeared in the source")]
    CharacterNotFound { ch: char },

    #[error("Frequency index has no entries")]
    EmptyIndex,

    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Failures raised by text-source collaborators.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source '{name}' doesn't exist")]
    NotFound { name: String },

    #[error("Failed to read source '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Source '{name}' is not valid UTF-8")]
    Decode { name: String },
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

impl SourceError {
    /// The source name the failure refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } | Self::Read { name, .. } | Self::Decode { name } => name,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CharStatsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CharStatsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CharStatsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
