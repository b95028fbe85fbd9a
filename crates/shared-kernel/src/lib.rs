// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CharStatsError, DomainError, DomainResult, ErrorContext, Result, SourceError, SourceResult,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{OccurrenceCount, SourceName};
