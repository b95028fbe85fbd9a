//! # Core
//!
//! Domain logic for character frequency statistics:
//!
//! - [`index`]: The immutable [`FrequencyIndex`] and its queries
//! - [`reading`]: Whole-file reading through a [`TextSource`]
//! - [`functions`]: A registry of named unary functions
//!
//! Everything here reaches storage only through the ports crate, so
//! the domain stays testable with in-memory doubles.
//!
//! [`TextSource`]: char_stats_ports::TextSource

// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod functions;
pub mod index;
pub mod reading;

pub use functions::{FunctionMap, int_function_map};
pub use index::{FrequencyIndex, IndexEntry};
pub use reading::read_whole_file;
