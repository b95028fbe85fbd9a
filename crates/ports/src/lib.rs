//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`text_source`]: Access to named text sources
//!
//! These ports allow the domain layer to remain independent of
//! specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod text_source;

pub use text_source::TextSource;
