// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod text_source;

pub use persistence::{FileReader, FileWriter};
pub use text_source::FsTextSource;
