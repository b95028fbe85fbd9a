// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod source_name;

pub use counts::OccurrenceCount;
pub use source_name::SourceName;
