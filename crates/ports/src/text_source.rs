// crates/ports/src/text_source.rs
use char_stats_shared_kernel::{SourceName, SourceResult};

/// Port for reading named text sources.
///
/// Implementations decide how a [`SourceName`] maps onto actual
/// storage. The domain layer only sees this trait, so the lookup
/// strategy can be swapped without touching index construction.
pub trait TextSource: Send + Sync {
    /// Reads the whole source as one string, line terminators included.
    fn read_to_string(&self, name: &SourceName) -> SourceResult<String>;

    /// Reads the source as lines, terminators stripped.
    fn read_lines(&self, name: &SourceName) -> SourceResult<Vec<String>>;
}
