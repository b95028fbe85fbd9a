// crates/core/src/reading.rs
use char_stats_ports::TextSource;
use char_stats_shared_kernel::{Result, SourceName};

/// Reads a whole named source into one string.
///
/// The source is consumed line by line and rejoined with `'\n'`, so
/// platform line terminators are normalized and a trailing newline
/// does not survive the trip.
pub fn read_whole_file(source: &dyn TextSource, name: &str) -> Result<String> {
    let name = SourceName::new(name)?;
    let lines = source.read_lines(&name)?;
    Ok(lines.join("\n"))
}
