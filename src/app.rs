// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use char_stats_core::FrequencyIndex;
use char_stats_infra::{FileWriter, FsTextSource};
use char_stats_ports::TextSource;

use crate::config::Config;
use crate::presentation;

/// Executes one invocation end to end.
///
/// `Ok(true)` means the process should exit successfully, `Ok(false)`
/// that it completed but something went wrong along the way (missing
/// sources, failed queries). Hard failures come back as `Err`.
pub fn run(config: &Config) -> Result<bool> {
    let source = FsTextSource::new(&config.root);
    let mut writer = output_writer(config)?;
    let success = run_with(&source, config, writer.as_mut())?;
    writer.flush().context("flushing output")?;
    Ok(success)
}

/// Same as [`run`], but against an injected source and writer.
pub fn run_with(
    source: &dyn TextSource,
    config: &Config,
    writer: &mut dyn Write,
) -> Result<bool> {
    let indexes = build_indexes(source, config)?;
    let all_built = indexes.len() == config.names.len();

    if let Some(ch) = config.query {
        let all_found = print_counts(writer, &indexes, ch)?;
        Ok(all_built && all_found && !indexes.is_empty())
    } else if config.most_frequent {
        let all_resolved = print_most_frequent(writer, &indexes)?;
        Ok(all_built && all_resolved && !indexes.is_empty())
    } else {
        presentation::print_reports(writer, &indexes, config)?;
        Ok(!indexes.is_empty())
    }
}

fn build_indexes(source: &dyn TextSource, config: &Config) -> Result<Vec<FrequencyIndex>> {
    let mut indexes = Vec::with_capacity(config.names.len());
    for name in &config.names {
        match FrequencyIndex::from_source(source, name) {
            Ok(index) => indexes.push(index),
            Err(e) if config.strict => {
                return Err(e).with_context(|| format!("processing {name}"));
            }
            Err(e) => eprintln!("Error processing {name}: {e}"),
        }
    }
    Ok(indexes)
}

fn print_counts(
    writer: &mut dyn Write,
    indexes: &[FrequencyIndex],
    ch: char,
) -> Result<bool> {
    let mut all_found = true;
    for index in indexes {
        match index.count(ch) {
            Ok(count) => writeln!(writer, "{}: {count}", index.source_name())?,
            Err(e) => {
                eprintln!("Error querying {}: {e}", index.source_name());
                all_found = false;
            }
        }
    }
    Ok(all_found)
}

fn print_most_frequent(writer: &mut dyn Write, indexes: &[FrequencyIndex]) -> Result<bool> {
    let mut all_resolved = true;
    for index in indexes {
        match index.most_frequent() {
            Ok(ch) => {
                writeln!(writer, "{}: {}", index.source_name(), presentation::char_label(ch))?;
            }
            Err(e) => {
                eprintln!("Error querying {}: {e}", index.source_name());
                all_resolved = false;
            }
        }
    }
    Ok(all_resolved)
}

fn output_writer(config: &Config) -> Result<Box<dyn Write>> {
    Ok(if let Some(path) = &config.output {
        let writer = FileWriter::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        Box::new(writer)
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    })
}
