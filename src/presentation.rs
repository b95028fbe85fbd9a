// src/presentation.rs
use std::io::Write;

use anyhow::Result;
use char_stats_core::{FrequencyIndex, IndexEntry};
use char_stats_shared_kernel::{OccurrenceCount, SourceName};
use serde::Serialize;

use crate::config::Config;
use crate::options::{OutputFormat, SortKey};

#[derive(Serialize)]
struct SourceReport<'a> {
    name: &'a SourceName,
    distinct: usize,
    total: OccurrenceCount,
    entries: Vec<IndexEntry>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    distinct: usize,
    total: OccurrenceCount,
}

#[derive(Serialize)]
struct Report<'a> {
    files: Vec<SourceReport<'a>>,
    summary: Summary,
}

pub fn print_reports(
    writer: &mut dyn Write,
    indexes: &[FrequencyIndex],
    config: &Config,
) -> Result<()> {
    let report = build_report(indexes, config);
    match config.format {
        OutputFormat::Json => print_json(writer, &report),
        OutputFormat::Yaml => print_yaml(writer, &report),
        OutputFormat::Jsonl => print_jsonl(writer, &report),
        OutputFormat::Md => print_markdown(writer, &report),
        OutputFormat::Csv => print_sv(writer, &report, ","),
        OutputFormat::Tsv => print_sv(writer, &report, "\t"),
        OutputFormat::Table => print_table(writer, &report),
    }
}

/// Printable label for a character in textual output.
///
/// Invisible characters get an escape or a `U+XXXX` form so table and
/// CSV rows stay one line per entry.
#[must_use]
pub fn char_label(ch: char) -> String {
    match ch {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        ch if ch.is_control() || ch.is_whitespace() => format!("U+{:04X}", u32::from(ch)),
        ch => ch.to_string(),
    }
}

fn build_report<'a>(indexes: &'a [FrequencyIndex], config: &Config) -> Report<'a> {
    let files: Vec<SourceReport<'a>> = indexes
        .iter()
        .map(|index| SourceReport {
            name: index.source_name(),
            distinct: index.len(),
            total: index.total(),
            entries: sorted_entries(index, config),
        })
        .collect();

    let summary = Summary {
        files: files.len(),
        distinct: files.iter().map(|file| file.distinct).sum(),
        total: files.iter().map(|file| file.total).sum(),
    };

    Report { files, summary }
}

fn sorted_entries(index: &FrequencyIndex, config: &Config) -> Vec<IndexEntry> {
    // entries() comes back sorted by code point, which doubles as the
    // tie-break for count sorting below.
    let mut entries = index.entries();
    match (config.sort, config.desc) {
        (SortKey::Count, false) => entries.sort_by(|a, b| {
            a.count.cmp(&b.count).then(a.character.cmp(&b.character))
        }),
        (SortKey::Count, true) => entries.sort_by(|a, b| {
            b.count.cmp(&a.count).then(a.character.cmp(&b.character))
        }),
        (SortKey::Char, false) => {}
        (SortKey::Char, true) => entries.reverse(),
    }
    if let Some(top) = config.top {
        entries.truncate(top);
    }
    entries
}

fn print_table(writer: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    writeln!(writer, "char_stats v{}", crate::VERSION)?;
    writeln!(writer)?;

    writeln!(writer, "    COUNT      CHAR      SOURCE")?;
    writeln!(writer, "----------------------------------------------")?;

    for file in &report.files {
        for entry in &file.entries {
            writeln!(
                writer,
                "{:>9}{:>10}      {}",
                entry.count.value(),
                char_label(entry.character),
                file.name
            )?;
        }
    }

    writeln!(writer, "---")?;
    writeln!(
        writer,
        "{:>9}      TOTAL ({} distinct, {} sources)",
        report.summary.total.value(),
        report.summary.distinct,
        report.summary.files
    )?;

    writeln!(writer)?;
    writeln!(writer, "[char_stats] Completed: {} sources processed.", report.summary.files)?;
    Ok(())
}

fn print_json(writer: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn print_yaml(writer: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    let yaml = serde_yaml::to_string(report)?;
    writeln!(writer, "{yaml}")?;
    Ok(())
}

fn print_jsonl(writer: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    for file in &report.files {
        let mut value = serde_json::to_value(file)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        writeln!(writer, "{}", serde_json::to_string(&value)?)?;
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": report.summary.files,
        "distinct": report.summary.distinct,
        "total": report.summary.total,
    });
    writeln!(writer, "{total}")?;
    Ok(())
}

fn print_markdown(writer: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    writeln!(writer, "### Character Statistics")?;
    writeln!(writer)?;
    writeln!(writer, "| Count | Char | Source |")?;
    writeln!(writer, "|:---:|:---:|:---|")?;

    for file in &report.files {
        let name = file.name.as_str().replace('|', "\\|");
        for entry in &file.entries {
            let label = char_label(entry.character).replace('|', "\\|");
            writeln!(writer, "| {} | {} | {} |", entry.count, label, name)?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

fn print_sv(writer: &mut dyn Write, report: &Report<'_>, delimiter: &str) -> Result<()> {
    writeln!(writer, "count{delimiter}char{delimiter}source")?;

    for file in &report.files {
        for entry in &file.entries {
            let label = sv_field(&char_label(entry.character), delimiter);
            let name = sv_field(file.name.as_str(), delimiter);
            writeln!(writer, "{}{delimiter}{label}{delimiter}{name}", entry.count)?;
        }
    }
    Ok(())
}

fn sv_field(field: &str, delimiter: &str) -> String {
    if delimiter == "," && (field.contains(',') || field.contains('"') || field.contains('\n')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
