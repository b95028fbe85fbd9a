// tests/integration/output_formats.rs
use std::path::Path;

use char_stats::app;
use char_stats::config::Config;
use char_stats::options::{OutputFormat, SortKey};
use char_stats_infra::FsTextSource;

#[path = "../common/mod.rs"]
mod common;
use common::TempDir;

fn config_for(root: &Path, format: OutputFormat) -> Config {
    Config {
        names: vec!["sample.txt".to_string()],
        root: root.to_path_buf(),
        format,
        sort: SortKey::Count,
        desc: false,
        top: None,
        output: None,
        query: None,
        most_frequent: false,
        strict: false,
    }
}

fn render(config: &Config) -> String {
    let source = FsTextSource::new(&config.root);
    let mut buffer = Vec::new();
    let success = app::run_with(&source, config, &mut buffer).expect("run completes");
    assert!(success);
    String::from_utf8(buffer).expect("utf-8 output")
}

#[test]
fn table_output_has_header_and_total() {
    let temp = TempDir::new("table", "char_stats_formats");
    temp.write_file("sample.txt", "aabbbc");

    let output = render(&config_for(temp.path(), OutputFormat::Table));
    assert!(output.starts_with("char_stats v"));
    assert!(output.contains("COUNT"));
    assert!(output.contains("TOTAL (3 distinct, 1 sources)"));
}

#[test]
fn csv_output_is_one_row_per_character() {
    let temp = TempDir::new("csv", "char_stats_formats");
    temp.write_file("sample.txt", "aabbbc");

    let output = render(&config_for(temp.path(), OutputFormat::Csv));
    let rows: Vec<&str> = output.lines().collect();
    assert_eq!(rows[0], "count,char,source");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], "1,c,sample.txt");
    assert_eq!(rows[3], "3,b,sample.txt");
}

#[test]
fn yaml_output_contains_the_summary() {
    let temp = TempDir::new("yaml", "char_stats_formats");
    temp.write_file("sample.txt", "aabbbc");

    let output = render(&config_for(temp.path(), OutputFormat::Yaml));
    assert!(output.contains("files:"));
    assert!(output.contains("summary:"));
    assert!(output.contains("total: 6"));
}

#[test]
fn jsonl_output_ends_with_a_total_line() {
    let temp = TempDir::new("jsonl", "char_stats_formats");
    temp.write_file("sample.txt", "aabbbc");

    let output = render(&config_for(temp.path(), OutputFormat::Jsonl));
    let last = output.lines().last().expect("at least one line");
    let total: serde_json::Value = serde_json::from_str(last).expect("valid json");
    assert_eq!(total["type"], "total");
    assert_eq!(total["total"], 6);
}

#[test]
fn markdown_output_renders_a_table() {
    let temp = TempDir::new("md", "char_stats_formats");
    temp.write_file("sample.txt", "aabbbc");

    let output = render(&config_for(temp.path(), OutputFormat::Md));
    assert!(output.contains("### Character Statistics"));
    assert!(output.contains("| 3 | b | sample.txt |"));
}

#[test]
fn newlines_and_tabs_survive_into_the_report() {
    let temp = TempDir::new("escapes", "char_stats_formats");
    temp.write_file("sample.txt", "a\nb\ta\n");

    let output = render(&config_for(temp.path(), OutputFormat::Csv));
    assert!(output.contains("2,\\n,sample.txt"));
    assert!(output.contains("1,\\t,sample.txt"));
}

#[test]
fn descending_top_limits_the_rows() {
    let temp = TempDir::new("top", "char_stats_formats");
    temp.write_file("sample.txt", "aabbbc");

    let mut config = config_for(temp.path(), OutputFormat::Csv);
    config.desc = true;
    config.top = Some(1);

    let output = render(&config);
    let rows: Vec<&str> = output.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], "3,b,sample.txt");
}
