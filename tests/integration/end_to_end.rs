// tests/integration/end_to_end.rs
use std::{fs, path::Path};

use char_stats::app;
use char_stats::config::Config;
use char_stats::options::{OutputFormat, SortKey};
use char_stats_core::read_whole_file;
use char_stats_infra::FsTextSource;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::TempDir;

fn base_config(root: &Path, names: &[&str]) -> Config {
    Config {
        names: names.iter().map(|name| (*name).to_string()).collect(),
        root: root.to_path_buf(),
        format: OutputFormat::Json,
        sort: SortKey::Count,
        desc: false,
        top: None,
        output: None,
        query: None,
        most_frequent: false,
        strict: false,
    }
}

fn read_json(path: &Path) -> Value {
    let contents = fs::read_to_string(path).expect("output exists");
    serde_json::from_str(&contents).expect("valid JSON")
}

#[test]
fn end_to_end_generates_expected_json() {
    let temp = TempDir::new("end_to_end", "char_stats_integration");
    temp.write_file("sample.txt", "aabbbc");

    let output_path = temp.path().join("result.json");
    let mut config = base_config(temp.path(), &["sample.txt"]);
    config.output = Some(output_path.clone());

    assert!(app::run(&config).expect("run completes"));

    let json = read_json(&output_path);
    assert_eq!(json["files"][0]["name"], "sample.txt");
    assert_eq!(json["files"][0]["distinct"], 3);
    assert_eq!(json["files"][0]["total"], 6);
    assert_eq!(json["files"][0]["entries"][0]["char"], "c");
    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["total"], 6);
}

#[test]
fn multiple_sources_accumulate_the_summary() {
    let temp = TempDir::new("multi_source", "char_stats_integration");
    temp.write_file("first.txt", "aabbbc");
    temp.write_file("second.txt", "xy");

    let output_path = temp.path().join("result.json");
    let mut config = base_config(temp.path(), &["first.txt", "second.txt"]);
    config.output = Some(output_path.clone());

    assert!(app::run(&config).expect("run completes"));

    let json = read_json(&output_path);
    assert_eq!(json["files"][0]["name"], "first.txt");
    assert_eq!(json["files"][1]["name"], "second.txt");
    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["total"], 8);
}

#[test]
fn missing_sources_are_skipped_without_strict() {
    let temp = TempDir::new("missing_skip", "char_stats_integration");
    temp.write_file("present.txt", "abc");

    let output_path = temp.path().join("result.json");
    let mut config = base_config(temp.path(), &["present.txt", "ghost.txt"]);
    config.output = Some(output_path.clone());

    assert!(app::run(&config).expect("run completes"));

    let json = read_json(&output_path);
    assert_eq!(json["files"].as_array().expect("files array").len(), 1);
    assert_eq!(json["summary"]["files"], 1);
}

#[test]
fn strict_mode_surfaces_the_first_error() {
    let temp = TempDir::new("strict_abort", "char_stats_integration");
    temp.write_file("present.txt", "abc");

    let mut config = base_config(temp.path(), &["ghost.txt", "present.txt"]);
    config.output = Some(temp.path().join("result.json"));
    config.strict = true;

    let err = app::run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("ghost.txt"));
}

#[test]
fn absolute_names_bypass_the_root() {
    let data = TempDir::new("abs_data", "char_stats_integration");
    let file = data.write_file("far.txt", "zz");
    let unrelated = TempDir::new("abs_root", "char_stats_integration");

    let output_path = unrelated.path().join("result.json");
    let name = file.to_str().expect("utf-8 path");
    let mut config = base_config(unrelated.path(), &[name]);
    config.output = Some(output_path.clone());

    assert!(app::run(&config).expect("run completes"));

    let json = read_json(&output_path);
    assert_eq!(json["files"][0]["name"], name);
    assert_eq!(json["files"][0]["total"], 2);
}

#[test]
fn whole_file_reading_normalizes_crlf() {
    let temp = TempDir::new("crlf", "char_stats_integration");
    temp.write_file("dos.txt", "x\r\ny\r\n");

    let source = FsTextSource::new(temp.path());
    let text = read_whole_file(&source, "dos.txt").expect("readable");
    assert_eq!(text, "x\ny");
}

#[test]
fn query_writes_one_line_per_source() {
    let temp = TempDir::new("query_out", "char_stats_integration");
    temp.write_file("sample.txt", "aabbbc");

    let output_path = temp.path().join("counts.txt");
    let mut config = base_config(temp.path(), &["sample.txt"]);
    config.output = Some(output_path.clone());
    config.query = Some('b');

    assert!(app::run(&config).expect("run completes"));

    let contents = fs::read_to_string(&output_path).expect("output exists");
    assert_eq!(contents, "sample.txt: 3\n");
}
