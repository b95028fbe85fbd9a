// src/config.rs
use std::path::PathBuf;

use crate::args::Args;
use crate::options::{OutputFormat, SortKey};

/// Runtime configuration resolved from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub names: Vec<String>,
    pub root: PathBuf,
    pub format: OutputFormat,
    pub sort: SortKey,
    pub desc: bool,
    pub top: Option<usize>,
    pub output: Option<PathBuf>,
    pub query: Option<char>,
    pub most_frequent: bool,
    pub strict: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            names: args.names,
            root: args.input.root,
            format: args.output.format,
            sort: args.output.sort,
            desc: args.output.desc,
            top: args.output.top,
            output: args.output.output,
            query: args.query.query,
            most_frequent: args.query.most_frequent,
            strict: args.input.strict,
        }
    }
}
