// src/main.rs
use std::process::ExitCode;

use char_stats::app;
use char_stats::args::Args;
use char_stats::config::Config;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match app::run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
