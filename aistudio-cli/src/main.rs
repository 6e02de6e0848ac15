//! Operator CLI for the thinking-budget normalizer.
//!
//! Resolves `reasoning_effort` values exactly as the proxy would, using the
//! same settings file and environment, and prints the resulting directives.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use aistudio_core::config;
use aistudio_core::logger::{self, LogConfig};
use aistudio_core::thinking::{format_directive, normalize, ReasoningEffort};
use aistudio_types::ProcessDefaults;
use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logger::init_logging(&LogConfig {
        level: cli.log_level.clone(),
        log_dir: cli.log_dir.clone(),
        ..LogConfig::default()
    })
    .context("Failed to initialize logging")?;

    let defaults =
        config::load_defaults(cli.config.as_deref()).context("Failed to load thinking settings")?;

    match cli.command {
        Commands::Normalize { values, json } => run_normalize(&values, &defaults, json),
        Commands::Defaults { json } => show_defaults(&defaults, json),
    }
}

/// Decodes a command-line argument the way it would look inside a request body.
fn parse_raw_value(arg: &str) -> ReasoningEffort {
    serde_json::from_str::<Value>(arg)
        .map(ReasoningEffort::from)
        .unwrap_or_else(|_| ReasoningEffort::Str(arg.to_string()))
}

fn run_normalize(values: &[String], defaults: &ProcessDefaults, json: bool) -> Result<()> {
    let raws: Vec<ReasoningEffort> = if values.is_empty() {
        vec![ReasoningEffort::Absent]
    } else {
        values.iter().map(String::as_str).map(parse_raw_value).collect()
    };

    for raw in raws {
        let directive = normalize(raw, defaults);
        if json {
            println!("{}", serde_json::to_string(&directive)?);
        } else {
            println!("{}", format_directive(&directive));
        }
    }
    Ok(())
}

fn show_defaults(defaults: &ProcessDefaults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(defaults)?);
    } else {
        println!("default_thinking_enabled: {}", defaults.default_thinking_enabled);
        println!("default_budget:           {}", defaults.default_budget);
    }
    Ok(())
}
