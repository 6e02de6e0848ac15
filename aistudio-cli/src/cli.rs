use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aistudio-cli",
    about = "AI Studio Proxy - thinking-budget inspection",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, env = "AISTUDIO_CONFIG", help = "Path to JSON settings file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, global = true, help = "Also write rolling log files to this directory")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Normalize reasoning_effort values against the configured defaults")]
    Normalize {
        #[arg(
            allow_hyphen_values = true,
            help = "Raw values; valid JSON (5000, -1, null, \"low\") is decoded, anything else is a string. \
                    With no values, normalizes an absent field"
        )]
        values: Vec<String>,

        #[arg(short, long, help = "Output directives as JSON lines")]
        json: bool,
    },

    #[command(about = "Show the effective thinking defaults")]
    Defaults {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_defaults_to_info() {
        let cli = Cli::try_parse_from(["aistudio-cli", "defaults"])
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(cli.log_level, "info");
        }
    }

    #[test]
    fn test_negative_values_are_positional() {
        let cli = Cli::try_parse_from(["aistudio-cli", "normalize", "-1", "medium", "--json"])
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        match cli.command {
            Commands::Normalize { values, json } => {
                assert_eq!(values, vec!["-1".to_string(), "medium".to_string()]);
                assert!(json);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
