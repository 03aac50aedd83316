//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for dating-profile using clap's derive macros.

use clap::{Parser, Subcommand};

/// dating-profile - Profile shapes for the dating web client
#[derive(Parser, Debug)]
#[command(name = "dating-profile")]
#[command(version)]
#[command(about = "Check, normalize and export dating profile shapes", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode profiles and report location slots that do not match their granularity
    ///
    /// Accepts a single profile, an array of profiles, or a response envelope.
    Check {
        /// Input JSON file
        file_path: String,
    },

    /// Decode profiles and write them back as normalized JSON
    Fmt {
        /// Input JSON file
        file_path: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Single-line output regardless of configuration
        #[arg(long)]
        compact: bool,
    },

    /// Write TypeScript declarations for the web client
    ExportTypes {
        /// Output file path (default: export.output from configuration)
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Omit the "generated file" banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["dating-profile", "check", "profile.json"]).unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Check { file_path } if file_path == "profile.json"));
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dating-profile",
            "export-types",
            "--no-banner",
            "-c",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(
            cli.command,
            Commands::ExportTypes {
                output: None,
                no_banner: true
            }
        ));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["dating-profile"]).is_err());
    }
}
