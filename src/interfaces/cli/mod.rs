//! CLI interface module
//!
//! Dispatches clap-parsed commands to the codec and export services.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::ProfileError;
use commands::{check_file, config_generate, export_types, format_file};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Profile(ProfileError),
    CommandError(String),
    /// 结构检查未通过的资料数量
    NonConforming(usize),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Profile(err) => err.format_simple(),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::NonConforming(n) => {
                format!("Check failed: {} profile(s) do not conform", n)
            }
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Profile(err) => err.format_colored(),
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::NonConforming(n) => format!(
                "{} {}",
                "Check failed:".red().bold(),
                format!("{} profile(s) do not conform", n).white()
            ),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ProfileError> for CliError {
    fn from(err: ProfileError) -> Self {
        CliError::Profile(err)
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Check { file_path } => check_file(file_path),

        Commands::Fmt {
            file_path,
            output,
            compact,
        } => format_file(file_path, output, config.codec.pretty && !compact),

        Commands::ExportTypes { output, no_banner } => export_types(
            output.unwrap_or_else(|| config.export.output.clone()),
            config.export.banner && !no_banner,
        ),

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force)
            }
        },
    }
}
