use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::export_typescript;

pub fn export_types(output: String, banner: bool) -> Result<(), CliError> {
    let path = export_typescript(&output, banner)?;
    println!(
        "{} {}",
        "TypeScript declarations written to".green(),
        path.display().to_string().blue()
    );
    Ok(())
}
