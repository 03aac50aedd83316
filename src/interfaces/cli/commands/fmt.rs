use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::load_document;

pub fn format_file(
    file_path: String,
    output: Option<String>,
    pretty: bool,
) -> Result<(), CliError> {
    let doc = load_document(&file_path)?;
    let content = doc.encode(pretty)?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", content)).map_err(|e| {
                CliError::CommandError(format!("Failed to write {}: {}", path, e))
            })?;
            println!(
                "{} {} {}",
                "Formatted".green(),
                doc.profiles.len().to_string().bold(),
                format!("profile(s) -> {}", path).blue()
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}
