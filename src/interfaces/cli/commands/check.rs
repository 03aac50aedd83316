use colored::Colorize;
use tracing::info;

use crate::interfaces::cli::CliError;
use crate::services::{check_profiles, load_profiles};

pub fn check_file(file_path: String) -> Result<(), CliError> {
    let profiles = load_profiles(&file_path)?;
    let reports = check_profiles(&profiles);
    info!("Checked {} profile(s) from {}", reports.len(), file_path);

    if reports.is_empty() {
        println!("{}", "No profiles found.".yellow());
        return Ok(());
    }

    let mut failing = 0;
    for report in &reports {
        let status = if report.is_conforming() {
            "OK".green().bold()
        } else {
            failing += 1;
            "MISMATCH".red().bold()
        };
        println!(
            "{:>4} {} id={} user_id={} nickname={} tags={}",
            format!("#{}", report.index).dimmed(),
            status,
            report.id.to_string().cyan(),
            report.user_id.to_string().cyan(),
            report.nickname.blue(),
            report.tag_count
        );
        for mismatch in &report.mismatches {
            println!("       {} {}", "-".red(), mismatch);
        }
    }

    println!();
    if failing == 0 {
        println!(
            "{} {}",
            "All profiles conform:".green(),
            reports.len().to_string().bold()
        );
        Ok(())
    } else {
        Err(CliError::NonConforming(failing))
    }
}
