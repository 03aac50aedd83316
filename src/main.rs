use clap::Parser;
use tracing::debug;

use dating_profile::cli::Cli;
use dating_profile::config::init_config;
use dating_profile::interfaces::cli::run_cli_command;
use dating_profile::system::init_logging;

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match init_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // 日志初始化失败不影响命令执行
    let guard = match init_logging(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", e.format_colored());
            None
        }
    };
    debug!("Running command: {:?}", cli.command);

    if let Err(e) = run_cli_command(cli.command, &config) {
        eprintln!("{}", e.format_colored());
        drop(guard);
        std::process::exit(1);
    }
}
