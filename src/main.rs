//! ipintel command-line entry point

use anyhow::Context;
use clap::Parser;

use ipintel::cli::Cli;
use ipintel::config::{get_config, init_config};
use ipintel::interfaces::cli::run_cli_command;
use ipintel::system::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 配置需先于日志加载
    init_config(&cli.config);
    let config = get_config();

    let log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::debug!("Configuration loaded from {}", cli.config);

    let result = run_cli_command(cli.command).await;
    // exit() 不会运行析构，先刷新日志
    drop(log_guard);

    if let Err(e) = result {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    Ok(())
}
