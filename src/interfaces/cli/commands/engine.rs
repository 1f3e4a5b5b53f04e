//! Engine dry-run command
//!
//! Applies the configured engine settings to a recording handle and prints
//! the native calls that a real engine would receive.

use colored::Colorize;

use crate::config::{EngineSettings, get_config};
use crate::engine::{
    ConfigCall, NativeEngineConfiguration, PerformanceProfile, RecordingConfigHandle,
    apply_settings,
};
use crate::interfaces::cli::CliError;

pub fn run_engine(
    profile: Option<PerformanceProfile>,
    concurrency: Option<u16>,
    json: bool,
) -> Result<(), CliError> {
    let mut settings = get_config().engine.clone();
    if let Some(profile) = profile {
        settings.performance_profile = profile;
    }
    if let Some(concurrency) = concurrency {
        settings.concurrency = concurrency;
    }

    let calls = record_calls(&settings)?;

    if json {
        let output = serde_json::json!({ "settings": settings, "calls": calls });
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| CliError::CommandError(format!("Failed to encode result: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    println!(
        "{} {} {}",
        "Performance profile:".bold().green(),
        settings.performance_profile.to_string().cyan(),
        format!("({})", settings.performance_profile.description()).dimmed()
    );
    if let Some(ref data_file) = settings.data_file {
        println!("{} {}", "Data file:".bold().green(), data_file.blue());
    }
    println!();
    println!("{}", "Native configuration calls:".bold().green());
    for (i, call) in calls.iter().enumerate() {
        println!("  {}. {}", i + 1, call.to_string().cyan());
    }
    Ok(())
}

fn record_calls(settings: &EngineSettings) -> Result<Vec<ConfigCall>, CliError> {
    let mut handle = RecordingConfigHandle::new();
    apply_settings(&mut NativeEngineConfiguration::new(&mut handle), settings)
        .map_err(|e| CliError::CommandError(format!("Failed to apply engine settings: {}", e)))?;
    Ok(handle.into_calls())
}
