//! Config commands

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::{StaticConfig, get_config};
use crate::interfaces::cli::CliError;

/// Generate example configuration file
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 文件已存在时，非 --force 模式下交互确认
    if !force && Path::new(&path).exists() && !confirm_overwrite(&path)? {
        println!("{}", "Aborted.".red());
        return Ok(());
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    match StaticConfig::default().save_to_file(&path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Every value can also be set through IPI__SECTION__KEY environment variables"
                    .dimmed()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(CliError::CommandError(format!(
                "Unable to write configuration file: {}",
                e
            )))
        }
    }
}

fn confirm_overwrite(path: &str) -> Result<bool, CliError> {
    print!(
        "{} {} {}",
        "File already exists:".yellow(),
        path.blue(),
        "Overwrite? [y/N] ".yellow()
    );
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| CliError::ParseError(format!("Failed to read answer: {}", e)))?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Show the effective configuration (file + environment + defaults)
pub fn config_show(json: bool) -> Result<(), CliError> {
    let mut config = (*get_config()).clone();
    if let Some(key) = config.cloud.resource_key.as_mut() {
        *key = mask_secret(key);
    }

    let text = if json {
        serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::CommandError(format!("Failed to encode config: {}", e)))?
    } else {
        toml::to_string_pretty(&config)
            .map_err(|e| CliError::CommandError(format!("Failed to encode config: {}", e)))?
    };
    println!("{}", text);
    Ok(())
}

/// 只保留前四个字符
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("ABCDEFGH"), "ABCD****");
        assert_eq!(mask_secret("AB"), "AB****");
    }

    #[test]
    fn test_generate_with_force_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let path_str = path.to_string_lossy().into_owned();

        config_generate(Some(path_str.clone()), true).unwrap();
        let loaded = StaticConfig::try_load_from(&path_str).unwrap();
        assert_eq!(loaded.logging.level, "info");

        // 覆盖已有文件
        config_generate(Some(path_str), true).unwrap();
    }
}
