//! Marshal command

use colored::Colorize;
use serde_json::Value;

use crate::interfaces::cli::CliError;
use crate::interop::{from_native, to_native};

pub fn run_marshal(text: &str) -> Result<(), CliError> {
    let native = to_native(&Value::String(text.to_string()))?;

    println!(
        "{} {} bytes + NUL",
        "Native buffer:".bold().green(),
        native.len().to_string().cyan()
    );
    println!("  {}", hex_bytes(native.as_bytes_with_nul()).dimmed());

    // SAFETY: the buffer is owned by `native` and zero-terminated
    let decoded = unsafe { from_native(native.as_ptr()) };
    native.release();

    match decoded {
        Some(ref s) if s == text => {
            println!("{} {}", "Round trip:".bold().green(), s.cyan());
            Ok(())
        }
        other => Err(CliError::CommandError(format!(
            "Round trip mismatch: expected {:?}, got {:?}",
            text, other
        ))),
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
