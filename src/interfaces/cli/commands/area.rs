//! Area command

use std::io::Read;

use colored::Colorize;

use crate::geometry::{AreaResult, calculate_area, try_calculate_area};
use crate::interfaces::cli::CliError;

pub fn run_area(
    wkt: Option<String>,
    file: Option<String>,
    strict: bool,
    json: bool,
) -> Result<(), CliError> {
    let wkt = read_wkt(wkt, file)?;

    let result = if strict {
        try_calculate_area(&wkt)?
    } else {
        calculate_area(&wkt)
    };

    if json {
        let output = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::CommandError(format!("Failed to encode result: {}", e)))?;
        println!("{}", output);
    } else {
        print_area(&result);
    }
    Ok(())
}

fn read_wkt(wkt: Option<String>, file: Option<String>) -> Result<String, CliError> {
    let text = match (wkt, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| CliError::ParseError(format!("Failed to read '{}': {}", path, e)))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::ParseError(format!("Failed to read stdin: {}", e)))?;
            buf
        }
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CliError::ParseError("No WKT input given".to_string()));
    }
    Ok(trimmed.to_string())
}

fn print_area(result: &AreaResult) {
    if result.geometries == 0 {
        println!("{} No geometries found", "ℹ".bold().blue());
        return;
    }

    println!(
        "{} {} km²",
        "Area:".bold().green(),
        result.area_km2.to_string().cyan()
    );
    println!(
        "{} {}",
        "Geometries:".bold().green(),
        result.geometries.to_string().cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_wkt_prefers_argument() {
        let text = read_wkt(Some("  POINT(1 2) \n".to_string()), None).unwrap();
        assert_eq!(text, "POINT(1 2)");
    }

    #[test]
    fn test_read_wkt_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))\n").unwrap();

        let text = read_wkt(None, Some(file.path().to_string_lossy().into_owned())).unwrap();
        assert!(text.starts_with("POLYGON"));
    }

    #[test]
    fn test_read_wkt_rejects_blank() {
        let err = read_wkt(Some("   ".to_string()), None).unwrap_err();
        assert!(matches!(err, CliError::ParseError(_)));
    }

    #[test]
    fn test_strict_mode_reports_parse_error() {
        let err = run_area(Some("POLYGON((".to_string()), None, true, false).unwrap_err();
        assert!(matches!(err, CliError::ParseError(_)));
    }

    #[test]
    fn test_lenient_mode_accepts_malformed() {
        assert!(run_area(Some("POLYGON((".to_string()), None, false, true).is_ok());
    }
}
