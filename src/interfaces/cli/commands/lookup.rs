//! Lookup command

use colored::Colorize;

use crate::config::get_config;
use crate::engine::{WeightedValueSequence, WeightedValues};
use crate::interfaces::cli::CliError;
use crate::services::{IpIntelligence, IpIntelligenceProvider};

pub async fn run_lookup(ip: &str, json: bool) -> Result<(), CliError> {
    let config = get_config();
    let provider = IpIntelligenceProvider::new(&config, None)?;
    let result = provider.lookup(ip).await?;

    if json {
        let output = serde_json::json!({
            "provider": provider.provider_name(),
            "result": result,
            "area": result.area(),
        });
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| CliError::CommandError(format!("Failed to encode result: {}", e)))?;
        println!("{}", text);
    } else {
        print_result(provider.provider_name(), &result);
    }
    Ok(())
}

fn format_weighted(values: &WeightedValues<String>) -> String {
    if values.is_empty() {
        return "-".dimmed().to_string();
    }
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_result(provider: &str, result: &IpIntelligence) {
    println!(
        "{} {} {}",
        "IP intelligence for".bold().green(),
        result.ip.cyan(),
        format!("(via {})", provider).dimmed()
    );
    println!();

    let rows = [
        ("Registered name", &result.registered_name),
        ("Registered owner", &result.registered_owner),
        ("Registered country", &result.registered_country),
        ("Country code", &result.country_code),
        ("Town", &result.town),
    ];
    for (label, values) in rows {
        println!("  {:<20} {}", label.bold(), format_weighted(values));
    }

    if let (Some(lat), Some(lon)) = (result.latitude, result.longitude) {
        println!("  {:<20} {:.4}, {:.4}", "Location".bold(), lat, lon);
    }
    if let Some(radius) = result.accuracy_radius {
        println!("  {:<20} {} m", "Accuracy radius".bold(), radius);
    }

    match result.area() {
        Some(area) => println!(
            "  {:<20} {} km² ({} geometries)",
            "Area".bold(),
            area.area_km2.to_string().cyan(),
            area.geometries
        ),
        None => println!("  {:<20} {}", "Area".bold(), "-".dimmed()),
    }
}
