//! Output formatting module

use serde_json::json;
use visio_domain::model::{HardwareRecord, RecordBody, Software, TransportationMean};
use visio_domain::service::{generate_damage_report, MeetingReport};
use visio_types::{DamageCategory, DamageField, DamageKind, DamageRange, DamageVector, OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &MeetingReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", generate_damage_report(report));
    }
    Ok(())
}

pub fn output_hardware_list(output_format: OutputFormat, records: &[&HardwareRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!("{:<28} {:<10} {:<6} French", "Name", "Kind", "Size");
    println!("{}", "-".repeat(72));
    for record in records {
        let kind = if record.is_composite() { "composite" } else { "leaf" };
        let size = if record.is_size_dependent {
            record.size_unit.as_deref().unwrap_or("yes")
        } else {
            "-"
        };
        println!(
            "{:<28} {:<10} {:<6} {}",
            record.name,
            kind,
            size,
            record.french.as_deref().unwrap_or("")
        );
    }
    println!("\n{} hardware records", records.len());
    Ok(())
}

pub fn output_hardware_detail(output_format: OutputFormat, record: &HardwareRecord) -> Result<()> {
    let times: Vec<(DamageKind, f64)> = match record.leaf() {
        Some(profile) => DamageKind::ALL
            .iter()
            .map(|&kind| (kind, profile.compute_time(kind)))
            .collect(),
        None => Vec::new(),
    };

    if output_format == OutputFormat::Json {
        let compute_time: serde_json::Map<String, serde_json::Value> = times
            .iter()
            .map(|(kind, hours)| (kind.label().to_string(), json!(hours)))
            .collect();
        let value = json!({
            "record": record,
            "computeTime": compute_time,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("\nHardware: {}", record.name);
    println!("==========={}", "=".repeat(record.name.len()));
    if let Some(ref french) = record.french {
        println!("French:          {}", french);
    }
    if record.is_size_dependent {
        println!(
            "Size:            {} ({})",
            record.size_unit.as_deref().unwrap_or("unitless"),
            record
                .default_size
                .map(|s| format!("default {}", s))
                .unwrap_or_else(|| "required".to_string())
        );
    }

    match &record.body {
        RecordBody::Composite(children) => {
            println!("Components:");
            for child in children {
                println!("  - {}", child);
            }
        }
        RecordBody::Leaf(profile) => {
            println!("Lifetime:        {} years", profile.lifetime);
            println!("Active per day:  {} h", profile.operating_time_per_day);

            println!("\n--- Raw damage ---");
            for field in [DamageField::Embodied, DamageField::Operating, DamageField::Standby] {
                match profile.damage_field(field) {
                    Some(range) => print_range(field.key(), range),
                    None => println!("{:<10} (none)", field.key()),
                }
            }

            println!("\n--- Compute time ---");
            for (kind, hours) in &times {
                println!("{:<18} {} h", kind.label(), hours);
            }
        }
    }

    Ok(())
}

pub fn output_software(output_format: OutputFormat, software: &[&Software]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(software)?);
        return Ok(());
    }

    for sw in software {
        println!("\n{} ({})", sw.name, sw.display_name());
        if let Some(size) = sw.file_size {
            println!("  File size: {} MB", size);
        }
        if sw.download_speed.is_empty() {
            println!("  Bandwidth: unknown");
            continue;
        }
        println!("  {:>12} {:>12} {:>12}", "Instances", "Lower", "Upper");
        for (threshold, range) in &sw.download_speed {
            println!("  {:>12} {:>12} {:>12}", format!("{}+", threshold), range.lower, range.upper);
        }
    }
    println!("\n{} software (bandwidth in kbit/s)", software.len());
    Ok(())
}

pub fn output_transport(output_format: OutputFormat, means: &[&TransportationMean]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(means)?);
        return Ok(());
    }

    println!("{:<40} {}", "Name", "Damage per km");
    println!("{}", "-".repeat(96));
    for mean in means {
        println!("{:<40} {}", mean.name, format_vector(&mean.embodied));
    }
    println!("\n{} transportation means", means.len());
    Ok(())
}

fn print_range(key: &str, range: &DamageRange) {
    if range.is_fixed() {
        println!("{:<10} {}", key, format_vector(&range.upper));
    } else {
        println!("{:<10} lower {}", key, format_vector(&range.lower));
        println!("{:<10} upper {}", "", format_vector(&range.upper));
    }
}

fn format_vector(damage: &DamageVector) -> String {
    DamageCategory::ALL
        .iter()
        .map(|c| format!("{:.4e} {}", damage.get(*c), c.unit()))
        .collect::<Vec<_>>()
        .join("  ")
}
