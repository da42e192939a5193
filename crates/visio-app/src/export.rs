//! CSV export of a meeting report

use std::io::Write;
use std::path::Path;

use log::info;
use visio_domain::service::MeetingReport;
use visio_types::{Category, DamageVector, Error, Result};

const HEADER: [&str; 6] = [
    "category",
    "label",
    "humanHealth",
    "ecosystemQuality",
    "climateChange",
    "resources",
];

/// Write the component breakdown, the category totals and the meeting total
pub fn write_csv<W: Write>(report: &MeetingReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER).map_err(export_error)?;

    for line in &report.components {
        write_row(&mut csv_writer, line.category.label(), &line.label, &line.damage)?;
    }
    for category in Category::ALL {
        write_row(
            &mut csv_writer,
            category.label(),
            "TOTAL",
            &report.category_damage(category),
        )?;
    }
    write_row(&mut csv_writer, "TOTAL", "TOTAL", &report.total_damage)?;

    csv_writer.flush()?;
    Ok(())
}

/// Export the report to a CSV file
pub fn export_csv(report: &MeetingReport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_csv(report, file)?;
    info!("Exported {} components to {}", report.components.len(), path.display());
    Ok(())
}

fn write_row<W: Write>(writer: &mut csv::Writer<W>, category: &str, label: &str, damage: &DamageVector) -> Result<()> {
    writer
        .write_record([
            category.to_string(),
            label.to_string(),
            damage.human_health.to_string(),
            damage.ecosystem_quality.to_string(),
            damage.climate_change.to_string(),
            damage.resources.to_string(),
        ])
        .map_err(export_error)
}

fn export_error(err: csv::Error) -> Error {
    Error::Export(err.to_string())
}
