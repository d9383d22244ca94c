//! List command implementation.
//!
//! This module implements the `list` command, which displays confirmed
//! reservations in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use resa::{Reservation, ReservationEngine, RouteGraph};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 7] = ["id", "name", "age", "contact", "slot", "route", "cost"];

/// List confirmed reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "RESA_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let engine = load_engine(&storage, &config);

        match self.format {
            OutputFormat::Table => format_as_table(&engine)?,
            OutputFormat::Json => format_as_json(&engine)?,
            OutputFormat::Csv => format_as_delimited(&engine, b',')?,
            OutputFormat::Tsv => format_as_delimited(&engine, b'\t')?,
        }

        Ok(())
    }
}

/// Render a reservation's route as `From->To`, or `-` when unset.
fn route_text(graph: &RouteGraph, reservation: &Reservation) -> String {
    reservation.route().map_or_else(
        || "-".to_string(),
        |route| {
            format!(
                "{}->{}",
                graph.name_or_na(route.from),
                graph.name_or_na(route.to)
            )
        },
    )
}

/// Render a reservation's slot number, or `-` when waitlisted.
fn slot_text(reservation: &Reservation) -> String {
    reservation
        .slot()
        .map_or_else(|| "-".to_string(), |slot| slot.to_string())
}

/// Format reservations as a human-readable table.
fn format_as_table(engine: &ReservationEngine) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    // Print each reservation
    for reservation in engine.confirmed() {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            reservation.id(),
            reservation.name(),
            reservation.age(),
            reservation.contact(),
            slot_text(reservation),
            route_text(engine.graph(), reservation),
            reservation.cost(),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(engine: &ReservationEngine) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Build a JSON array of reservation objects
    let json_data: Vec<serde_json::Value> = engine
        .confirmed()
        .map(|reservation| {
            serde_json::json!({
                "id": reservation.id(),
                "name": reservation.name(),
                "age": reservation.age(),
                "contact": reservation.contact(),
                "slot": reservation.slot(),
                "route": reservation.route().map(|route| serde_json::json!({
                    "from": engine.graph().name_or_na(route.from),
                    "to": engine.graph().name_or_na(route.to),
                })),
                "cost": reservation.cost(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(engine: &ReservationEngine, delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    // Write header
    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    // Write each reservation
    for reservation in engine.confirmed() {
        writer
            .write_record(&[
                reservation.id().to_string(),
                reservation.name().to_string(),
                reservation.age().to_string(),
                reservation.contact().to_string(),
                slot_text(reservation),
                route_text(engine.graph(), reservation),
                reservation.cost().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
