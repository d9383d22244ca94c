//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, storage and engine construction, location
//! parsing, and report printing.

use crate::error::CliError;
use std::path::PathBuf;
use resa::output::reports;
use resa::{
    Config, ConfigBuilder, LocationId, ReportBuffer, ReservationEngine, RouteGraph, Storage,
};

/// Byte capacity for report text printed by the CLI.
pub const REPORT_CAPACITY: usize = 64 * 1024;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Verbosity fields are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// Load configuration, honoring the global data directory override.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.data_dir(data_dir);
    }
    builder.build().map_err(CliError::from)
}

/// Open the storage layer for the configured data directory.
pub fn open_storage(config: &Config) -> Result<Storage, CliError> {
    Storage::open(config.storage_config()).map_err(CliError::from)
}

/// Load the engine from storage with the fixed demonstration graph.
pub fn load_engine(storage: &Storage, config: &Config) -> ReservationEngine {
    ReservationEngine::load_with_default_capacity(
        storage,
        RouteGraph::demo(),
        config.default_capacity,
    )
}

/// Parse a location given as a node index or a (case-insensitive) name.
///
/// Numeric input is passed through as an index; the engine validates it
/// against the graph. Non-numeric input must match a location name.
pub fn parse_location(graph: &RouteGraph, raw: &str) -> Result<LocationId, CliError> {
    if let Ok(index) = raw.parse::<usize>() {
        return Ok(LocationId::new(index));
    }
    graph.location_by_name(raw).ok_or_else(|| {
        CliError::InvalidArguments(format!(
            "unknown location '{raw}' (use an index or one of the names from `resa locations`)"
        ))
    })
}

/// Kinds of library report the CLI can print.
pub enum Report {
    /// Confirmed reservations in booking order.
    Confirmed,
    /// Waitlist in queue order.
    Waitlist,
    /// One line per slot.
    SlotMap,
    /// Capacity/occupancy summary.
    Availability,
}

/// Render a library report into a bounded buffer and print it.
pub fn print_report(engine: &ReservationEngine, report: &Report) {
    let mut buf = ReportBuffer::new(REPORT_CAPACITY);
    let _ = match report {
        Report::Confirmed => reports::write_confirmed(engine, &mut buf),
        Report::Waitlist => reports::write_waitlist(engine, &mut buf),
        Report::SlotMap => reports::write_slot_map(engine, &mut buf),
        Report::Availability => reports::write_availability(engine, &mut buf),
    };
    print!("{}", buf.as_str());
}
