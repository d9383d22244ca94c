//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AssignRouteCommand, AvailabilityCommand, BookCommand, CancelCommand, ListCommand,
    LocationsCommand, ModifyCommand, ResizeCommand, RouteCommand, SearchCommand, SlotsCommand,
    UndoCommand, WaitlistCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing slot reservations.
#[derive(Parser)]
#[command(name = "resa")]
#[command(version, about = "Manage slot reservations with waitlisting and routing", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "RESA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a reservation for a route
    Book(BookCommand),

    /// Cancel a reservation by id
    Cancel(CancelCommand),

    /// Update a reservation's name, age or contact
    Modify(ModifyCommand),

    /// Report whether an id is confirmed, waitlisted or unknown
    Search(SearchCommand),

    /// Recompute and assign a route to a reservation
    AssignRoute(AssignRouteCommand),

    /// Reverse the most recent confirmed booking
    Undo(UndoCommand),

    /// Change the pool capacity
    Resize(ResizeCommand),

    /// List confirmed reservations
    List(ListCommand),

    /// Show the waitlist in queue order
    Waitlist(WaitlistCommand),

    /// Show the slot map
    Slots(SlotsCommand),

    /// Show the capacity/occupancy summary
    Availability(AvailabilityCommand),

    /// Show the shortest path between two locations
    Route(RouteCommand),

    /// List the locations of the route graph
    Locations(LocationsCommand),
}
