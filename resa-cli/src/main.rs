//! Main entry point for the resa CLI.
//!
//! This is the command-line interface for the resa reservation system.
//! It provides one subcommand per engine operation:
//! - `book`: Book a reservation for a route
//! - `cancel`: Cancel a reservation by id
//! - `modify`: Update a reservation's personal fields
//! - `search`: Report whether an id is confirmed, waitlisted or unknown
//! - `assign-route`: Recompute and assign a route
//! - `undo`: Reverse the most recent confirmed booking
//! - `resize`: Change the pool capacity
//! - Report commands: `list`, `waitlist`, `slots`, `availability`,
//!   `route`, `locations`

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = resa::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Modify(cmd) => cmd.execute(&global),
        cli::Command::Search(cmd) => cmd.execute(&global),
        cli::Command::AssignRoute(cmd) => cmd.execute(&global),
        cli::Command::Undo(cmd) => cmd.execute(&global),
        cli::Command::Resize(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Waitlist(cmd) => cmd.execute(&global),
        cli::Command::Slots(cmd) => cmd.execute(&global),
        cli::Command::Availability(cmd) => cmd.execute(&global),
        cli::Command::Route(cmd) => cmd.execute(&global),
        cli::Command::Locations(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
