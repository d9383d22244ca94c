//! Search command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, GlobalOptions};
use clap::Args;
use resa::ReservationId;

/// Report whether an id is confirmed, waitlisted or unknown.
#[derive(Args)]
pub struct SearchCommand {
    /// Reservation id
    pub id: u32,
}

impl SearchCommand {
    /// Execute the search command.
    ///
    /// Search always succeeds; "not found" is a reported outcome, not an
    /// error.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let engine = load_engine(&storage, &config);

        let id = ReservationId::new(self.id);
        println!("Reservation {id}: {}", engine.search(id));
        Ok(())
    }
}
