//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, GlobalOptions};
use clap::Args;
use resa::ReservationId;

/// Cancel a reservation by id.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    pub id: u32,
}

impl CancelCommand {
    /// Execute the cancel command.
    ///
    /// Cancellation is idempotent: an unknown id is reported but not an
    /// error. Either way one waitlist promotion is attempted, matching the
    /// engine's contract.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let mut engine = load_engine(&storage, &config);

        let id = ReservationId::new(self.id);
        let removed = engine.cancel(id);
        engine.save_all(&storage);

        if removed {
            println!("Cancelled reservation {id}.");
        } else {
            println!("No confirmed reservation {id}.");
        }
        Ok(())
    }
}
