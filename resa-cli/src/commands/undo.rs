//! Undo command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, GlobalOptions};
use clap::Args;

/// Reverse the most recent confirmed booking.
#[derive(Args)]
pub struct UndoCommand {}

impl UndoCommand {
    /// Execute the undo command.
    ///
    /// The undo history lives only for the current process, so a freshly
    /// loaded pool has nothing to undo; that is reported, not an error.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let mut engine = load_engine(&storage, &config);

        match engine.undo() {
            Some(id) => {
                engine.save_all(&storage);
                println!("Reverted booking {id}.");
            }
            None => println!("Nothing to undo."),
        }
        Ok(())
    }
}
