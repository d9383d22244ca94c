//! Resize command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, GlobalOptions};
use clap::Args;

/// Change the pool capacity.
#[derive(Args)]
pub struct ResizeCommand {
    /// New capacity (must be at least the current occupancy)
    pub capacity: u32,
}

impl ResizeCommand {
    /// Execute the resize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let mut engine = load_engine(&storage, &config);

        engine
            .change_capacity(self.capacity)
            .map_err(CliError::from)?;
        engine.save_all(&storage);

        println!("Capacity set to {}.", self.capacity);
        Ok(())
    }
}
