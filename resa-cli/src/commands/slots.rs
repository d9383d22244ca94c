//! Slots command implementation.

use crate::error::CliError;
use crate::utils::{
    load_configuration, load_engine, open_storage, print_report, GlobalOptions, Report,
};
use clap::Args;

/// Show the slot map.
#[derive(Args)]
pub struct SlotsCommand {}

impl SlotsCommand {
    /// Execute the slots command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let engine = load_engine(&storage, &config);

        print_report(&engine, &Report::SlotMap);
        Ok(())
    }
}
