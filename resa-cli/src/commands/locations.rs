//! Locations command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use resa::RouteGraph;

/// List the locations of the route graph.
#[derive(Args)]
pub struct LocationsCommand {}

impl LocationsCommand {
    /// Execute the locations command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let graph = RouteGraph::demo();
        for (id, name) in graph.locations() {
            println!("{id}\t{name}");
        }
        Ok(())
    }
}
