//! Route command implementation.

use crate::error::CliError;
use crate::utils::{parse_location, GlobalOptions, REPORT_CAPACITY};
use clap::Args;
use resa::output::reports::write_route_narrative;
use resa::{ReportBuffer, RouteGraph};

/// Show the shortest path between two locations.
#[derive(Args)]
pub struct RouteCommand {
    /// Route origin (index or name)
    pub from: String,

    /// Route destination (index or name)
    pub to: String,
}

impl RouteCommand {
    /// Execute the route command.
    ///
    /// This is a pure graph query; no pool state is touched.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let graph = RouteGraph::demo();
        let from = parse_location(&graph, &self.from)?;
        let to = parse_location(&graph, &self.to)?;

        let mut buf = ReportBuffer::new(REPORT_CAPACITY);
        let found = write_route_narrative(&graph, from, to, &mut buf).unwrap_or(false);
        print!("{}", buf.as_str());

        if found {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(
                "no usable route between the given locations".to_string(),
            ))
        }
    }
}
