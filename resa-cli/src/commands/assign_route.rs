//! Assign-route command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, parse_location, GlobalOptions};
use clap::Args;
use resa::ReservationId;

/// Recompute and assign a route to a reservation.
#[derive(Args)]
pub struct AssignRouteCommand {
    /// Reservation id
    pub id: u32,

    /// Route origin (index or name)
    #[arg(long, value_name = "LOCATION")]
    pub from: String,

    /// Route destination (index or name)
    #[arg(long, value_name = "LOCATION")]
    pub to: String,
}

impl AssignRouteCommand {
    /// Execute the assign-route command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let mut engine = load_engine(&storage, &config);

        let from = parse_location(engine.graph(), &self.from)?;
        let to = parse_location(engine.graph(), &self.to)?;

        let id = ReservationId::new(self.id);
        let found = engine.assign_route(id, from, to).map_err(CliError::from)?;
        if !found {
            return Err(CliError::SemanticFailure(format!(
                "Reservation {id} not found"
            )));
        }
        engine.save_all(&storage);

        // The route was just assigned, so the record and cost exist.
        let cost = engine.find(id).map_or(0, resa::Reservation::cost);
        println!(
            "Route {}->{} assigned to {id} (cost \u{20b9}{cost}).",
            engine.graph().name_or_na(from),
            engine.graph().name_or_na(to)
        );
        Ok(())
    }
}
