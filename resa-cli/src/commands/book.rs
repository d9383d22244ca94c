//! Book command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, parse_location, GlobalOptions};
use clap::Args;
use resa::{BookRequest, Placement};

/// Book a reservation for a route.
#[derive(Args)]
pub struct BookCommand {
    /// Customer name
    pub name: String,

    /// Customer age
    #[arg(long)]
    pub age: u32,

    /// Contact text
    #[arg(long, value_name = "CONTACT")]
    pub contact: String,

    /// Route origin (index or name)
    #[arg(long, value_name = "LOCATION")]
    pub from: String,

    /// Route destination (index or name)
    #[arg(long, value_name = "LOCATION")]
    pub to: String,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let mut engine = load_engine(&storage, &config);

        let from = parse_location(engine.graph(), &self.from)?;
        let to = parse_location(engine.graph(), &self.to)?;

        let outcome = engine
            .book(BookRequest::new(self.name, self.age, self.contact, from, to))
            .map_err(CliError::from)?;
        engine.save_all(&storage);

        match outcome.placement {
            Placement::Confirmed { slot } => {
                println!("Reservation {} confirmed in slot {slot}.", outcome.id);
            }
            Placement::Waitlisted { position } => {
                println!(
                    "Reservation {} waitlisted at position {position}.",
                    outcome.id
                );
            }
        }
        Ok(())
    }
}
