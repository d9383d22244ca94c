//! Modify command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, load_engine, open_storage, GlobalOptions};
use clap::Args;
use resa::{ReservationId, ReservationUpdate};

/// Update a reservation's name, age or contact.
#[derive(Args)]
pub struct ModifyCommand {
    /// Reservation id
    pub id: u32,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New age
    #[arg(long)]
    pub age: Option<u32>,

    /// New contact
    #[arg(long)]
    pub contact: Option<String>,
}

impl ModifyCommand {
    /// Execute the modify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut update = ReservationUpdate::new();
        if let Some(name) = self.name {
            update = update.with_name(name);
        }
        if let Some(age) = self.age {
            update = update.with_age(age);
        }
        if let Some(contact) = self.contact {
            update = update.with_contact(contact);
        }
        if update.is_empty() {
            return Err(CliError::InvalidArguments(
                "specify at least one of --name, --age, --contact".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let storage = open_storage(&config)?;
        let mut engine = load_engine(&storage, &config);

        let id = ReservationId::new(self.id);
        if engine.modify(id, &update) {
            engine.save_all(&storage);
            println!("Updated reservation {id}.");
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Reservation {id} not found"
            )))
        }
    }
}
