//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `book`: Book a reservation for a route
//! - `cancel`: Cancel a reservation by id
//! - `modify`: Update a reservation's personal fields
//! - `search`: Report whether an id is confirmed, waitlisted or unknown
//! - `assign_route`: Recompute and assign a route
//! - `undo`: Reverse the most recent confirmed booking
//! - `resize`: Change the pool capacity
//! - `list`: List confirmed reservations in various formats
//! - `waitlist`: Show the waitlist in queue order
//! - `slots`: Show the slot map
//! - `availability`: Show the capacity/occupancy summary
//! - `route`: Show the shortest path between two locations
//! - `locations`: List the locations of the route graph

pub mod assign_route;
pub mod availability;
pub mod book;
pub mod cancel;
pub mod list;
pub mod locations;
pub mod modify;
pub mod resize;
pub mod route;
pub mod search;
pub mod slots;
pub mod undo;
pub mod waitlist;

pub use assign_route::AssignRouteCommand;
pub use availability::AvailabilityCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use list::ListCommand;
pub use locations::LocationsCommand;
pub use modify::ModifyCommand;
pub use resize::ResizeCommand;
pub use route::RouteCommand;
pub use search::SearchCommand;
pub use slots::SlotsCommand;
pub use undo::UndoCommand;
pub use waitlist::WaitlistCommand;
