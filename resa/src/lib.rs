#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # resa
//!
//! A library for managing a fixed pool of reservable slots with automatic
//! waitlisting, last-booking undo, and route-based cost computation over a
//! fixed weighted graph of locations.
//!
//! ## Core Types
//!
//! - [`ReservationEngine`]: the single-owner orchestrator of all pool state
//! - [`Reservation`], [`ReservationId`] and [`Slot`]: reservation records
//! - [`RouteGraph`] and [`LocationId`]: the location graph and its
//!   shortest-path search
//! - [`Storage`] and [`StorageConfig`]: durable state in a data directory
//! - [`ReportBuffer`]: bounded, truncation-safe report text
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use resa::{BookRequest, LocationId, Placement, ReservationEngine, RouteGraph};
//!
//! let mut engine = ReservationEngine::new(RouteGraph::demo());
//!
//! let outcome = engine
//!     .book(BookRequest::new(
//!         "Alice",
//!         30,
//!         "555-0100",
//!         LocationId::new(0),
//!         LocationId::new(5),
//!     ))
//!     .unwrap();
//!
//! assert!(matches!(outcome.placement, Placement::Confirmed { .. }));
//! assert_eq!(engine.find(outcome.id).unwrap().cost(), 1600);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;
pub mod output;
pub mod reservation;
pub mod storage;
pub mod store;
pub mod undo;
pub mod waitlist;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use engine::{
    BookOutcome, BookRequest, Placement, ReservationEngine, ReservationUpdate, SearchOutcome,
};
pub use error::{Error, Result};
pub use graph::{route_cost, LocationId, PathFound, RouteGraph, PRICE_PER_UNIT};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::ReportBuffer;
pub use reservation::{Reservation, ReservationId, RouteAssignment, Slot};
pub use storage::{default_data_dir, PoolMeta, Storage, StorageConfig};
pub use store::RecordStore;
pub use undo::UndoStack;
pub use waitlist::WaitlistQueue;
