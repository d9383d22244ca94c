//! Indexed store of confirmed reservations.
//!
//! The store keeps confirmed reservations in booking order (the order they
//! were inserted, not sorted by identifier) and maintains a hash index from
//! reservation id to record for O(1)-average lookup. Every insert and
//! removal updates both structures together.

use std::collections::{HashMap, HashSet};

use crate::reservation::{Reservation, ReservationId, Slot};

/// Ordered collection of confirmed reservations with an id index.
///
/// # Examples
///
/// ```
/// use resa::{RecordStore, Reservation, ReservationId, Slot};
///
/// let mut store = RecordStore::new();
/// let id = ReservationId::new(1000);
/// store.insert(
///     Reservation::builder(id, "Alice", 30, "555-0100")
///         .slot(Slot::try_from(1).unwrap())
///         .build(),
/// );
///
/// assert_eq!(store.len(), 1);
/// assert!(store.find(id).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    order: Vec<ReservationId>,
    by_id: HashMap<ReservationId, Reservation>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of confirmed reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns whether the store holds the given id.
    #[must_use]
    pub fn contains(&self, id: ReservationId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Inserts a reservation at the end of the booking order and indexes it.
    ///
    /// Inserting an id that is already present replaces the indexed record
    /// in place without duplicating its position in the booking order.
    pub fn insert(&mut self, reservation: Reservation) {
        let id = reservation.id();
        if self.by_id.insert(id, reservation).is_none() {
            self.order.push(id);
        }
    }

    /// Removes a reservation by id, preserving the order of the rest.
    ///
    /// Returns the removed record, or `None` if the id is not confirmed
    /// here. The waitlist is deliberately not consulted.
    pub fn remove(&mut self, id: ReservationId) -> Option<Reservation> {
        let removed = self.by_id.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(removed)
    }

    /// Looks a reservation up by id via the hash index.
    #[must_use]
    pub fn find(&self, id: ReservationId) -> Option<&Reservation> {
        self.by_id.get(&id)
    }

    /// Looks a reservation up mutably by id.
    pub fn find_mut(&mut self, id: ReservationId) -> Option<&mut Reservation> {
        self.by_id.get_mut(&id)
    }

    /// Iterates over reservations in booking order.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Returns the reservation occupying the given slot, if any.
    #[must_use]
    pub fn slot_holder(&self, slot: Slot) -> Option<&Reservation> {
        self.iter().find(|reservation| reservation.slot() == Some(slot))
    }

    /// Returns the lowest slot number in `1..=capacity` not currently held.
    ///
    /// Returns `None` when every slot is occupied (or `capacity` is 0).
    #[must_use]
    pub fn lowest_free_slot(&self, capacity: u32) -> Option<Slot> {
        let used: HashSet<u32> = self
            .iter()
            .filter_map(|reservation| reservation.slot())
            .map(Slot::value)
            .collect();
        (1..=capacity)
            .find(|candidate| !used.contains(candidate))
            .and_then(|value| Slot::try_from(value).ok())
    }
}
