//! The reservation engine orchestrating the pool's data structures.
//!
//! One engine value owns the confirmed store, the waitlist, the undo
//! history, the route graph and the pool counters. Every operation runs to
//! completion before the next is accepted; cross-structure invariants
//! (occupancy, slot uniqueness, waitlist order) are maintained within each
//! call. The engine is single-caller by design; wrapping it for
//! concurrent access requires serializing whole operations.

use crate::error::{Error, Result};
use crate::graph::{route_cost, LocationId, RouteGraph};
use crate::reservation::{Reservation, ReservationId, RouteAssignment, Slot};
use crate::storage::{PoolMeta, Storage, DEFAULT_CAPACITY, DEFAULT_NEXT_ID};
use crate::store::RecordStore;
use crate::undo::UndoStack;
use crate::waitlist::WaitlistQueue;

/// Parameters of a booking request.
///
/// # Examples
///
/// ```
/// use resa::{BookRequest, LocationId};
///
/// let request = BookRequest::new("Alice", 30, "555-0100", LocationId::new(0), LocationId::new(5));
/// assert_eq!(request.name, "Alice");
/// ```
#[derive(Debug, Clone)]
pub struct BookRequest {
    /// Display name of the customer.
    pub name: String,
    /// Customer age.
    pub age: u32,
    /// Contact text.
    pub contact: String,
    /// Requested route origin.
    pub from: LocationId,
    /// Requested route destination.
    pub to: LocationId,
}

impl BookRequest {
    /// Creates a booking request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
        from: LocationId,
        to: LocationId,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            contact: contact.into(),
            from,
            to,
        }
    }
}

/// Where a booking ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The booking was confirmed into the given slot.
    Confirmed {
        /// The slot the reservation now holds.
        slot: Slot,
    },
    /// Capacity was exhausted; the booking joined the waitlist.
    Waitlisted {
        /// 1-based position in the waitlist queue.
        position: usize,
    },
}

/// Result of a successful booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookOutcome {
    /// The freshly issued reservation id.
    pub id: ReservationId,
    /// Whether the booking was confirmed or waitlisted.
    pub placement: Placement,
}

/// Result of looking an id up across both collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The id holds a confirmed slot.
    Confirmed,
    /// The id is waiting for a slot.
    Waitlisted,
    /// The id is not known to the pool.
    NotFound,
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Waitlisted => write!(f, "waitlisted"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

/// Field-wise update applied by [`ReservationEngine::modify`].
///
/// Absent fields are left unchanged. An empty name or contact and an age
/// of zero are also treated as "leave unchanged", matching the modify
/// semantics of the pool's external contract.
///
/// # Examples
///
/// ```
/// use resa::ReservationUpdate;
///
/// let update = ReservationUpdate::new().with_name("Alicia").with_age(31);
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReservationUpdate {
    /// Replacement name, if any.
    pub name: Option<String>,
    /// Replacement age, if any.
    pub age: Option<u32>,
    /// Replacement contact, if any.
    pub contact: Option<String>,
}

impl ReservationUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement age.
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the replacement contact.
    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Returns whether the update carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.contact.is_none()
    }

    fn apply(&self, reservation: &mut Reservation) {
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                reservation.set_name(name);
            }
        }
        if let Some(age) = self.age {
            if age > 0 {
                reservation.set_age(age);
            }
        }
        if let Some(contact) = self.contact.as_deref() {
            if !contact.is_empty() {
                reservation.set_contact(contact);
            }
        }
    }
}

/// The reservation engine.
///
/// # Examples
///
/// ```
/// use resa::{BookRequest, LocationId, Placement, ReservationEngine, RouteGraph};
///
/// let mut engine = ReservationEngine::new(RouteGraph::demo());
/// let outcome = engine
///     .book(BookRequest::new(
///         "Alice",
///         30,
///         "555-0100",
///         LocationId::new(0),
///         LocationId::new(5),
///     ))
///     .unwrap();
///
/// assert_eq!(outcome.id.value(), 1000);
/// assert!(matches!(outcome.placement, Placement::Confirmed { .. }));
/// assert_eq!(engine.occupancy(), 1);
/// ```
pub struct ReservationEngine {
    graph: RouteGraph,
    store: RecordStore,
    waitlist: WaitlistQueue,
    undo: UndoStack,
    capacity: u32,
    next_id: u32,
}

impl ReservationEngine {
    /// Creates a fresh engine with default counters and an empty pool.
    #[must_use]
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            graph,
            store: RecordStore::new(),
            waitlist: WaitlistQueue::new(),
            undo: UndoStack::new(),
            capacity: DEFAULT_CAPACITY,
            next_id: DEFAULT_NEXT_ID,
        }
    }

    /// Loads an engine from persisted state.
    ///
    /// Missing or unusable metadata resets the counters to their defaults;
    /// record streams are replayed in stored order, rebuilding the id index
    /// as a side effect. Stored routes and costs are trusted. The undo
    /// history is not persisted and always starts empty.
    #[must_use]
    pub fn load(storage: &Storage, graph: RouteGraph) -> Self {
        Self::load_with_default_capacity(storage, graph, DEFAULT_CAPACITY)
    }

    /// Loads an engine, using the given capacity when no usable metadata
    /// exists on disk.
    ///
    /// Persisted metadata always wins over `default_capacity`; the
    /// parameter only seeds a fresh pool.
    #[must_use]
    pub fn load_with_default_capacity(
        storage: &Storage,
        graph: RouteGraph,
        default_capacity: u32,
    ) -> Self {
        let state = storage.load();

        let mut store = RecordStore::new();
        for record in state.confirmed {
            store.insert(record);
        }
        let mut waitlist = WaitlistQueue::new();
        for record in state.waitlist {
            waitlist.enqueue(record);
        }

        if state.meta_loaded && state.meta.occupancy as usize != store.len() {
            log::warn!(
                "stored occupancy {} disagrees with {} replayed confirmed record(s); using the replayed count",
                state.meta.occupancy,
                store.len()
            );
        }

        let capacity = if state.meta_loaded {
            state.meta.capacity
        } else {
            default_capacity.max(1)
        };

        Self {
            graph,
            store,
            waitlist,
            undo: UndoStack::new(),
            capacity,
            next_id: state.meta.next_id,
        }
    }

    /// Writes the pool state through the given storage handle.
    ///
    /// # Errors
    ///
    /// Returns an error if any state file cannot be written.
    pub fn save(&self, storage: &Storage) -> Result<()> {
        storage.save(self.meta(), &self.store, &self.waitlist)
    }

    /// Best-effort save: failures are logged and swallowed.
    pub fn save_all(&self, storage: &Storage) {
        storage.save_all(self.meta(), &self.store, &self.waitlist);
    }

    /// Returns the pool counters as persisted metadata.
    #[must_use]
    pub fn meta(&self) -> PoolMeta {
        PoolMeta {
            next_id: self.next_id,
            capacity: self.capacity,
            occupancy: self.occupancy(),
        }
    }

    /// Returns the route graph.
    #[must_use]
    pub const fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Returns the total number of slots.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the number of occupied slots.
    ///
    /// This is always the number of confirmed reservations.
    #[must_use]
    pub fn occupancy(&self) -> u32 {
        u32::try_from(self.store.len()).unwrap_or(u32::MAX)
    }

    /// Returns the number of free slots.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.capacity.saturating_sub(self.occupancy())
    }

    /// Iterates over confirmed reservations in booking order.
    pub fn confirmed(&self) -> impl Iterator<Item = &Reservation> {
        self.store.iter()
    }

    /// Iterates over waitlisted reservations in queue order.
    pub fn waitlisted(&self) -> impl Iterator<Item = &Reservation> {
        self.waitlist.iter()
    }

    /// Returns the number of waitlisted reservations.
    #[must_use]
    pub fn waitlist_len(&self) -> usize {
        self.waitlist.len()
    }

    /// Returns the confirmed reservation holding the given slot, if any.
    #[must_use]
    pub fn slot_holder(&self, slot: Slot) -> Option<&Reservation> {
        self.store.slot_holder(slot)
    }

    /// Looks a reservation up by id, confirmed first, then waitlisted.
    #[must_use]
    pub fn find(&self, id: ReservationId) -> Option<&Reservation> {
        self.store.find(id).or_else(|| self.waitlist.find(id))
    }

    /// Books a reservation.
    ///
    /// The requested route is validated and costed up front; a booking with
    /// an out-of-range location or an unreachable route is rejected without
    /// consuming an id. A valid booking always succeeds: it is confirmed
    /// into the lowest free slot when one exists, and waitlisted otherwise.
    /// Only confirmed bookings enter the undo history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] or [`Error::RouteUnreachable`]
    /// when the route cannot be costed.
    pub fn book(&mut self, request: BookRequest) -> Result<BookOutcome> {
        let found = self.graph.shortest_path(request.from, request.to)?;
        let route = RouteAssignment {
            from: request.from,
            to: request.to,
            cost: route_cost(found.distance),
        };

        let id = ReservationId::new(self.next_id);
        self.next_id += 1;

        let builder = Reservation::builder(id, request.name, request.age, request.contact);
        let placement = if let Some(slot) = self.store.lowest_free_slot(self.capacity) {
            let reservation = builder.slot(slot).route(route).build();
            self.undo.push(reservation.clone());
            self.store.insert(reservation);
            Placement::Confirmed { slot }
        } else {
            self.waitlist.enqueue(builder.route(route).build());
            Placement::Waitlisted {
                position: self.waitlist.len(),
            }
        };

        Ok(BookOutcome { id, placement })
    }

    /// Cancels a reservation by id.
    ///
    /// Returns whether a confirmed reservation was actually removed. The
    /// waitlist is not searched: cancelling a waitlisted or unknown id
    /// removes nothing.
    ///
    /// Whenever the waitlist is non-empty, one promotion of its head is
    /// attempted regardless of whether the cancelled id freed a slot, a
    /// deliberate compatibility quirk. The head is only seated when a slot
    /// is actually free, so the pool can never exceed its capacity.
    pub fn cancel(&mut self, id: ReservationId) -> bool {
        let removed = self.store.remove(id).is_some();

        if !self.waitlist.is_empty() {
            if let Some(slot) = self.store.lowest_free_slot(self.capacity) {
                if let Some(mut head) = self.waitlist.promote_head() {
                    head.assign_slot(slot);
                    self.store.insert(head);
                }
            } else {
                log::debug!("waitlist head not promoted: no free slot");
            }
        }

        removed
    }

    /// Applies a field-wise update to a reservation, confirmed or
    /// waitlisted.
    ///
    /// Returns whether the id was found. An unknown id changes nothing.
    pub fn modify(&mut self, id: ReservationId, update: &ReservationUpdate) -> bool {
        if let Some(reservation) = self.store.find_mut(id) {
            update.apply(reservation);
            return true;
        }
        if let Some(reservation) = self.waitlist.find_mut(id) {
            update.apply(reservation);
            return true;
        }
        false
    }

    /// Reports whether an id is confirmed, waitlisted, or unknown.
    #[must_use]
    pub fn search(&self, id: ReservationId) -> SearchOutcome {
        if self.store.contains(id) {
            SearchOutcome::Confirmed
        } else if self.waitlist.contains(id) {
            SearchOutcome::Waitlisted
        } else {
            SearchOutcome::NotFound
        }
    }

    /// Assigns a route (and its recomputed cost) to a reservation.
    ///
    /// The route is validated first; an invalid or unreachable route
    /// rejects the whole call and leaves the reservation untouched: routes
    /// are never partially assigned. Returns whether the id was found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] or [`Error::RouteUnreachable`]
    /// when the route cannot be costed.
    pub fn assign_route(
        &mut self,
        id: ReservationId,
        from: LocationId,
        to: LocationId,
    ) -> Result<bool> {
        let found = self.graph.shortest_path(from, to)?;
        let route = RouteAssignment {
            from,
            to,
            cost: route_cost(found.distance),
        };

        if let Some(reservation) = self.store.find_mut(id) {
            reservation.set_route(route);
            return Ok(true);
        }
        if let Some(reservation) = self.waitlist.find_mut(id) {
            reservation.set_route(route);
            return Ok(true);
        }
        Ok(false)
    }

    /// Reverses the most recent confirmed booking.
    ///
    /// Pops the latest snapshot and cancels by its id, which also triggers
    /// the usual waitlist promotion. Returns the cancelled id, or `None`
    /// when the history is empty.
    ///
    /// The snapshot is a point-in-time copy: if the live reservation was
    /// modified after booking, undo still cancels it by id; it does not
    /// restore the pre-modification fields of anything else.
    pub fn undo(&mut self) -> Option<ReservationId> {
        let snapshot = self.undo.pop()?;
        let id = snapshot.id();
        self.cancel(id);
        Some(id)
    }

    /// Changes the pool capacity.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the requested capacity is zero, or
    /// [`Error::CapacityShrink`] when it is below the current occupancy.
    /// Either rejection leaves the pool unchanged.
    pub fn change_capacity(&mut self, capacity: u32) -> Result<()> {
        if capacity < 1 {
            return Err(Error::Validation {
                field: "capacity".into(),
                message: "capacity must be at least 1".into(),
            });
        }
        let occupied = self.occupancy();
        if capacity < occupied {
            return Err(Error::CapacityShrink {
                requested: capacity,
                occupied,
            });
        }
        self.capacity = capacity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ReservationEngine {
        ReservationEngine::new(RouteGraph::demo())
    }

    fn request(name: &str) -> BookRequest {
        BookRequest::new(name, 30, "555-0100", LocationId::new(0), LocationId::new(1))
    }

    fn book_ok(engine: &mut ReservationEngine, name: &str) -> BookOutcome {
        engine.book(request(name)).unwrap()
    }

    #[test]
    fn test_first_booking_gets_default_id_and_slot_one() {
        let mut engine = engine();
        let outcome = book_ok(&mut engine, "Alice");
        assert_eq!(outcome.id, ReservationId::new(1000));
        assert_eq!(
            outcome.placement,
            Placement::Confirmed {
                slot: Slot::try_from(1).unwrap()
            }
        );
    }

    #[test]
    fn test_ids_strictly_increase_even_across_cancellations() {
        let mut engine = engine();
        let first = book_ok(&mut engine, "Alice").id;
        engine.cancel(first);
        let second = book_ok(&mut engine, "Bob").id;
        let third = book_ok(&mut engine, "Carol").id;
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_rejected_booking_consumes_no_id() {
        let mut engine = engine();
        let err = engine
            .book(BookRequest::new(
                "Alice",
                30,
                "555",
                LocationId::new(0),
                LocationId::new(9),
            ))
            .unwrap_err();
        assert!(err.is_unknown_location());
        assert_eq!(book_ok(&mut engine, "Bob").id, ReservationId::new(1000));
    }

    #[test]
    fn test_sixth_booking_is_waitlisted() {
        let mut engine = engine();
        for offset in 0..5 {
            let outcome = book_ok(&mut engine, &format!("guest-{offset}"));
            assert_eq!(
                outcome.placement,
                Placement::Confirmed {
                    slot: Slot::try_from(offset + 1).unwrap()
                }
            );
        }
        let sixth = book_ok(&mut engine, "overflow");
        assert_eq!(sixth.placement, Placement::Waitlisted { position: 1 });
        assert_eq!(engine.occupancy(), 5);
        assert_eq!(engine.waitlist_len(), 1);
        assert_eq!(engine.search(sixth.id), SearchOutcome::Waitlisted);
    }

    #[test]
    fn test_booking_costs_shortest_path() {
        let mut engine = engine();
        let outcome = engine
            .book(BookRequest::new(
                "Alice",
                30,
                "555",
                LocationId::new(0),
                LocationId::new(5),
            ))
            .unwrap();
        let reservation = engine.find(outcome.id).unwrap();
        assert_eq!(reservation.cost(), 1600);
        let route = reservation.route().unwrap();
        assert_eq!(route.from, LocationId::new(0));
        assert_eq!(route.to, LocationId::new(5));
    }

    #[test]
    fn test_cancel_promotes_waitlist_head_in_arrival_order() {
        let mut engine = engine();
        let confirmed: Vec<_> = (0..5)
            .map(|offset| book_ok(&mut engine, &format!("guest-{offset}")).id)
            .collect();
        let first_waiting = book_ok(&mut engine, "first-waiting").id;
        let second_waiting = book_ok(&mut engine, "second-waiting").id;

        assert!(engine.cancel(confirmed[2]));

        // The head of the waitlist takes the freed slot; the second waits on.
        assert_eq!(engine.search(first_waiting), SearchOutcome::Confirmed);
        assert_eq!(engine.search(second_waiting), SearchOutcome::Waitlisted);
        assert_eq!(
            engine.find(first_waiting).unwrap().slot(),
            Some(Slot::try_from(3).unwrap())
        );
        assert_eq!(engine.occupancy(), 5);
        assert_eq!(engine.waitlist_len(), 1);
    }

    #[test]
    fn test_cancel_unknown_id_still_promotes_when_slot_free() {
        let mut engine = engine();
        engine.change_capacity(1).unwrap();
        let seated = book_ok(&mut engine, "seated").id;
        let waiting = book_ok(&mut engine, "waiting").id;
        assert_eq!(engine.search(waiting), SearchOutcome::Waitlisted);

        // Growing the pool frees a slot without touching the waitlist.
        engine.change_capacity(2).unwrap();

        // Cancelling an id nobody holds removes nothing, yet the waitlist
        // head is promoted into the free slot anyway.
        assert!(!engine.cancel(ReservationId::new(4242)));
        assert_eq!(engine.search(waiting), SearchOutcome::Confirmed);
        assert_eq!(
            engine.find(waiting).unwrap().slot(),
            Some(Slot::try_from(2).unwrap())
        );
        assert_eq!(engine.search(seated), SearchOutcome::Confirmed);
        assert_eq!(engine.occupancy(), 2);
    }

    #[test]
    fn test_cancel_waitlisted_id_removes_nothing_but_promotes() {
        let mut engine = engine();
        engine.change_capacity(1).unwrap();
        let seated = book_ok(&mut engine, "seated").id;
        let waiting = book_ok(&mut engine, "waiting").id;

        // The store does not hold the waitlisted id, so nothing is removed,
        // and with no free slot the head stays queued.
        assert!(!engine.cancel(waiting));
        assert_eq!(engine.search(waiting), SearchOutcome::Waitlisted);
        assert_eq!(engine.search(seated), SearchOutcome::Confirmed);
        assert_eq!(engine.occupancy(), 1);
    }

    #[test]
    fn test_promotion_takes_lowest_free_slot() {
        let mut engine = engine();
        let ids: Vec<_> = (0..5)
            .map(|offset| book_ok(&mut engine, &format!("guest-{offset}")).id)
            .collect();
        let waiting = book_ok(&mut engine, "waiting").id;

        assert!(engine.cancel(ids[0]));
        assert_eq!(
            engine.find(waiting).unwrap().slot(),
            Some(Slot::try_from(1).unwrap())
        );
    }

    #[test]
    fn test_modify_confirmed_reservation() {
        let mut engine = engine();
        let id = book_ok(&mut engine, "Alice").id;
        assert!(engine.modify(
            id,
            &ReservationUpdate::new()
                .with_name("Alicia")
                .with_age(31)
                .with_contact("555-0199"),
        ));
        let reservation = engine.find(id).unwrap();
        assert_eq!(reservation.name(), "Alicia");
        assert_eq!(reservation.age(), 31);
        assert_eq!(reservation.contact(), "555-0199");
    }

    #[test]
    fn test_modify_waitlisted_reservation() {
        let mut engine = engine();
        engine.change_capacity(1).unwrap();
        book_ok(&mut engine, "seated");
        let waiting = book_ok(&mut engine, "waiting").id;

        assert!(engine.modify(waiting, &ReservationUpdate::new().with_name("renamed")));
        assert_eq!(engine.find(waiting).unwrap().name(), "renamed");
    }

    #[test]
    fn test_modify_ignores_empty_and_zero_fields() {
        let mut engine = engine();
        let id = book_ok(&mut engine, "Alice").id;
        assert!(engine.modify(
            id,
            &ReservationUpdate::new()
                .with_name("")
                .with_age(0)
                .with_contact(""),
        ));
        let reservation = engine.find(id).unwrap();
        assert_eq!(reservation.name(), "Alice");
        assert_eq!(reservation.age(), 30);
        assert_eq!(reservation.contact(), "555-0100");
    }

    #[test]
    fn test_modify_unknown_id_is_noop() {
        let mut engine = engine();
        assert!(!engine.modify(
            ReservationId::new(4242),
            &ReservationUpdate::new().with_name("ghost"),
        ));
    }

    #[test]
    fn test_assign_route_recomputes_cost() {
        let mut engine = engine();
        let id = book_ok(&mut engine, "Alice").id;
        assert_eq!(engine.find(id).unwrap().cost(), 500);

        assert!(engine
            .assign_route(id, LocationId::new(0), LocationId::new(5))
            .unwrap());
        assert_eq!(engine.find(id).unwrap().cost(), 1600);
    }

    #[test]
    fn test_assign_route_rejects_invalid_without_touching_state() {
        let mut engine = engine();
        let id = book_ok(&mut engine, "Alice").id;

        let err = engine
            .assign_route(id, LocationId::new(0), LocationId::new(9))
            .unwrap_err();
        assert!(err.is_unknown_location());

        let route = engine.find(id).unwrap().route().unwrap();
        assert_eq!(route.to, LocationId::new(1));
        assert_eq!(engine.find(id).unwrap().cost(), 500);
    }

    #[test]
    fn test_assign_route_unknown_id() {
        let mut engine = engine();
        let found = engine
            .assign_route(ReservationId::new(4242), LocationId::new(0), LocationId::new(1))
            .unwrap();
        assert!(!found);
    }

    #[test]
    fn test_undo_cancels_most_recent_confirmed_booking() {
        let mut engine = engine();
        let first = book_ok(&mut engine, "first").id;
        let second = book_ok(&mut engine, "second").id;

        assert_eq!(engine.undo(), Some(second));
        assert_eq!(engine.search(second), SearchOutcome::NotFound);
        assert_eq!(engine.search(first), SearchOutcome::Confirmed);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut engine = engine();
        assert_eq!(engine.undo(), None);
    }

    #[test]
    fn test_undo_skips_waitlisted_bookings() {
        let mut engine = engine();
        engine.change_capacity(1).unwrap();
        let seated = book_ok(&mut engine, "seated").id;
        let waiting = book_ok(&mut engine, "waiting").id;

        // The waitlisted booking never entered the history, so undo
        // reverses the confirmed one (which promotes the waiting entry).
        assert_eq!(engine.undo(), Some(seated));
        assert_eq!(engine.search(waiting), SearchOutcome::Confirmed);

        // Nothing left to undo: the promotion was not a booking.
        assert_eq!(engine.undo(), None);
    }

    #[test]
    fn test_undo_after_modify_still_cancels_by_id() {
        let mut engine = engine();
        let id = book_ok(&mut engine, "Alice").id;
        engine.modify(id, &ReservationUpdate::new().with_name("renamed"));

        assert_eq!(engine.undo(), Some(id));
        assert_eq!(engine.search(id), SearchOutcome::NotFound);
    }

    #[test]
    fn test_change_capacity_rejects_shrink_below_occupancy() {
        let mut engine = engine();
        for offset in 0..3 {
            book_ok(&mut engine, &format!("guest-{offset}"));
        }
        let err = engine.change_capacity(2).unwrap_err();
        assert!(matches!(
            err,
            Error::CapacityShrink {
                requested: 2,
                occupied: 3
            }
        ));
        assert_eq!(engine.capacity(), 5);
    }

    #[test]
    fn test_change_capacity_rejects_zero() {
        let mut engine = engine();
        assert!(engine.change_capacity(0).is_err());
        assert_eq!(engine.capacity(), 5);
    }

    #[test]
    fn test_change_capacity_to_exact_occupancy() {
        let mut engine = engine();
        for offset in 0..3 {
            book_ok(&mut engine, &format!("guest-{offset}"));
        }
        engine.change_capacity(3).unwrap();
        assert_eq!(engine.capacity(), 3);
        assert_eq!(engine.available(), 0);
    }

    #[test]
    fn test_grown_capacity_seats_new_bookings() {
        let mut engine = engine();
        engine.change_capacity(1).unwrap();
        book_ok(&mut engine, "seated");
        let waiting = book_ok(&mut engine, "waiting").id;
        assert_eq!(engine.search(waiting), SearchOutcome::Waitlisted);

        engine.change_capacity(3).unwrap();
        // Growth does not retroactively promote; the next cancel or booking
        // movement does.
        assert_eq!(engine.search(waiting), SearchOutcome::Waitlisted);
        let next = book_ok(&mut engine, "next").id;
        assert_eq!(engine.search(next), SearchOutcome::Confirmed);
    }

    #[test]
    fn test_occupancy_matches_confirmed_count() {
        let mut engine = engine();
        for offset in 0..7 {
            book_ok(&mut engine, &format!("guest-{offset}"));
        }
        assert_eq!(engine.occupancy() as usize, engine.confirmed().count());
        assert_eq!(engine.occupancy(), 5);
        assert_eq!(engine.available(), 0);
        assert_eq!(engine.waitlist_len(), 2);
    }

    #[test]
    fn test_meta_reflects_pool_counters() {
        let mut engine = engine();
        book_ok(&mut engine, "Alice");
        let meta = engine.meta();
        assert_eq!(meta.next_id, 1001);
        assert_eq!(meta.capacity, 5);
        assert_eq!(meta.occupancy, 1);
    }

    #[test]
    fn test_search_outcome_display() {
        assert_eq!(format!("{}", SearchOutcome::Confirmed), "confirmed");
        assert_eq!(format!("{}", SearchOutcome::Waitlisted), "waitlisted");
        assert_eq!(format!("{}", SearchOutcome::NotFound), "not found");
    }
}
