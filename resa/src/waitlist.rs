//! FIFO overflow queue for reservations made when no slot is free.

use std::collections::VecDeque;

use crate::reservation::{Reservation, ReservationId};

/// FIFO queue of waitlisted reservations.
///
/// Waitlisted reservations keep their id, personal fields, requested route
/// and precomputed cost, but hold no slot. The queue is used strictly
/// first-in first-out: arrivals enqueue at the tail, promotion always takes
/// the head.
///
/// # Examples
///
/// ```
/// use resa::{Reservation, ReservationId, WaitlistQueue};
///
/// let mut waitlist = WaitlistQueue::new();
/// waitlist.enqueue(Reservation::builder(ReservationId::new(1005), "Eve", 25, "555").build());
///
/// let head = waitlist.promote_head().unwrap();
/// assert_eq!(head.id(), ReservationId::new(1005));
/// assert!(waitlist.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WaitlistQueue {
    entries: VecDeque<Reservation>,
}

impl WaitlistQueue {
    /// Creates an empty waitlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of waitlisted reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the waitlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a reservation at the tail of the queue.
    pub fn enqueue(&mut self, reservation: Reservation) {
        self.entries.push_back(reservation);
    }

    /// Removes and returns the head of the queue.
    ///
    /// The caller is responsible for giving the returned reservation a slot
    /// and inserting it into the confirmed store.
    pub fn promote_head(&mut self) -> Option<Reservation> {
        self.entries.pop_front()
    }

    /// Returns whether the queue holds the given id.
    #[must_use]
    pub fn contains(&self, id: ReservationId) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// Returns the 1-based queue position of the given id.
    #[must_use]
    pub fn position(&self, id: ReservationId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == id)
            .map(|index| index + 1)
    }

    /// Looks a waitlisted reservation up by id.
    #[must_use]
    pub fn find(&self, id: ReservationId) -> Option<&Reservation> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Looks a waitlisted reservation up mutably by id.
    pub fn find_mut(&mut self, id: ReservationId) -> Option<&mut Reservation> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Iterates over reservations in queue order, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.entries.iter()
    }
}
