//! Reservation types for tracking slot allocations.
//!
//! This module provides the reservation record itself along with its
//! identifier and slot newtypes, a builder for construction, and the
//! bounded-length rules applied to free-text fields.

use serde::{Deserialize, Serialize};

use crate::graph::LocationId;

/// Maximum number of characters kept in a reservation name.
pub const MAX_NAME_LEN: usize = 49;

/// Maximum number of characters kept in a contact field.
pub const MAX_CONTACT_LEN: usize = 14;

/// A unique identifier for a reservation.
///
/// Identifiers are issued by the engine, strictly increasing, and never
/// reused, not even after the identified reservation is cancelled.
///
/// # Examples
///
/// ```
/// use resa::ReservationId;
///
/// let id = ReservationId::new(1000);
/// assert_eq!(id.value(), 1000);
/// assert_eq!(format!("{id}"), "1000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReservationId(u32);

impl ReservationId {
    /// Creates a reservation identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A confirmed capacity slot, numbered from 1 up to the pool capacity.
///
/// # Examples
///
/// ```
/// use resa::Slot;
///
/// let slot = Slot::try_from(3).unwrap();
/// assert_eq!(slot.value(), 3);
///
/// // Slot numbers start at 1
/// assert!(Slot::try_from(0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Slot(u32);

impl Slot {
    /// Returns the slot number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Slot {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(ValidationError {
                field: "slot".into(),
                message: "slot numbers start at 1".into(),
            });
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A route assigned to a reservation, with its computed cost.
///
/// Routes are only ever assigned whole: endpoints and cost together, the
/// cost being the shortest-path distance times the fixed per-unit price at
/// the moment of assignment. A reservation never carries endpoints without
/// the matching cost or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAssignment {
    /// Origin location.
    pub from: LocationId,
    /// Destination location.
    pub to: LocationId,
    /// Cost in currency units as computed when the route was assigned.
    pub cost: u32,
}

/// Truncates a string to at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// A reservation against the slot pool.
///
/// A reservation is either *confirmed* (it holds a slot) or *waitlisted*
/// (it holds none); it is never both and never neither. Name and contact
/// are bounded-length text, enforced by truncation on every write.
///
/// # Examples
///
/// ```
/// use resa::{Reservation, ReservationId, Slot};
///
/// let reservation = Reservation::builder(ReservationId::new(1000), "Alice", 30, "555-0100")
///     .slot(Slot::try_from(1).unwrap())
///     .build();
///
/// assert_eq!(reservation.name(), "Alice");
/// assert!(reservation.is_confirmed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    name: String,
    age: u32,
    contact: String,
    slot: Option<Slot>,
    route: Option<RouteAssignment>,
}

impl Reservation {
    /// Creates a new reservation builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::{Reservation, ReservationId};
    ///
    /// let reservation =
    ///     Reservation::builder(ReservationId::new(1000), "Alice", 30, "555-0100").build();
    /// assert!(reservation.is_waitlisted());
    /// ```
    #[must_use]
    pub fn builder(
        id: ReservationId,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id,
            name: name.into(),
            age,
            contact: contact.into(),
            slot: None,
            route: None,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the age.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the contact text.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the held slot, if the reservation is confirmed.
    #[must_use]
    pub const fn slot(&self) -> Option<Slot> {
        self.slot
    }

    /// Returns the assigned route, if any.
    #[must_use]
    pub const fn route(&self) -> Option<RouteAssignment> {
        self.route
    }

    /// Returns the route cost in currency units, or 0 when no route is
    /// assigned.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.route.map_or(0, |route| route.cost)
    }

    /// Returns whether the reservation holds a slot.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns whether the reservation holds no slot.
    #[must_use]
    pub const fn is_waitlisted(&self) -> bool {
        self.slot.is_none()
    }

    /// Places the reservation into a slot (used on booking and promotion).
    pub(crate) fn assign_slot(&mut self, slot: Slot) {
        self.slot = Some(slot);
    }

    /// Replaces the assigned route and cost as one unit.
    pub(crate) fn set_route(&mut self, route: RouteAssignment) {
        self.route = Some(route);
    }

    /// Renames the reservation, truncating to the name bound.
    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = truncate_chars(name, MAX_NAME_LEN);
    }

    /// Updates the age.
    pub(crate) fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Updates the contact text, truncating to the contact bound.
    pub(crate) fn set_contact(&mut self, contact: &str) {
        self.contact = truncate_chars(contact, MAX_CONTACT_LEN);
    }
}

/// Builder for creating [`Reservation`] instances.
///
/// Free-text fields are truncated to their bounds; construction itself
/// cannot fail.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    name: String,
    age: u32,
    contact: String,
    slot: Option<Slot>,
    route: Option<RouteAssignment>,
}

impl ReservationBuilder {
    /// Places the reservation into a confirmed slot.
    #[must_use]
    pub const fn slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Assigns a route with its computed cost.
    #[must_use]
    pub const fn route(mut self, route: RouteAssignment) -> Self {
        self.route = Some(route);
        self
    }

    /// Builds the reservation, truncating name and contact to their bounds.
    #[must_use]
    pub fn build(self) -> Reservation {
        Reservation {
            id: self.id,
            name: truncate_chars(&self.name, MAX_NAME_LEN),
            age: self.age,
            contact: truncate_chars(&self.contact, MAX_CONTACT_LEN),
            slot: self.slot,
            route: self.route,
        }
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: u32) -> Slot {
        Slot::try_from(n).unwrap()
    }

    #[test]
    fn test_reservation_id_accessors() {
        let id = ReservationId::new(1234);
        assert_eq!(id.value(), 1234);
        assert_eq!(format!("{id}"), "1234");
    }

    #[test]
    fn test_reservation_id_ordering() {
        assert!(ReservationId::new(1000) < ReservationId::new(1001));
    }

    #[test]
    fn test_slot_validation() {
        assert_eq!(slot(1).value(), 1);
        assert_eq!(slot(5).value(), 5);
        let err = Slot::try_from(0).unwrap_err();
        assert_eq!(err.field, "slot");
    }

    #[test]
    fn test_builder_waitlisted_by_default() {
        let reservation =
            Reservation::builder(ReservationId::new(1000), "Alice", 30, "555-0100").build();
        assert!(reservation.is_waitlisted());
        assert!(!reservation.is_confirmed());
        assert_eq!(reservation.slot(), None);
        assert_eq!(reservation.route(), None);
        assert_eq!(reservation.cost(), 0);
    }

    #[test]
    fn test_builder_confirmed_with_route() {
        let route = RouteAssignment {
            from: LocationId::new(0),
            to: LocationId::new(5),
            cost: 1600,
        };
        let reservation = Reservation::builder(ReservationId::new(1000), "Bob", 41, "555-0101")
            .slot(slot(2))
            .route(route)
            .build();
        assert!(reservation.is_confirmed());
        assert_eq!(reservation.slot(), Some(slot(2)));
        assert_eq!(reservation.route(), Some(route));
        assert_eq!(reservation.cost(), 1600);
    }

    #[test]
    fn test_name_truncated_to_bound() {
        let long = "x".repeat(200);
        let reservation =
            Reservation::builder(ReservationId::new(1000), long.as_str(), 30, "555").build();
        assert_eq!(reservation.name().chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_contact_truncated_to_bound() {
        let reservation = Reservation::builder(
            ReservationId::new(1000),
            "Alice",
            30,
            "0123456789012345678",
        )
        .build();
        assert_eq!(reservation.contact().chars().count(), MAX_CONTACT_LEN);
        assert_eq!(reservation.contact(), "01234567890123");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Multi-byte characters count as one character each.
        let name = "é".repeat(60);
        let reservation =
            Reservation::builder(ReservationId::new(1000), name.as_str(), 30, "555").build();
        assert_eq!(reservation.name().chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_setters_truncate() {
        let mut reservation =
            Reservation::builder(ReservationId::new(1000), "Alice", 30, "555").build();
        reservation.set_name(&"y".repeat(100));
        assert_eq!(reservation.name().chars().count(), MAX_NAME_LEN);
        reservation.set_contact(&"9".repeat(30));
        assert_eq!(reservation.contact().chars().count(), MAX_CONTACT_LEN);
        reservation.set_age(31);
        assert_eq!(reservation.age(), 31);
    }

    #[test]
    fn test_set_route_replaces_whole_assignment() {
        let mut reservation =
            Reservation::builder(ReservationId::new(1000), "Alice", 30, "555").build();
        reservation.set_route(RouteAssignment {
            from: LocationId::new(1),
            to: LocationId::new(3),
            cost: 700,
        });
        assert_eq!(reservation.cost(), 700);
        reservation.set_route(RouteAssignment {
            from: LocationId::new(0),
            to: LocationId::new(1),
            cost: 500,
        });
        assert_eq!(reservation.route().unwrap().from, LocationId::new(0));
        assert_eq!(reservation.cost(), 500);
    }

    #[test]
    fn test_reservation_serde_round_trip() {
        let reservation = Reservation::builder(ReservationId::new(1007), "Carol", 28, "555-0102")
            .slot(slot(4))
            .route(RouteAssignment {
                from: LocationId::new(2),
                to: LocationId::new(4),
                cost: 600,
            })
            .build();
        let json = serde_json::to_string(&reservation).unwrap();
        let decoded: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, reservation);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            field: "slot".to_string(),
            message: "slot numbers start at 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("slot"));
        assert!(display.contains("start at 1"));
    }
}
