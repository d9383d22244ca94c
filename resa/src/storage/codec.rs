//! Line-oriented encoding of reservations and pool metadata.
//!
//! Each reservation is one comma-separated line with fields in fixed
//! order: id, name, age, contact, slot, route-from, route-to, cost. A
//! missing slot or route is written as `-1`. Pool metadata is three lines:
//! next id, capacity, occupancy.
//!
//! Field text is not escaped: a comma inside a name or contact corrupts
//! the record on the way back in. Callers must constrain those fields
//! (they are already bounded in length by the reservation type).

use crate::graph::LocationId;
use crate::reservation::{Reservation, RouteAssignment, Slot};

use super::PoolMeta;

/// Sentinel written for an absent slot or route endpoint.
const NO_FIELD: i64 = -1;

/// Encodes one reservation as a record line (without trailing newline).
pub(super) fn encode_record(reservation: &Reservation) -> String {
    let slot = reservation
        .slot()
        .map_or(NO_FIELD, |slot| i64::from(slot.value()));
    let (from, to) = reservation.route().map_or((NO_FIELD, NO_FIELD), |route| {
        (route.from.index() as i64, route.to.index() as i64)
    });
    format!(
        "{},{},{},{},{},{},{},{}",
        reservation.id().value(),
        reservation.name(),
        reservation.age(),
        reservation.contact(),
        slot,
        from,
        to,
        reservation.cost()
    )
}

/// Decodes one record line back into a reservation.
///
/// Returns `None` for any malformed line: wrong field count, or a numeric
/// field that does not parse. The stored cost is trusted as-is; it is not
/// recomputed from the graph.
pub(super) fn decode_record(line: &str) -> Option<Reservation> {
    let fields: Vec<&str> = line.split(',').collect();
    let [id, name, age, contact, slot, from, to, cost] = fields.as_slice() else {
        return None;
    };

    let id = id.trim().parse::<u32>().ok()?;
    let age = age.trim().parse::<u32>().ok()?;
    let slot = slot.trim().parse::<i64>().ok()?;
    let from = from.trim().parse::<i64>().ok()?;
    let to = to.trim().parse::<i64>().ok()?;
    let cost = cost.trim().parse::<u32>().ok()?;

    let mut builder = Reservation::builder(crate::reservation::ReservationId::new(id), *name, age, *contact);
    if slot > 0 {
        let slot = u32::try_from(slot).ok().and_then(|value| Slot::try_from(value).ok())?;
        builder = builder.slot(slot);
    }
    if from >= 0 && to >= 0 {
        builder = builder.route(RouteAssignment {
            from: LocationId::new(usize::try_from(from).ok()?),
            to: LocationId::new(usize::try_from(to).ok()?),
            cost,
        });
    }
    Some(builder.build())
}

/// Encodes pool metadata as three scalar lines.
pub(super) fn encode_meta(meta: &PoolMeta) -> String {
    format!("{}\n{}\n{}\n", meta.next_id, meta.capacity, meta.occupancy)
}

/// Decodes pool metadata from its three-line form.
///
/// Returns `None` when any of the three values is missing or unparseable,
/// or when the capacity is zero (a pool with no slots cannot have been
/// written by this codec).
pub(super) fn decode_meta(text: &str) -> Option<PoolMeta> {
    let mut lines = text.lines();
    let next_id = lines.next()?.trim().parse::<u32>().ok()?;
    let capacity = lines.next()?.trim().parse::<u32>().ok()?;
    let occupancy = lines.next()?.trim().parse::<u32>().ok()?;
    if capacity == 0 {
        return None;
    }
    Some(PoolMeta {
        next_id,
        capacity,
        occupancy,
    })
}
