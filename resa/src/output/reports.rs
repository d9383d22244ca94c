//! Report writers for the reservation pool.
//!
//! Each writer renders one summary into any [`std::fmt::Write`] sink.
//! Reports meant for fixed-size surfaces go through
//! [`ReportBuffer`](crate::ReportBuffer), which bounds and truncates the
//! output safely; tests and unbounded callers can pass a plain `String`.

use std::fmt::{self, Write};

use crate::engine::ReservationEngine;
use crate::error::Error;
use crate::graph::{route_cost, LocationId, RouteGraph};
use crate::reservation::{Reservation, Slot};

/// Writes one reservation row.
///
/// The route segment is only present when a route is assigned. Route
/// endpoints unknown to the graph (possible after hand-editing the state
/// files) render as `N/A`.
fn write_row<W: Write>(
    graph: &RouteGraph,
    reservation: &Reservation,
    out: &mut W,
) -> fmt::Result {
    write!(
        out,
        "ID:{} | {} | Age:{} | Contact:{}",
        reservation.id(),
        reservation.name(),
        reservation.age(),
        reservation.contact()
    )?;
    if let Some(slot) = reservation.slot() {
        write!(out, " | Slot:{slot}")?;
    }
    if let Some(route) = reservation.route() {
        write!(
            out,
            " | Route:{}->{} | Cost:\u{20b9}{}",
            graph.name_or_na(route.from),
            graph.name_or_na(route.to),
            route.cost
        )?;
    }
    writeln!(out)
}

/// Writes the confirmed reservation list in booking order.
///
/// # Errors
///
/// Propagates formatting errors from the sink.
pub fn write_confirmed<W: Write>(engine: &ReservationEngine, out: &mut W) -> fmt::Result {
    let mut any = false;
    for reservation in engine.confirmed() {
        any = true;
        write_row(engine.graph(), reservation, out)?;
    }
    if !any {
        writeln!(out, "No confirmed reservations.")?;
    }
    Ok(())
}

/// Writes the waitlist in queue order, head first.
///
/// # Errors
///
/// Propagates formatting errors from the sink.
pub fn write_waitlist<W: Write>(engine: &ReservationEngine, out: &mut W) -> fmt::Result {
    let mut any = false;
    for reservation in engine.waitlisted() {
        any = true;
        write_row(engine.graph(), reservation, out)?;
    }
    if !any {
        writeln!(out, "Waitlist empty.")?;
    }
    Ok(())
}

/// Writes one line per slot, naming its holder or marking it available.
///
/// # Errors
///
/// Propagates formatting errors from the sink.
pub fn write_slot_map<W: Write>(engine: &ReservationEngine, out: &mut W) -> fmt::Result {
    for number in 1..=engine.capacity() {
        let Ok(slot) = Slot::try_from(number) else {
            continue;
        };
        match engine.slot_holder(slot) {
            Some(holder) => writeln!(
                out,
                "Slot {number} - {} (ID:{})",
                holder.name(),
                holder.id()
            )?,
            None => writeln!(out, "Slot {number} - Available")?,
        }
    }
    Ok(())
}

/// Writes the capacity/occupancy summary.
///
/// # Errors
///
/// Propagates formatting errors from the sink.
pub fn write_availability<W: Write>(engine: &ReservationEngine, out: &mut W) -> fmt::Result {
    writeln!(out, "Total: {}", engine.capacity())?;
    writeln!(out, "Booked: {}", engine.occupancy())?;
    writeln!(out, "Available: {}", engine.available())
}

/// Writes a shortest-path narrative between two locations.
///
/// On success the output is the path, one `Distance:` line and one
/// `Cost:` line; `Ok(true)` is returned. Invalid indices and unreachable
/// pairs produce a one-line message instead and return `Ok(false)`.
///
/// # Errors
///
/// Propagates formatting errors from the sink.
///
/// # Examples
///
/// ```
/// use resa::output::reports::write_route_narrative;
/// use resa::{LocationId, RouteGraph};
///
/// let graph = RouteGraph::demo();
/// let mut text = String::new();
/// let found =
///     write_route_narrative(&graph, LocationId::new(0), LocationId::new(1), &mut text).unwrap();
///
/// assert!(found);
/// assert_eq!(text, "Delhi -> Mumbai\nDistance: 5\nCost: \u{20b9}500\n");
/// ```
pub fn write_route_narrative<W: Write>(
    graph: &RouteGraph,
    from: LocationId,
    to: LocationId,
    out: &mut W,
) -> Result<bool, fmt::Error> {
    match graph.shortest_path(from, to) {
        Ok(found) => {
            for (position, node) in found.nodes.iter().enumerate() {
                if position > 0 {
                    out.write_str(" -> ")?;
                }
                out.write_str(graph.name_or_na(*node))?;
            }
            writeln!(out)?;
            writeln!(out, "Distance: {}", found.distance)?;
            writeln!(out, "Cost: \u{20b9}{}", route_cost(found.distance))?;
            Ok(true)
        }
        Err(Error::UnknownLocation { count, .. }) => {
            writeln!(
                out,
                "Invalid location indices. Valid: 0..{}",
                count.saturating_sub(1)
            )?;
            Ok(false)
        }
        Err(_) => {
            writeln!(
                out,
                "No route exists between {} and {}.",
                graph.name_or_na(from),
                graph.name_or_na(to)
            )?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BookRequest, ReservationEngine};
    use crate::output::ReportBuffer;

    fn engine_with_bookings(count: usize) -> ReservationEngine {
        let mut engine = ReservationEngine::new(RouteGraph::demo());
        for offset in 0..count {
            engine
                .book(BookRequest::new(
                    format!("guest-{offset}"),
                    30,
                    "555-0100",
                    LocationId::new(0),
                    LocationId::new(1),
                ))
                .unwrap();
        }
        engine
    }

    #[test]
    fn test_confirmed_report_empty() {
        let engine = engine_with_bookings(0);
        let mut text = String::new();
        write_confirmed(&engine, &mut text).unwrap();
        assert_eq!(text, "No confirmed reservations.\n");
    }

    #[test]
    fn test_confirmed_report_rows() {
        let engine = engine_with_bookings(2);
        let mut text = String::new();
        write_confirmed(&engine, &mut text).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "ID:1000 | guest-0 | Age:30 | Contact:555-0100 | Slot:1 | Route:Delhi->Mumbai | Cost:\u{20b9}500"
        );
        assert!(lines[1].starts_with("ID:1001"));
    }

    #[test]
    fn test_waitlist_report_empty() {
        let engine = engine_with_bookings(1);
        let mut text = String::new();
        write_waitlist(&engine, &mut text).unwrap();
        assert_eq!(text, "Waitlist empty.\n");
    }

    #[test]
    fn test_waitlist_report_rows_have_no_slot() {
        let engine = engine_with_bookings(6);
        let mut text = String::new();
        write_waitlist(&engine, &mut text).unwrap();
        assert_eq!(
            text,
            "ID:1005 | guest-5 | Age:30 | Contact:555-0100 | Route:Delhi->Mumbai | Cost:\u{20b9}500\n"
        );
    }

    #[test]
    fn test_slot_map_mixes_held_and_available() {
        let mut engine = engine_with_bookings(2);
        engine.cancel(crate::ReservationId::new(1000));

        let mut text = String::new();
        write_slot_map(&engine, &mut text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Slot 1 - Available");
        assert_eq!(lines[1], "Slot 2 - guest-1 (ID:1001)");
        assert_eq!(lines[2], "Slot 3 - Available");
    }

    #[test]
    fn test_availability_summary() {
        let engine = engine_with_bookings(2);
        let mut text = String::new();
        write_availability(&engine, &mut text).unwrap();
        assert_eq!(text, "Total: 5\nBooked: 2\nAvailable: 3\n");
    }

    #[test]
    fn test_route_narrative_success() {
        let graph = RouteGraph::demo();
        let mut text = String::new();
        let found =
            write_route_narrative(&graph, LocationId::new(0), LocationId::new(5), &mut text)
                .unwrap();
        assert!(found);
        assert!(text.ends_with("Distance: 16\nCost: \u{20b9}1600\n"));
        assert!(text.starts_with("Delhi -> "));
        assert!(text.contains("Bangalore"));
    }

    #[test]
    fn test_route_narrative_invalid_index() {
        let graph = RouteGraph::demo();
        let mut text = String::new();
        let found =
            write_route_narrative(&graph, LocationId::new(0), LocationId::new(9), &mut text)
                .unwrap();
        assert!(!found);
        assert_eq!(text, "Invalid location indices. Valid: 0..5\n");
    }

    #[test]
    fn test_route_narrative_unreachable() {
        let graph = RouteGraph::new(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            &[(0, 1, 2)],
        )
        .unwrap();
        let mut text = String::new();
        let found =
            write_route_narrative(&graph, LocationId::new(0), LocationId::new(2), &mut text)
                .unwrap();
        assert!(!found);
        assert_eq!(text, "No route exists between A and C.\n");
    }

    #[test]
    fn test_reports_respect_buffer_capacity() {
        let engine = engine_with_bookings(5);

        // Generous capacity: complete and untruncated.
        let mut full = ReportBuffer::new(4096);
        write_confirmed(&engine, &mut full).unwrap();
        assert!(!full.truncated());
        assert_eq!(full.as_str().lines().count(), 5);

        // Tiny capacity: bounded, well-formed, flagged.
        let mut tiny = ReportBuffer::new(40);
        write_confirmed(&engine, &mut tiny).unwrap();
        assert!(tiny.truncated());
        assert!(tiny.len() <= tiny.capacity());
        assert!(std::str::from_utf8(tiny.as_str().as_bytes()).is_ok());
    }

    #[test]
    fn test_narrative_truncation_is_char_safe() {
        let graph = RouteGraph::demo();
        // Capacity chosen to land inside the cost line's rupee sign region.
        for capacity in 20..40 {
            let mut buf = ReportBuffer::new(capacity);
            let _ = write_route_narrative(&graph, LocationId::new(0), LocationId::new(5), &mut buf)
                .unwrap();
            assert!(buf.len() <= capacity);
            assert!(std::str::from_utf8(buf.as_str().as_bytes()).is_ok());
        }
    }
}
