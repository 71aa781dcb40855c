//! Plain-text rendering of engine results.

use std::fmt::Write;

use boarding_model::time::format_departure;
use boarding_model::{DashboardSnapshot, Direction, PassengerRecord, Trip};

/// One line per trip: destination, departure and vehicles.
pub fn trips(trips: &[&Trip]) -> String {
    let mut out = String::new();
    for trip in trips {
        let _ = writeln!(
            out,
            "{}  {}  [{}]",
            format_departure(&trip.departure),
            trip.destination,
            trip.vehicles.join(", ")
        );
    }
    out
}

/// Summary line for a freshly boarded record.
pub fn boarded(record: &PassengerRecord) -> String {
    format!(
        "boarded {} ({}) {} at {}",
        record.guest_name,
        record.wristband,
        record.boarded_label.as_deref().unwrap_or_default(),
        record.boarded_at.as_deref().unwrap_or_default()
    )
}

fn passenger_line(out: &mut String, record: &PassengerRecord) {
    let _ = writeln!(
        out,
        "  {:<8} {:<28} {:<16} {}",
        record.wristband,
        record.guest_name,
        record.vehicle.as_deref().unwrap_or("-"),
        record.boarded_at.as_deref().unwrap_or("-")
    );
}

/// The dashboard: overall counts, per-vehicle counts and passenger lists.
pub fn snapshot(snapshot: &DashboardSnapshot) -> String {
    let selection = &snapshot.selection;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | {} | {}",
        selection.direction,
        selection.leg_group(),
        selection.vehicle
    );
    let _ = write!(out, "boarded {}/{}", snapshot.overall.boarded, snapshot.overall.total);
    if let Some(missing) = snapshot.overall.missing {
        let _ = write!(out, "  missing {missing}");
    }
    out.push('\n');

    for vehicle in &snapshot.vehicles {
        let marker = if vehicle.vehicle == selection.vehicle { '*' } else { ' ' };
        let _ = writeln!(out, " {marker} {:<16} {}", vehicle.vehicle, vehicle.stats.boarded);
    }

    let _ = writeln!(out, "boarded passengers ({}):", snapshot.passengers_boarded.len());
    for record in &snapshot.passengers_boarded {
        passenger_line(&mut out, record);
    }
    if selection.direction == Direction::Return {
        let _ = writeln!(out, "missing passengers ({}):", snapshot.passengers_missing.len());
        for record in &snapshot.passengers_missing {
            passenger_line(&mut out, record);
        }
    }
    out
}
