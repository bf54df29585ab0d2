//! Plain-text rendering of the views.

use std::fmt::Write;

use salesbook_reporting::{Dashboard, LocationRef};
use salesbook_shipping::ShippingLocation;

pub fn amount(value: f64) -> String {
    format!("{value:.2}")
}

pub fn dashboard(view: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total sales:  {}", amount(view.total_amount));
    let _ = writeln!(out, "Sales logged: {}", view.sale_count);
    let _ = writeln!(out, "Locations:    {}", view.location_count);

    if view.rows.is_empty() {
        let _ = writeln!(out, "\nNo sales recorded yet.");
        return out;
    }

    let _ = writeln!(out, "\nHistory (newest first):");
    for row in &view.rows {
        let _ = writeln!(
            out,
            "  {}  {} x{} @ {} = {}  [{}]  {}",
            row.created_at.format("%Y-%m-%d %H:%M"),
            row.name,
            row.quantity,
            amount(row.unit_price),
            amount(row.line_total),
            row.location_name,
            row.id,
        );
    }

    let _ = writeln!(out, "\nBy location:");
    for total in &view.by_location {
        let suffix = match total.location {
            LocationRef::Removed(_) => " (removed)",
            LocationRef::Known(_) | LocationRef::Unassigned => "",
        };
        let _ = writeln!(
            out,
            "  {}{}: {} across {} sale(s)",
            total.name,
            suffix,
            amount(total.amount),
            total.sale_count,
        );
    }
    out
}

pub fn locations(locations: &[ShippingLocation]) -> String {
    if locations.is_empty() {
        return "No shipping locations.\n".to_string();
    }
    let mut out = String::new();
    for loc in locations {
        let address = if loc.address().is_empty() { "-" } else { loc.address() };
        let _ = writeln!(out, "  {}  {}  {}", loc.id_typed(), loc.name(), address);
    }
    out
}
