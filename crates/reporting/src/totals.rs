use serde::Serialize;

use salesbook_core::LocationId;
use salesbook_sales::SaleRecord;
use salesbook_shipping::{ShippingLocation, UNKNOWN_LOCATION};

/// `unit_price * quantity` for one record.
pub fn line_total(record: &SaleRecord) -> f64 {
    record.unit_price() * f64::from(record.quantity())
}

/// Sum of line totals; `0.0` for an empty collection.
pub fn total_amount(records: &[SaleRecord]) -> f64 {
    records.iter().map(line_total).sum()
}

/// Number of sale records.
pub fn count(records: &[SaleRecord]) -> usize {
    records.len()
}

/// Units sold across all records.
pub fn total_quantity(records: &[SaleRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.quantity())).sum()
}

/// How a group of sales refers to its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum LocationRef {
    /// References a location that still exists.
    Known(LocationId),
    /// References a location that has since been deleted.
    Removed(LocationId),
    /// No location was chosen.
    Unassigned,
}

/// Revenue attributed to one location reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationTotal {
    pub location: LocationRef,
    pub name: String,
    pub sale_count: usize,
    pub amount: f64,
}

/// Group revenue by location reference.
///
/// Known locations come first in location-list order (only those with
/// sales), then removed references in first-seen order, then unassigned.
pub fn totals_by_location(
    records: &[SaleRecord],
    locations: &[ShippingLocation],
) -> Vec<LocationTotal> {
    let mut known: Vec<LocationTotal> = locations
        .iter()
        .map(|loc| LocationTotal {
            location: LocationRef::Known(loc.id_typed()),
            name: loc.name().to_string(),
            sale_count: 0,
            amount: 0.0,
        })
        .collect();
    let mut removed: Vec<LocationTotal> = Vec::new();
    let mut unassigned = LocationTotal {
        location: LocationRef::Unassigned,
        name: UNKNOWN_LOCATION.to_string(),
        sale_count: 0,
        amount: 0.0,
    };

    for record in records {
        let bucket = match record.location_id() {
            None => &mut unassigned,
            Some(id) => {
                let slot = known
                    .iter()
                    .position(|t| t.location == LocationRef::Known(id));
                match slot {
                    Some(idx) => &mut known[idx],
                    None => {
                        let idx = match removed
                            .iter()
                            .position(|t| t.location == LocationRef::Removed(id))
                        {
                            Some(idx) => idx,
                            None => {
                                removed.push(LocationTotal {
                                    location: LocationRef::Removed(id),
                                    name: UNKNOWN_LOCATION.to_string(),
                                    sale_count: 0,
                                    amount: 0.0,
                                });
                                removed.len() - 1
                            }
                        };
                        &mut removed[idx]
                    }
                }
            }
        };
        bucket.sale_count += 1;
        bucket.amount += line_total(record);
    }

    known
        .into_iter()
        .filter(|t| t.sale_count > 0)
        .chain(removed)
        .chain((unassigned.sale_count > 0).then_some(unassigned))
        .collect()
}
