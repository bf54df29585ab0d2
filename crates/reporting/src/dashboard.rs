use chrono::{DateTime, Utc};
use serde::Serialize;

use salesbook_core::{LocationId, SaleId};
use salesbook_sales::SaleRecord;
use salesbook_shipping::{ShippingLocation, resolve_name};

use crate::totals::{LocationTotal, count, line_total, total_amount, totals_by_location};

/// One history row with its location resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRow {
    pub id: SaleId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
    pub created_at: DateTime<Utc>,
    pub location_id: Option<LocationId>,
    pub location_name: String,
}

/// Read model backing the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_amount: f64,
    pub sale_count: usize,
    pub location_count: usize,
    /// Newest first, same order as the sales store.
    pub rows: Vec<SaleRow>,
    pub by_location: Vec<LocationTotal>,
}

impl Dashboard {
    pub fn build(sales: &[SaleRecord], locations: &[ShippingLocation]) -> Self {
        let rows = sales
            .iter()
            .map(|record| SaleRow {
                id: record.id_typed(),
                name: record.name().to_string(),
                unit_price: record.unit_price(),
                quantity: record.quantity(),
                line_total: line_total(record),
                created_at: record.created_at(),
                location_id: record.location_id(),
                location_name: resolve_name(locations, record.location_id().as_ref())
                    .to_string(),
            })
            .collect();

        Self {
            total_amount: total_amount(sales),
            sale_count: count(sales),
            location_count: locations.len(),
            rows,
            by_location: totals_by_location(sales, locations),
        }
    }
}
