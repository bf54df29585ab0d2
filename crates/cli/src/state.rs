//! Application state shared by every view.

use std::sync::Arc;

use salesbook_core::{DomainResult, LocationId, SaleId};
use salesbook_reporting::Dashboard;
use salesbook_sales::{SaleInput, SaleRecord, SalesStore};
use salesbook_shipping::{LocationsStore, ShippingLocation};
use salesbook_storage::{FileBackend, KeyValueBackend, PersistenceBridge};

/// Both record stores, opened against one shared backend.
///
/// Every view gets the same operations; which ones are offered is a
/// presentation concern. `remove_*` and `clear_sales` assume the caller has
/// already confirmed intent.
#[derive(Debug)]
pub struct AppState<B> {
    pub sales: SalesStore<Arc<B>>,
    pub locations: LocationsStore<Arc<B>>,
}

impl AppState<FileBackend> {
    /// Open the on-disk stores under `data_dir`.
    pub fn open_dir(data_dir: impl Into<std::path::PathBuf>) -> anyhow::Result<Self> {
        let backend = FileBackend::open(data_dir)?;
        Ok(Self::open(Arc::new(backend)))
    }
}

impl<B: KeyValueBackend> AppState<B> {
    pub fn open(backend: Arc<B>) -> Self {
        Self {
            sales: SalesStore::open(PersistenceBridge::new(Arc::clone(&backend))),
            locations: LocationsStore::open(PersistenceBridge::new(backend)),
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(self.sales.list(), self.locations.list())
    }

    /// Log a sale from raw form fields (`add-sale` view).
    ///
    /// An empty location field means "no location".
    pub fn add_sale(
        &mut self,
        name: &str,
        price: &str,
        quantity: &str,
        location: Option<&str>,
    ) -> DomainResult<SaleRecord> {
        let location_id = match location.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(raw.parse::<LocationId>()?),
            None => None,
        };
        let input = SaleInput::from_form(name, price, quantity, location_id)?;
        self.sales.add(input)
    }

    pub fn remove_sale(&mut self, id: &str) -> DomainResult<bool> {
        let id = id.parse::<SaleId>()?;
        Ok(self.sales.remove(&id))
    }

    pub fn clear_sales(&mut self) {
        self.sales.clear();
    }

    pub fn add_location(&mut self, name: &str, address: &str) -> DomainResult<ShippingLocation> {
        self.locations.add(name, address)
    }

    pub fn remove_location(&mut self, id: &str) -> DomainResult<bool> {
        let id = id.parse::<LocationId>()?;
        Ok(self.locations.remove(&id))
    }
}
