use salesbook_core::entity::position_of;
use salesbook_core::{DomainResult, LocationId};
use salesbook_storage::{KeyValueBackend, Loaded, LOCATIONS_KEY, PersistenceBridge};

use crate::location::{ShippingLocation, resolve_name};

/// Insertion-ordered shipping locations, written through on every change.
#[derive(Debug)]
pub struct LocationsStore<B> {
    locations: Vec<ShippingLocation>,
    bridge: PersistenceBridge<B>,
}

impl<B: KeyValueBackend> LocationsStore<B> {
    /// Load persisted locations.
    ///
    /// Seeds a single default location only when the key has never been
    /// written; a persisted (even empty or unreadable) entry is authoritative.
    pub fn open(bridge: PersistenceBridge<B>) -> Self {
        match bridge.load::<ShippingLocation>(LOCATIONS_KEY) {
            Loaded::Absent => {
                let store = Self {
                    locations: vec![ShippingLocation::seeded_default()],
                    bridge,
                };
                tracing::info!("no persisted locations; seeded default location");
                store.persist();
                store
            }
            loaded => {
                let locations = loaded.into_records().unwrap_or_default();
                tracing::info!(count = locations.len(), "locations store opened");
                Self { locations, bridge }
            }
        }
    }

    /// Validate and append a new location.
    pub fn add(&mut self, name: &str, address: &str) -> DomainResult<ShippingLocation> {
        let location = ShippingLocation::create(name, address)?;
        self.locations.push(location.clone());
        tracing::debug!(location_id = %location.id_typed(), name = location.name(), "location added");
        self.persist();
        Ok(location)
    }

    /// Remove the location with `id`; sale records that reference it are left as-is.
    pub fn remove(&mut self, id: &LocationId) -> bool {
        let removed = match position_of(&self.locations, id) {
            Some(idx) => {
                self.locations.remove(idx);
                true
            }
            None => false,
        };
        tracing::debug!(location_id = %id, removed, "location remove requested");
        self.persist();
        removed
    }

    pub fn list(&self) -> &[ShippingLocation] {
        &self.locations
    }

    pub fn get(&self, id: &LocationId) -> Option<&ShippingLocation> {
        position_of(&self.locations, id).map(|idx| &self.locations[idx])
    }

    /// Name of the referenced location, or the placeholder when the
    /// reference is absent or dangling.
    pub fn resolve_name(&self, id: Option<&LocationId>) -> &str {
        resolve_name(&self.locations, id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.bridge.save(LOCATIONS_KEY, &self.locations) {
            tracing::warn!(error = %err, "failed to persist locations; keeping in-memory state");
        }
    }
}
