use serde::{Deserialize, Serialize};

use salesbook_core::entity::position_of;
use salesbook_core::{DomainError, DomainResult, Entity, LocationId};

/// Name given to the location seeded on first run.
pub const DEFAULT_LOCATION_NAME: &str = "Main Store";

/// Placeholder shown when a sale has no location or points at a deleted one.
pub const UNKNOWN_LOCATION: &str = "N/A";

/// A named delivery/pickup destination. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingLocation {
    id: LocationId,
    name: String,
    address: String,
}

impl ShippingLocation {
    /// Validate and build a new location with a fresh id.
    pub fn create(name: &str, address: &str) -> DomainResult<Self> {
        let name = name.trim();
        let address = address.trim();
        if name.is_empty() {
            return Err(DomainError::validation("location name must not be empty"));
        }
        if address.is_empty() {
            return Err(DomainError::validation("location address must not be empty"));
        }

        Ok(Self {
            id: LocationId::new(),
            name: name.to_string(),
            address: address.to_string(),
        })
    }

    /// The location seeded when no persisted state exists. Its address is empty.
    pub fn seeded_default() -> Self {
        Self {
            id: LocationId::new(),
            name: DEFAULT_LOCATION_NAME.to_string(),
            address: String::new(),
        }
    }

    pub fn id_typed(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Entity for ShippingLocation {
    type Id = LocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Look up a location name in `locations`, falling back to [`UNKNOWN_LOCATION`].
pub fn resolve_name<'a>(locations: &'a [ShippingLocation], id: Option<&LocationId>) -> &'a str {
    id.and_then(|id| position_of(locations, id))
        .map(|idx| locations[idx].name())
        .unwrap_or(UNKNOWN_LOCATION)
}
