use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use salesbook_core::{DomainError, DomainResult, Entity, LocationId, SaleId, timestamp};

/// One logged sale. Immutable once created.
///
/// Persisted as `{id, name, price, quantity, timestamp, locationId?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    id: SaleId,
    name: String,
    #[serde(rename = "price")]
    unit_price: f64,
    quantity: u32,
    #[serde(rename = "timestamp", with = "timestamp::serde_text")]
    created_at: DateTime<Utc>,
    #[serde(
        rename = "locationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    location_id: Option<LocationId>,
}

impl SaleRecord {
    /// Build a record from a validated input, stamping a fresh id and time.
    pub(crate) fn create(input: SaleInput) -> Self {
        Self {
            id: SaleId::new(),
            name: input.name,
            unit_price: input.unit_price,
            quantity: input.quantity,
            created_at: timestamp::now(),
            location_id: input.location_id,
        }
    }

    /// Reassemble a record from stored parts (no validation is applied).
    pub fn rehydrate(
        id: SaleId,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
        created_at: DateTime<Utc>,
        location_id: Option<LocationId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
            created_at,
            location_id,
        }
    }

    pub fn id_typed(&self) -> SaleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Weak reference to a shipping location; may dangle.
    pub fn location_id(&self) -> Option<LocationId> {
        self.location_id
    }
}

impl Entity for SaleRecord {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for logging a new sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleInput {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub location_id: Option<LocationId>,
}

impl SaleInput {
    pub fn new(
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
        location_id: Option<LocationId>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            location_id,
        }
    }

    /// Parse raw form fields. Numbers that fail to parse are validation errors.
    pub fn from_form(
        name: &str,
        unit_price: &str,
        quantity: &str,
        location_id: Option<LocationId>,
    ) -> DomainResult<Self> {
        let unit_price = unit_price
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::validation("price must be a number"))?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::validation("quantity must be a positive whole number"))?;

        Ok(Self::new(name, unit_price, quantity, location_id))
    }

    /// Check required fields and ranges; trims the name.
    pub fn validate(mut self) -> DomainResult<Self> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if trimmed.len() != self.name.len() {
            self.name = trimmed.to_string();
        }

        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(DomainError::validation(
                "price must be a non-negative number",
            ));
        }

        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        Ok(self)
    }
}
