use salesbook_core::entity::position_of;
use salesbook_core::{DomainResult, SaleId};
use salesbook_storage::{KeyValueBackend, PersistenceBridge, SALES_KEY};

use crate::record::{SaleInput, SaleRecord};

/// Newest-first collection of sale records, written through on every change.
#[derive(Debug)]
pub struct SalesStore<B> {
    records: Vec<SaleRecord>,
    bridge: PersistenceBridge<B>,
}

impl<B: KeyValueBackend> SalesStore<B> {
    /// Load persisted sales; a missing or unreadable entry starts empty.
    pub fn open(bridge: PersistenceBridge<B>) -> Self {
        let records = bridge
            .load::<SaleRecord>(SALES_KEY)
            .into_records()
            .unwrap_or_default();
        tracing::info!(count = records.len(), "sales store opened");
        Self { records, bridge }
    }

    /// Validate and log a new sale at the front of the collection.
    ///
    /// Nothing is mutated when validation fails.
    pub fn add(&mut self, input: SaleInput) -> DomainResult<SaleRecord> {
        let input = input.validate()?;
        let record = SaleRecord::create(input);
        self.records.insert(0, record.clone());
        tracing::debug!(sale_id = %record.id_typed(), name = record.name(), "sale added");
        self.persist();
        Ok(record)
    }

    /// Remove the sale with `id`. Returns `false` (and changes nothing) if absent.
    pub fn remove(&mut self, id: &SaleId) -> bool {
        let removed = match position_of(&self.records, id) {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        };
        tracing::debug!(sale_id = %id, removed, "sale remove requested");
        self.persist();
        removed
    }

    /// Drop every sale record.
    pub fn clear(&mut self) {
        let dropped = self.records.len();
        self.records.clear();
        tracing::debug!(dropped, "sales cleared");
        self.persist();
    }

    /// Snapshot in display order (newest first).
    pub fn list(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn get(&self, id: &SaleId) -> Option<&SaleRecord> {
        position_of(&self.records, id).map(|idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.bridge.save(SALES_KEY, &self.records) {
            tracing::warn!(error = %err, "failed to persist sales; keeping in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use salesbook_core::{DomainError, LocationId};
    use salesbook_storage::{InMemoryBackend, StorageError};
    use std::sync::Arc;

    struct ReadOnlyBackend;

    impl KeyValueBackend for ReadOnlyBackend {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::io(key, "read-only filesystem"))
        }
    }

    fn test_store() -> SalesStore<Arc<InMemoryBackend>> {
        SalesStore::open(PersistenceBridge::new(Arc::new(InMemoryBackend::new())))
    }

    fn widget(quantity: u32) -> SaleInput {
        SaleInput::new("Widget", 10.5, quantity, None)
    }

    #[test]
    fn add_prepends_and_returns_record() {
        let mut store = test_store();
        let first = store.add(widget(1)).unwrap();
        let second = store.add(widget(2)).unwrap();

        let ids: Vec<_> = store.list().iter().map(|r| r.id_typed()).collect();
        assert_eq!(ids, vec![second.id_typed(), first.id_typed()]);
        assert_ne!(first.id_typed(), second.id_typed());
    }

    #[test]
    fn add_rejects_invalid_input_without_mutation() {
        let mut store = test_store();
        store.add(widget(1)).unwrap();
        let before = store.list().to_vec();

        let err = store.add(SaleInput::new("", 1.0, 1, None)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let err = store.add(widget(0)).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn remove_drops_matching_record_only() {
        let mut store = test_store();
        let keep = store.add(widget(1)).unwrap();
        let gone = store.add(widget(2)).unwrap();

        assert!(store.remove(&gone.id_typed()));
        assert!(store.get(&gone.id_typed()).is_none());
        assert_eq!(store.list(), &[keep]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = test_store();
        store.add(widget(1)).unwrap();
        let before = store.list().to_vec();

        assert!(!store.remove(&SaleId::new()));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn clear_empties_collection() {
        let mut store = test_store();
        for q in 1..=5 {
            store.add(widget(q)).unwrap();
        }
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn mutations_write_through_and_reload() {
        let backend = Arc::new(InMemoryBackend::new());
        let location = LocationId::new();

        let mut store = SalesStore::open(PersistenceBridge::new(Arc::clone(&backend)));
        store
            .add(SaleInput::new("Widget", 10.5, 3, Some(location)))
            .unwrap();
        store.add(widget(1)).unwrap();
        let expected = store.list().to_vec();

        let reopened = SalesStore::open(PersistenceBridge::new(Arc::clone(&backend)));
        assert_eq!(reopened.list(), expected.as_slice());
        assert_eq!(reopened.list()[1].location_id(), Some(location));
    }

    #[test]
    fn clear_is_persisted_as_empty_array() {
        let backend = Arc::new(InMemoryBackend::new());
        let mut store = SalesStore::open(PersistenceBridge::new(Arc::clone(&backend)));
        store.add(widget(1)).unwrap();
        store.clear();

        assert_eq!(backend.read(SALES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn corrupt_entry_opens_empty() {
        let backend = InMemoryBackend::new().with_entry(SALES_KEY, "[{\"id\":");
        let store = SalesStore::open(PersistenceBridge::new(backend));
        assert!(store.is_empty());
    }

    #[test]
    fn save_failure_keeps_in_memory_state() {
        let mut store = SalesStore::open(PersistenceBridge::new(ReadOnlyBackend));
        let record = store.add(widget(2)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&record.id_typed()), Some(&record));
    }

    #[test]
    fn long_price_survives_reload() {
        let backend = Arc::new(InMemoryBackend::new());
        let mut store = SalesStore::open(PersistenceBridge::new(Arc::clone(&backend)));
        store
            .add(SaleInput::new("Widget", 985.6906946328695, 1, None))
            .unwrap();

        let reopened = SalesStore::open(PersistenceBridge::new(backend));
        assert_eq!(reopened.list(), store.list());
        assert_eq!(reopened.list()[0].unit_price(), 985.6906946328695);
    }

    #[test]
    fn sub_millisecond_timestamps_are_stable_across_write_through() {
        let raw = format!(
            r#"[{{"id":"{}","name":"w","price":2,"quantity":1,"timestamp":"2024-05-01T09:30:00.123456Z"}}]"#,
            SaleId::new()
        );
        let backend = Arc::new(InMemoryBackend::new().with_entry(SALES_KEY, &raw));

        let mut loaded = SalesStore::open(PersistenceBridge::new(Arc::clone(&backend)));
        // A no-op remove still writes the collection back.
        assert!(!loaded.remove(&SaleId::new()));

        let reloaded = SalesStore::open(PersistenceBridge::new(backend));
        assert_eq!(reloaded.list(), loaded.list());
        assert_eq!(
            salesbook_core::timestamp::format(&reloaded.list()[0].created_at()),
            "2024-05-01T09:30:00.123Z"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: any finite, non-negative price reloads bit-for-bit.
        #[test]
        fn prices_round_trip_through_persistence(
            prices in prop::collection::vec(
                prop::num::f64::POSITIVE
                    | prop::num::f64::ZERO
                    | prop::num::f64::NORMAL
                    | prop::num::f64::SUBNORMAL,
                1..12,
            )
        ) {
            let backend = Arc::new(InMemoryBackend::new());
            let mut store = SalesStore::open(PersistenceBridge::new(Arc::clone(&backend)));
            for price in prices {
                store.add(SaleInput::new("Widget", price, 1, None)).unwrap();
            }

            let reopened = SalesStore::open(PersistenceBridge::new(backend));
            prop_assert_eq!(reopened.list(), store.list());
        }

        /// Property: list() is the reverse of call order.
        #[test]
        fn list_is_reverse_call_order(quantities in prop::collection::vec(1u32..50, 0..20)) {
            let mut store = test_store();
            let mut added = Vec::new();
            for q in quantities {
                added.push(store.add(widget(q)).unwrap().id_typed());
            }
            added.reverse();

            let listed: Vec<_> = store.list().iter().map(|r| r.id_typed()).collect();
            prop_assert_eq!(listed, added);
        }

        /// Property: a removed id never reappears; other records keep their order.
        #[test]
        fn remove_then_list_excludes_id(count in 1usize..10, pick in 0usize..10) {
            let mut store = test_store();
            for q in 0..count {
                store.add(widget(q as u32 + 1)).unwrap();
            }
            let target = store.list()[pick % count].id_typed();
            let mut expected = store.list().to_vec();
            expected.retain(|r| r.id_typed() != target);

            store.remove(&target);

            prop_assert!(store.list().iter().all(|r| r.id_typed() != target));
            prop_assert_eq!(store.list(), expected.as_slice());
        }
    }
}
