//! # Persistence Sync
//!
//! The glue between an in-memory aggregate and its persisted slot.
//!
//! - On hydration the slot is read and parsed. An absent slot, an unreadable slot, or a value
//!   that does not parse all yield the empty aggregate. A corrupt slot is logged and never
//!   treated as fatal.
//! - After every mutation the *complete* aggregate is serialized and written over the slot.
//!   There is no debouncing, diffing, or append log.
//!
//! [`SyncedState`] bundles the aggregate, its slot binding and a `watch` publisher so that
//! "apply, persist, publish" is one call with no async runtime involved.

use crate::state::StoreState;
use crate::storage::{SharedStorage, StorageError};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::watch;
use tracing::{debug, error, warn};

/// Errors raised while writing a slot.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Failed to serialize slot {slot}: {source}")]
    Serialize {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write slot {slot}: {source}")]
    Storage {
        slot: &'static str,
        #[source]
        source: StorageError,
    },
}

/// A storage handle bound to one slot.
#[derive(Debug, Clone)]
pub struct PersistenceSync {
    storage: SharedStorage,
    slot: &'static str,
}

impl PersistenceSync {
    pub fn new(storage: SharedStorage, slot: &'static str) -> Self {
        Self { storage, slot }
    }

    pub fn slot(&self) -> &'static str {
        self.slot
    }

    /// Read the slot, falling back to `T::default()` when it is absent or unusable.
    pub fn load<T: DeserializeOwned + Default>(&self) -> T {
        let slot = self.slot;
        let raw = match self.storage.get_item(slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot, "Slot empty");
                return T::default();
            }
            Err(e) => {
                warn!(slot, error = %e, "Slot unreadable, starting empty");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(slot, "Slot hydrated");
                value
            }
            Err(e) => {
                warn!(slot, error = %e, "Slot corrupt, starting empty");
                T::default()
            }
        }
    }

    /// Overwrite the slot with the serialized value.
    pub fn persist<T: Serialize>(&self, value: &T) -> Result<(), SyncError> {
        let slot = self.slot;
        let raw =
            serde_json::to_string(value).map_err(|source| SyncError::Serialize { slot, source })?;
        self.storage
            .set_item(slot, &raw)
            .map_err(|source| SyncError::Storage { slot, source })?;
        debug!(slot, bytes = raw.len(), "Slot written");
        Ok(())
    }
}

/// An aggregate mirrored into its slot and published to subscribers.
#[derive(Debug)]
pub struct SyncedState<T: StoreState> {
    state: T,
    sync: PersistenceSync,
    publisher: watch::Sender<T>,
}

impl<T: StoreState> SyncedState<T> {
    /// Build the aggregate from whatever `T::SLOT` currently holds.
    pub fn hydrate(storage: SharedStorage) -> Self {
        let sync = PersistenceSync::new(storage, T::SLOT);
        let state: T = sync.load();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            state,
            sync,
            publisher,
        }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    /// A receiver that always holds the latest committed aggregate.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.publisher.subscribe()
    }

    /// Apply a mutation, overwrite the slot, then notify subscribers.
    ///
    /// A failed write is logged; the in-memory aggregate stays authoritative.
    pub fn apply(&mut self, action: T::Action) -> T::ActionResult {
        let result = self.state.apply(action);

        if let Err(e) = self.sync.persist(&self.state) {
            error!(slot = T::SLOT, error = %e, "Persist failed");
        }

        self.publisher.send_replace(self.state.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use serde::Deserialize;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    struct Tally {
        marks: Vec<u32>,
    }

    #[derive(Debug)]
    enum TallyAction {
        Mark(u32),
        Clear,
    }

    impl StoreState for Tally {
        const SLOT: &'static str = "tally";
        type Action = TallyAction;
        type ActionResult = usize;

        fn apply(&mut self, action: TallyAction) -> usize {
            match action {
                TallyAction::Mark(n) => self.marks.push(n),
                TallyAction::Clear => self.marks.clear(),
            }
            self.marks.len()
        }

        fn item_count(&self) -> usize {
            self.marks.len()
        }
    }

    #[test]
    fn load_absent_slot_is_default() {
        let sync = PersistenceSync::new(MemoryStorage::new().shared(), "tally");
        let tally: Tally = sync.load();
        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn load_corrupt_slot_is_default() {
        let storage = MemoryStorage::new();
        storage.set_item("tally", "{not json").unwrap();

        let sync = PersistenceSync::new(storage.shared(), "tally");
        let tally: Tally = sync.load();

        assert!(tally.marks.is_empty());
    }

    #[test]
    fn load_wrong_shape_is_default() {
        let storage = MemoryStorage::new();
        storage.set_item("tally", r#"{"marks":"seven"}"#).unwrap();

        let sync = PersistenceSync::new(storage.shared(), "tally");
        let tally: Tally = sync.load();

        assert!(tally.marks.is_empty());
    }

    #[test]
    fn persist_writes_bare_collection() {
        let storage = MemoryStorage::new();
        let sync = PersistenceSync::new(storage.shared(), "tally");

        sync.persist(&Tally { marks: vec![3, 1] }).unwrap();

        assert_eq!(storage.get_item("tally").unwrap().as_deref(), Some("[3,1]"));
        let reloaded: Tally = sync.load();
        assert_eq!(reloaded.marks, vec![3, 1]);
    }

    #[test]
    fn hydrate_uses_persisted_value() {
        let storage = MemoryStorage::new();
        storage.set_item("tally", "[4,5,6]").unwrap();

        let synced = SyncedState::<Tally>::hydrate(storage.shared());

        assert_eq!(synced.state().marks, vec![4, 5, 6]);
    }

    #[test]
    fn hydrate_does_not_write() {
        let storage = MemoryStorage::new();
        let _synced = SyncedState::<Tally>::hydrate(storage.shared());
        assert_eq!(storage.get_item("tally").unwrap(), None);
    }

    #[test]
    fn apply_persists_full_state_every_time() {
        let storage = MemoryStorage::new();
        let mut synced = SyncedState::<Tally>::hydrate(storage.shared());

        assert_eq!(synced.apply(TallyAction::Mark(1)), 1);
        assert_eq!(storage.get_item("tally").unwrap().as_deref(), Some("[1]"));

        assert_eq!(synced.apply(TallyAction::Mark(2)), 2);
        assert_eq!(storage.get_item("tally").unwrap().as_deref(), Some("[1,2]"));

        assert_eq!(synced.apply(TallyAction::Clear), 0);
        assert_eq!(storage.get_item("tally").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn apply_publishes_to_subscribers() {
        let mut synced = SyncedState::<Tally>::hydrate(MemoryStorage::new().shared());
        let mut rx = synced.subscribe();
        assert!(!rx.has_changed().unwrap());

        synced.apply(TallyAction::Mark(9));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().marks, vec![9]);
    }
}
