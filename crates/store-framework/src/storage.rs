//! # Persisted Key-Value Storage
//!
//! Stores mirror their aggregate into a named *slot* of a key-value storage that outlives
//! the session, the way a browser keeps `localStorage` between visits. This module defines
//! that adapter and two implementations:
//!
//! - [`MemoryStorage`] keeps slots in a shared in-memory map. Clones share the same slots,
//!   so one instance can seed several sessions in a row.
//! - [`FileStorage`] keeps each slot in `<root>/<slot>.json`, replaced atomically on write.
//!
//! Every write is a full overwrite of the slot.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Named-slot string storage.
pub trait KeyValueStorage: Debug + Send + Sync {
    /// Read a slot. `Ok(None)` means the slot was never written (or was removed).
    fn get_item(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot with `value`.
    fn set_item(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove_item(&self, slot: &str) -> Result<(), StorageError>;
}

/// Storage handle shared between a session's stores.
pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// In-memory storage. Cloning shares the underlying slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this storage for handing to a session.
    pub fn shared(&self) -> SharedStorage {
        Arc::new(self.clone())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn set_item(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, slot: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.remove(slot);
        Ok(())
    }
}

/// Directory-backed storage, one JSON file per slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the storage directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(slot);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    /// Writes to a temporary file in the same directory and renames it over the slot, so a
    /// reader sees either the old value or the new one, never a prefix.
    fn set_item(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(slot);
        let io_error = |source: io::Error| StorageError::Io {
            path: path.clone(),
            source,
        };

        let mut file = NamedTempFile::new_in(&self.root).map_err(io_error)?;
        file.write_all(value.as_bytes()).map_err(io_error)?;
        file.as_file().sync_all().map_err(io_error)?;
        file.persist(&path).map_err(|e| io_error(e.error))?;
        Ok(())
    }

    fn remove_item(&self, slot: &str) -> Result<(), StorageError> {
        let path = self.path_for(slot);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_missing_slot_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("cart").unwrap(), None);
    }

    #[test]
    fn memory_storage_overwrites_and_removes() {
        let storage = MemoryStorage::new();

        storage.set_item("cart", "[1]").unwrap();
        storage.set_item("cart", "[2]").unwrap();
        assert_eq!(storage.get_item("cart").unwrap().as_deref(), Some("[2]"));

        storage.remove_item("cart").unwrap();
        assert_eq!(storage.get_item("cart").unwrap(), None);

        // Removing twice is fine
        storage.remove_item("cart").unwrap();
    }

    #[test]
    fn memory_storage_clones_share_slots() {
        let storage = MemoryStorage::new();
        let shared = storage.shared();

        shared.set_item("wishlist", "[]").unwrap();

        assert_eq!(storage.get_item("wishlist").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_storage_slots_are_independent() {
        let storage = MemoryStorage::new();
        storage.set_item("cart", "[1]").unwrap();
        storage.set_item("wishlist", "[2]").unwrap();

        assert_eq!(storage.get_item("cart").unwrap().as_deref(), Some("[1]"));
        assert_eq!(storage.get_item("wishlist").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn file_storage_round_trips_slots() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("state")).unwrap();

        assert_eq!(storage.get_item("cart").unwrap(), None);

        storage.set_item("cart", r#"[{"id":1}]"#).unwrap();
        assert!(storage.root().join("cart.json").exists());

        // A second handle on the same directory sees the slot
        let reopened = FileStorage::open(storage.root()).unwrap();
        assert_eq!(
            reopened.get_item("cart").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );

        reopened.remove_item("cart").unwrap();
        assert_eq!(storage.get_item("cart").unwrap(), None);
        reopened.remove_item("cart").unwrap();
    }

    #[test]
    fn file_storage_overwrite_leaves_only_the_slot_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        storage.set_item("cart", r#"[{"id":1,"name":"a much longer first value"}]"#).unwrap();
        storage.set_item("cart", "[]").unwrap();

        assert_eq!(storage.get_item("cart").unwrap().as_deref(), Some("[]"));
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("cart.json")]);
    }

    #[test]
    fn file_storage_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set_item("cart", "[1]").unwrap();

        // A directory where the slot file should go makes the rename fail
        fs::create_dir(dir.path().join("wishlist.json")).unwrap();
        assert!(matches!(
            storage.set_item("wishlist", "[2]"),
            Err(StorageError::Io { .. })
        ));

        assert_eq!(storage.get_item("cart").unwrap().as_deref(), Some("[1]"));
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 2);
    }
}
