//! Store adapter — the JSON storage slot behind a pluggable trait.
//!
//! DESIGN
//! ======
//! The whole collection lives in one named slot as a single JSON array.
//! Every write replaces the slot wholesale; there are no partial updates
//! and no versioning. Two backends: a JSON file (durable) and an in-memory
//! slot (ephemeral, doubles as the injectable fake for unit tests).
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails: an absent, unreadable, or malformed slot degrades
//! silently to an empty list (logged at warn). `save_all` and `clear`
//! propagate I/O and serialization errors to the caller; every operation
//! is a single synchronous attempt, no retries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::state::Supplier;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Pluggable persistence slot for the supplier collection.
pub trait SupplierStore: Send + Sync {
    /// Read the full collection. Absent or malformed content loads as an
    /// empty list, never as an error.
    fn load(&self) -> Vec<Supplier>;

    /// Replace the slot with the given collection, overwriting prior content.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if serialization or the write fails.
    fn save_all(&self, suppliers: &[Supplier]) -> Result<(), StoreError>;

    /// Remove the slot entirely. Clearing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if removal fails.
    fn clear(&self) -> Result<(), StoreError>;
}

// =============================================================================
// JSON FILE BACKEND
// =============================================================================

/// Durable slot: one JSON file holding the whole array. The file path is
/// the fixed namespace identifier.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SupplierStore for JsonFileStore {
    fn load(&self) -> Vec<Supplier> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Supplier>>(&raw) {
            Ok(suppliers) => suppliers,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "slot content is not a supplier array; loading empty");
                Vec::new()
            }
        }
    }

    fn save_all(&self, suppliers: &[Supplier]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(suppliers)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// IN-MEMORY BACKEND
// =============================================================================

/// Ephemeral slot. `None` models an absent slot, distinct from an empty one.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Vec<Supplier>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the slot currently holds a value at all.
    #[must_use]
    pub fn slot_exists(&self) -> bool {
        self.slot.lock().expect("mutex poisoned").is_some()
    }
}

impl SupplierStore for MemoryStore {
    fn load(&self) -> Vec<Supplier> {
        self.slot
            .lock()
            .expect("mutex poisoned")
            .clone()
            .unwrap_or_default()
    }

    fn save_all(&self, suppliers: &[Supplier]) -> Result<(), StoreError> {
        *self.slot.lock().expect("mutex poisoned") = Some(suppliers.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().expect("mutex poisoned") = None;
        Ok(())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
