//! Supplier service — CRUD mutations and required-field validation.
//!
//! DESIGN
//! ======
//! Every mutation works on a scratch copy of the in-memory list, writes the
//! whole copy back to the slot, and commits the copy to memory only after
//! the write succeeded. The list is the source of truth for display; the
//! slot only ever sees wholesale replacement.
//!
//! ERROR HANDLING
//! ==============
//! Updating an id that is no longer present is an explicit `NotFound`, not
//! a silent no-op. Store write failures propagate to the caller unchanged
//! and leave the in-memory list untouched.

use tracing::info;
use uuid::Uuid;

use crate::state::{Draft, Supplier};
use crate::store::{StoreError, SupplierStore};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("supplier not found: {0}")]
    NotFound(Uuid),
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// First form field found blank during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankField {
    Name,
    Address,
    Phone,
}

impl BlankField {
    /// Warning text shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Name => "Supplier name is blank",
            Self::Address => "Supplier address is blank",
            Self::Phone => "Supplier phone is blank",
        }
    }

    /// Machine-readable tag naming the offending field.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Phone => "phone",
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check required fields in fixed order: name, then address, then phone.
/// The first blank field wins; there is no aggregation.
///
/// # Errors
///
/// Returns the first [`BlankField`] found empty.
pub fn validate(draft: &Draft) -> Result<(), BlankField> {
    if draft.name.is_empty() {
        return Err(BlankField::Name);
    }
    if draft.address.is_empty() {
        return Err(BlankField::Address);
    }
    if draft.phone.is_empty() {
        return Err(BlankField::Phone);
    }
    Ok(())
}

// =============================================================================
// CREATE
// =============================================================================

/// Append a new supplier built from the draft and persist the full list.
/// The id is a fresh v4 UUID, assigned here and never reassigned.
///
/// # Errors
///
/// Returns a storage error if the write fails; the list is left untouched.
pub fn create(
    store: &dyn SupplierStore,
    suppliers: &mut Vec<Supplier>,
    draft: &Draft,
) -> Result<Supplier, SupplierError> {
    let record = Supplier {
        id: Uuid::new_v4(),
        name: draft.name.clone(),
        address: draft.address.clone(),
        phone: draft.phone.clone(),
    };

    let mut next = suppliers.clone();
    next.push(record.clone());
    store.save_all(&next)?;
    *suppliers = next;

    info!(id = %record.id, "supplier created");
    Ok(record)
}

// =============================================================================
// UPDATE
// =============================================================================

/// Replace the record with the matching id (first match, linear scan) and
/// persist the full list.
///
/// # Errors
///
/// Returns `NotFound` if no record carries the id, or a storage error if
/// the write fails. Either way the list is left untouched.
pub fn update(
    store: &dyn SupplierStore,
    suppliers: &mut Vec<Supplier>,
    id: Uuid,
    draft: &Draft,
) -> Result<Supplier, SupplierError> {
    let index = suppliers
        .iter()
        .position(|s| s.id == id)
        .ok_or(SupplierError::NotFound(id))?;

    let record = Supplier {
        id,
        name: draft.name.clone(),
        address: draft.address.clone(),
        phone: draft.phone.clone(),
    };

    let mut next = suppliers.clone();
    next[index] = record.clone();
    store.save_all(&next)?;
    *suppliers = next;

    info!(%id, "supplier updated");
    Ok(record)
}

// =============================================================================
// DELETE
// =============================================================================

/// Remove the record with the matching id and persist the filtered list.
/// Deleting an id that is not present still rewrites the slot and succeeds.
///
/// # Errors
///
/// Returns a storage error if the write fails; the list is left untouched.
pub fn delete(
    store: &dyn SupplierStore,
    suppliers: &mut Vec<Supplier>,
    id: Uuid,
) -> Result<(), SupplierError> {
    let next: Vec<Supplier> = suppliers.iter().filter(|s| s.id != id).cloned().collect();
    store.save_all(&next)?;
    *suppliers = next;

    info!(%id, "supplier deleted");
    Ok(())
}

/// Empty the collection and remove the slot entirely.
///
/// # Errors
///
/// Returns a storage error if removal fails; the list is left untouched.
pub fn delete_all(
    store: &dyn SupplierStore,
    suppliers: &mut Vec<Supplier>,
) -> Result<(), SupplierError> {
    store.clear()?;
    suppliers.clear();

    info!("all suppliers deleted");
    Ok(())
}

#[cfg(test)]
#[path = "supplier_test.rs"]
mod tests;
