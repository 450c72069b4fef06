//! Supplier screen — modal state machine and user actions.
//!
//! DESIGN
//! ======
//! The screen owns the hydrated supplier list and the modal draft. CRUD
//! mutations live in `services::supplier`; the screen wires them to the
//! injected store, notifier, and confirmation dialog. The list hydrates
//! from the store once at construction and is the single source of truth
//! afterwards — "has suppliers" is derived from it, never from a second
//! store read.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures raise a warning and leave every piece of state
//! untouched. A cancelled confirmation is a silent no-op; a failed dialog
//! surfaces through the error notifier and aborts the action. Store write
//! failures propagate to the caller.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::alert::{ConfirmDialog, ConfirmPrompt, Notifier};
use crate::services::supplier::{self, SupplierError};
use crate::state::{ModalState, Mode, Supplier};
use crate::store::SupplierStore;

// =============================================================================
// MESSAGES
// =============================================================================

/// Success message after a create.
pub const MSG_SAVED: &str = "Supplier saved";
/// Success message after an edit.
pub const MSG_UPDATED: &str = "Supplier updated";
/// Success message after a single delete.
pub const MSG_DELETED: &str = "Supplier deleted";
/// Success message after delete-all.
pub const MSG_ALL_DELETED: &str = "All suppliers deleted";

// =============================================================================
// SCREEN
// =============================================================================

/// View-state controller for the supplier directory.
pub struct SupplierScreen {
    store: Arc<dyn SupplierStore>,
    notifier: Arc<dyn Notifier>,
    dialog: Arc<dyn ConfirmDialog>,
    suppliers: Vec<Supplier>,
    modal: Option<ModalState>,
}

impl SupplierScreen {
    /// Build the screen and hydrate the list from the store.
    #[must_use]
    pub fn new(
        store: Arc<dyn SupplierStore>,
        notifier: Arc<dyn Notifier>,
        dialog: Arc<dyn ConfirmDialog>,
    ) -> Self {
        let suppliers = store.load();
        info!(count = suppliers.len(), "hydrated suppliers from store");
        Self { store, notifier, dialog, suppliers, modal: None }
    }

    /// Current list, insertion order preserved.
    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Whether the delete-all action should be offered.
    #[must_use]
    pub fn has_suppliers(&self) -> bool {
        !self.suppliers.is_empty()
    }

    /// Live modal state, if the modal is open.
    #[must_use]
    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    // =========================================================================
    // MODAL
    // =========================================================================

    /// Open the modal in create mode with a cleared draft.
    pub fn open_create(&mut self) {
        self.modal = Some(ModalState::create());
    }

    /// Open the modal in edit mode, pre-filled from the record's current
    /// in-memory values. An unknown id leaves the modal closed.
    pub fn open_edit(&mut self, id: Uuid) {
        match self.suppliers.iter().find(|s| s.id == id) {
            Some(record) => self.modal = Some(ModalState::edit(record)),
            None => warn!(%id, "edit requested for unknown supplier"),
        }
    }

    /// Close the modal, discarding the draft.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Update the draft name. No-op while the modal is closed.
    pub fn set_name(&mut self, value: &str) {
        if let Some(modal) = &mut self.modal {
            modal.draft.name = value.to_string();
        }
    }

    /// Update the draft address. No-op while the modal is closed.
    pub fn set_address(&mut self, value: &str) {
        if let Some(modal) = &mut self.modal {
            modal.draft.address = value.to_string();
        }
    }

    /// Update the draft phone. No-op while the modal is closed.
    pub fn set_phone(&mut self, value: &str) {
        if let Some(modal) = &mut self.modal {
            modal.draft.phone = value.to_string();
        }
    }

    // =========================================================================
    // SAVE
    // =========================================================================

    /// Validate the draft and persist it: append in create mode, replace in
    /// place in edit mode. On success the modal closes automatically and a
    /// fixed per-operation message is raised through the notifier. A
    /// validation failure raises a warning naming the blank field and leaves
    /// the modal open.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the edited record no longer exists (also
    /// surfaced through the error notifier), or a storage error if the
    /// write fails.
    pub fn save(&mut self) -> Result<(), SupplierError> {
        let Some(modal) = self.modal.clone() else {
            return Ok(());
        };

        if let Err(blank) = supplier::validate(&modal.draft) {
            self.notifier.warning(blank.message(), blank.tag());
            return Ok(());
        }

        let message = match modal.mode {
            Mode::Create => {
                supplier::create(self.store.as_ref(), &mut self.suppliers, &modal.draft)?;
                MSG_SAVED
            }
            Mode::Edit => {
                // ModalState::edit always captures the record id.
                let Some(id) = modal.draft.id else {
                    return Ok(());
                };
                match supplier::update(self.store.as_ref(), &mut self.suppliers, id, &modal.draft) {
                    Ok(_) => MSG_UPDATED,
                    Err(e) => {
                        if matches!(e, SupplierError::NotFound(_)) {
                            self.notifier.error(&e.to_string());
                        }
                        return Err(e);
                    }
                }
            }
        };

        self.notifier.success(message);
        self.close_modal();
        Ok(())
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Delete one supplier after explicit confirmation. Cancelling is a
    /// silent no-op; a dialog failure is reported through the error
    /// notifier and the list is untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the confirmed write fails.
    pub fn delete(&mut self, id: Uuid) -> Result<(), SupplierError> {
        match self.dialog.confirm(&ConfirmPrompt::delete_one()) {
            Ok(true) => {
                supplier::delete(self.store.as_ref(), &mut self.suppliers, id)?;
                self.notifier.success(MSG_DELETED);
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(e) => {
                self.notifier.error(&e.to_string());
                Ok(())
            }
        }
    }

    /// Delete every supplier and remove the slot, after explicit
    /// confirmation. Same cancel/failure semantics as [`Self::delete`].
    ///
    /// # Errors
    ///
    /// Returns a storage error if the confirmed removal fails.
    pub fn delete_all(&mut self) -> Result<(), SupplierError> {
        match self.dialog.confirm(&ConfirmPrompt::delete_all()) {
            Ok(true) => {
                supplier::delete_all(self.store.as_ref(), &mut self.suppliers)?;
                self.notifier.success(MSG_ALL_DELETED);
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(e) => {
                self.notifier.error(&e.to_string());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "screen_test.rs"]
mod tests;
