//! Supplier records and modal view state.
//!
//! DESIGN
//! ======
//! `Supplier` is the persisted record and mirrors the JSON objects in the
//! storage slot. `ModalState` mirrors the form being edited: the draft is
//! rebuilt every time the modal opens so stale field values never leak
//! between operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// SUPPLIER RECORD
// =============================================================================

/// One persisted supplier entity.
///
/// Ids are v4 UUIDs, assigned once at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
}

// =============================================================================
// MODAL STATE
// =============================================================================

/// Which flow the shared modal is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

/// Transient form fields mirroring the record being added or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// `None` in create mode; the target record's id in edit mode.
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Live modal: title, operation mode, and the in-progress draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub title: String,
    pub mode: Mode,
    pub draft: Draft,
}

impl ModalState {
    /// Modal opened for registering a new supplier. All draft fields start
    /// cleared.
    #[must_use]
    pub fn create() -> Self {
        Self {
            title: "Register supplier".to_string(),
            mode: Mode::Create,
            draft: Draft::default(),
        }
    }

    /// Modal opened for editing, pre-filled from the record's current values.
    #[must_use]
    pub fn edit(record: &Supplier) -> Self {
        Self {
            title: "Edit supplier".to_string(),
            mode: Mode::Edit,
            draft: Draft {
                id: Some(record.id),
                name: record.name.clone(),
                address: record.address.clone(),
                phone: record.phone.clone(),
            },
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_serde_round_trip() {
        let record = test_helpers::dummy_supplier("Acme");
        let json = serde_json::to_string(&record).unwrap();
        let restored: Supplier = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn create_modal_starts_with_cleared_draft() {
        let modal = ModalState::create();
        assert_eq!(modal.mode, Mode::Create);
        assert_eq!(modal.title, "Register supplier");
        assert_eq!(modal.draft, Draft::default());
    }

    #[test]
    fn edit_modal_prefills_draft_from_record() {
        let record = test_helpers::dummy_supplier("Acme");
        let modal = ModalState::edit(&record);
        assert_eq!(modal.mode, Mode::Edit);
        assert_eq!(modal.title, "Edit supplier");
        assert_eq!(modal.draft.id, Some(record.id));
        assert_eq!(modal.draft.name, record.name);
        assert_eq!(modal.draft.address, record.address);
        assert_eq!(modal.draft.phone, record.phone);
    }
}
