//! Supplierbook — a supplier directory screen with pluggable storage.
//!
//! ARCHITECTURE
//! ============
//! Three cooperating pieces:
//!
//! - `store`: the persistence slot. One JSON array behind the
//!   [`SupplierStore`] trait, with a file backend and an in-memory backend.
//! - `screen` + `state`: the view-state controller. Owns the hydrated
//!   supplier list and the modal form draft; CRUD mutations live in
//!   `services::supplier`.
//! - `alert`: confirmation and notification collaborators. Destructive
//!   actions run only after an explicit yes/no confirmation; every outcome
//!   is reported through the injected [`Notifier`].
//!
//! Rendering is the host's problem. The crate holds state, enforces the
//! validation and confirmation rules, and talks to storage.

pub mod alert;
pub mod screen;
pub mod services;
pub mod state;
pub mod store;

pub use alert::{ConfirmDialog, ConfirmPrompt, DialogError, Notifier};
pub use screen::SupplierScreen;
pub use services::supplier::{BlankField, SupplierError};
pub use state::{Draft, ModalState, Mode, Supplier};
pub use store::{JsonFileStore, MemoryStore, StoreError, SupplierStore};
