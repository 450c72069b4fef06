//! Domain services used by the supplier screen.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so the
//! screen can stay focused on modal state and collaborator plumbing.

pub mod supplier;
