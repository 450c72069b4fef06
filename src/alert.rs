//! Confirmation and alert collaborators.
//!
//! DESIGN
//! ======
//! Rendering is out of scope: the screen talks to a [`Notifier`] for
//! transient alerts and a [`ConfirmDialog`] for destructive-action prompts.
//! Hosts supply concrete implementations; unit tests use the recording
//! fakes in `test_helpers`.

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// The dialog could not be presented or resolved.
    #[error("dialog failed: {0}")]
    Presentation(String),
}

/// Transient user-facing alerts.
pub trait Notifier: Send + Sync {
    /// A mutation completed.
    fn success(&self, message: &str);

    /// A validation failure; `field` is the machine-readable tag of the
    /// blank field.
    fn warning(&self, message: &str, field: &str);

    /// An unexpected failure, e.g. a confirmation dialog that could not be
    /// presented.
    fn error(&self, message: &str);
}

/// Modal yes/no confirmation. `Ok(true)` means the user accepted.
pub trait ConfirmDialog: Send + Sync {
    /// Present the prompt and resolve with the user's choice.
    ///
    /// # Errors
    ///
    /// Returns a [`DialogError`] if the dialog itself fails.
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, DialogError>;
}

// =============================================================================
// PROMPTS
// =============================================================================

/// Configuration for a yes/no prompt: title, icon, body text, button labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub icon: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    /// Prompt shown before deleting one supplier.
    #[must_use]
    pub fn delete_one() -> Self {
        Self {
            title: "Delete this supplier?".to_string(),
            icon: "question".to_string(),
            text: "There is no going back".to_string(),
            confirm_label: "Yes, delete".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }

    /// Prompt shown before deleting every supplier.
    #[must_use]
    pub fn delete_all() -> Self {
        Self {
            title: "Delete all suppliers?".to_string(),
            icon: "question".to_string(),
            text: "There is no going back".to_string(),
            confirm_label: "Yes, delete".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "alert_test.rs"]
mod tests;
