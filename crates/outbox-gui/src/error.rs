//! GUI-specific error types.
//!
//! Errors here are user-facing: they surface as transient toasts or inline
//! field text, never as a full-screen failure state. The compose form stays
//! usable after any single error.

use thiserror::Error;

use outbox_core::SendError;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// Handing the message to the platform mail client failed.
    #[error("Could not open a mail application: {reason}")]
    SendFailed {
        /// Description of the launch failure.
        reason: String,
    },

    /// Attachment removal requested for an index the list does not hold.
    /// Indicates a desynchronized list/UI - a defect, not a runtime case.
    #[error("Attachment index {index} out of range (list has {len})")]
    AttachmentOutOfRange { index: usize, len: usize },

    /// The draft file could not be written.
    #[error("Failed to save draft: {reason}")]
    DraftSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Whether this error should be shown as an auto-dismissing toast.
    ///
    /// Out-of-range attachment indices are programming defects and are only
    /// logged, never surfaced.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::SendFailed { .. } | Self::DraftSave { .. })
    }

    /// Create a send error from any launch failure.
    pub fn send_failed(err: impl std::fmt::Display) -> Self {
        Self::SendFailed {
            reason: err.to_string(),
        }
    }

    /// Create a draft-save error.
    pub fn draft_save(err: impl std::fmt::Display) -> Self {
        Self::DraftSave {
            reason: err.to_string(),
        }
    }
}

impl From<SendError> for GuiError {
    fn from(err: SendError) -> Self {
        Self::send_failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GuiError::draft_save("disk full").is_transient());
        assert!(GuiError::send_failed("no handler registered").is_transient());
        assert!(!GuiError::AttachmentOutOfRange { index: 3, len: 1 }.is_transient());
    }

    #[test]
    fn test_send_error_conversion() {
        let err: GuiError = SendError::no_handler("launch failed").into();
        assert!(matches!(err, GuiError::SendFailed { .. }));
    }
}
