//! Send-side error taxonomy.

use thiserror::Error;

/// Errors from handing a message off to the platform mail client.
///
/// Sending is fire-and-forget: the only observable failure is the launch
/// itself, which maps to "no capable handler". The core never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SendError {
    /// No application on this system could handle the `mailto:` URL.
    #[error("No mail application could be launched: {reason}")]
    NoHandler {
        /// Description of the launch failure.
        reason: String,
    },

    /// The message had no recipients, so a `mailto:` URL would be useless.
    #[error("Message has no recipients")]
    NoRecipients,
}

impl SendError {
    /// Create a no-handler error from any launch failure.
    pub fn no_handler(err: impl std::fmt::Display) -> Self {
        Self::NoHandler {
            reason: err.to_string(),
        }
    }
}
