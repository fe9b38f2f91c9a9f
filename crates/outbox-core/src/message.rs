//! Mail message model.
//!
//! [`MailMessage`] is transient: it is constructed at submit time from the
//! compose form and handed straight to the send effect, never stored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::address::split_addresses;

/// Fixed label shown when an attachment has no resolvable display name.
pub const UNKNOWN_ATTACHMENT: &str = "Unknown";

/// An opaque reference to a picked attachment.
///
/// Only identity and insertion order matter; two references to the same
/// file are distinct list entries and independently removable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    path: PathBuf,
}

impl AttachmentRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The underlying path, for the send handoff.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human-readable name for the attachment list.
    ///
    /// A lookup miss (a path with no final component) degrades to the fixed
    /// [`UNKNOWN_ATTACHMENT`] placeholder rather than surfacing an error.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNKNOWN_ATTACHMENT.to_owned())
    }
}

/// A composed message, ready for the send effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Individual trimmed recipient addresses.
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<AttachmentRef>,
}

impl MailMessage {
    /// Builds a message from raw form values.
    ///
    /// The To value is split on commas and trimmed; every address in the
    /// list becomes a recipient.
    pub fn from_form(
        to: &str,
        subject: &str,
        body: &str,
        attachments: Vec<AttachmentRef>,
    ) -> Self {
        Self {
            recipients: split_addresses(to),
            subject: subject.to_owned(),
            body: body.to_owned(),
            attachments,
        }
    }
}
