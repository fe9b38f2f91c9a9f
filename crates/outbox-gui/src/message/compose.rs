//! Compose screen messages.

use crate::state::compose::FormField;

/// Messages from the compose-email form.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// To field edited.
    ToChanged(String),

    /// Subject field edited.
    SubjectChanged(String),

    /// Enter pressed in a field; blurs it (surfacing any deferred error)
    /// and advances focus.
    FieldSubmitted(FormField),

    /// Host-supplied on-screen keyboard visibility changed.
    InputMethodChanged(bool),

    /// Attach button pressed; opens the file picker.
    AttachClicked,

    /// Remove button pressed on the attachment at this index.
    RemoveAttachment(usize),

    /// Send button pressed.
    SendClicked,
}
