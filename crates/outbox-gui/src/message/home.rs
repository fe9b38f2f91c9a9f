//! Home screen messages.

/// Messages from the welcome screen. The screen holds no state of its own;
/// it only asks the shell to navigate forward.
#[derive(Debug, Clone)]
pub enum HomeMessage {
    /// "Compose Email" button pressed.
    ComposeClicked,
}
