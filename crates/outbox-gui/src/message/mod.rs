//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and effect results flow through these types into
//! `App::update`.

pub mod compose;
pub mod home;

use std::path::PathBuf;

use iced::keyboard;
use iced::widget::text_editor;

pub use compose::ComposeMessage;
pub use home::HomeMessage;

pub use crate::component::toast::ToastMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Back affordance activated (title-bar chevron or Escape).
    NavigateBack,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Home screen messages.
    Home(HomeMessage),

    /// Compose screen messages.
    Compose(ComposeMessage),

    /// Body editor action. Routed to the shell rather than the compose
    /// handler because the shell owns the editor buffer
    /// (`text_editor::Content` is not `Clone`, so it lives outside
    /// `AppState`).
    ComposeBodyAction(text_editor::Action),

    // =========================================================================
    // Effect results
    // =========================================================================
    /// The attachment picker returned (`None` = cancelled). Dropped when
    /// the compose screen is no longer the active destination.
    AttachmentPicked(Option<PathBuf>),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Toast events (dismissal).
    Toast(ToastMessage),

    /// Keyboard event.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation - placeholder for subscriptions.
    Noop,
}
