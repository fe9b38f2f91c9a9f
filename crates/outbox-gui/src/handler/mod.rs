//! Message handler architecture.
//!
//! Trait-based handler dispatch that keeps message handling out of the main
//! `App` struct: handlers are grouped by screen and testable against a bare
//! [`AppState`].
//!
//! `App::update` dispatches to the appropriate handler:
//!
//! ```ignore
//! match message {
//!     Message::Home(msg) => HomeHandler.handle(&mut self.state, msg),
//!     Message::Compose(msg) => ComposeHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```

mod compose;
mod home;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use compose::ComposeHandler;
pub use home::HomeHandler;

/// Trait for handling messages in the Iced architecture.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task (`Task::none()` when complete).
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
