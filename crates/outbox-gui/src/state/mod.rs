//! Application state types.
//!
//! All mutable state lives here, owned by a single [`AppState`] and mutated
//! only from `App::update`. Views read it, never change it.

pub mod app_state;
pub mod attachments;
pub mod compose;
pub mod field;
pub mod navigation;

pub use app_state::AppState;
pub use attachments::AttachmentList;
pub use compose::{ComposeState, DraftSnapshot, FormField};
pub use field::FieldState;
pub use navigation::{NavigationError, NavigationStack, Screen, COMPOSE_ROUTE, HOME_ROUTE};
