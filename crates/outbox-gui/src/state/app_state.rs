//! Root application state.

use crate::component::toast::ToastState;
use crate::state::compose::ComposeState;
use crate::state::navigation::{NavigationStack, Screen};

/// All application state, owned by the `App` and mutated only in `update`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The navigation back-stack; the shell derives title and back
    /// affordance from it.
    pub nav: NavigationStack,
    /// The compose-form controller. Lives for the whole session so typed
    /// state survives back navigation.
    pub compose: ComposeState,
    /// Transient notice, if one is showing.
    pub toast: Option<ToastState>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination content for the current route.
    pub fn current_screen(&self) -> Option<Screen> {
        Screen::for_route(self.nav.current())
    }

    /// Whether the compose screen is the active destination. Used to drop
    /// effect results that arrive after the user navigated away.
    pub fn is_compose_active(&self) -> bool {
        self.current_screen() == Some(Screen::Compose)
    }
}
