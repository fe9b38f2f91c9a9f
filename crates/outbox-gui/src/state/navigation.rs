//! Navigation state.
//!
//! A minimal back-stack router: route names double as screen titles, the
//! current route sits on top, and the root entry can only be removed by a
//! full reset. Routes may carry a transient `?key=value` suffix that is
//! stripped for display.

use thiserror::Error;

/// Route name of the home screen (start destination).
pub const HOME_ROUTE: &str = "Outbox";

/// Route name of the compose screen.
pub const COMPOSE_ROUTE: &str = "New Message";

/// Errors from navigation-stack operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// Popping when only the root remains. A contract violation: callers
    /// must gate back-navigation on [`NavigationStack::can_go_back`].
    #[error("navigation stack underflow: cannot pop the root destination")]
    Underflow,
}

// =============================================================================
// SCREEN (ROUTE TABLE)
// =============================================================================

/// Destination content for a route.
///
/// The static route table of the application: the home screen takes a
/// navigate-forward message from its host, the compose screen owns its own
/// controller and takes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome screen with the "Compose Email" button.
    Home,
    /// The compose-email form.
    Compose,
}

impl Screen {
    /// Maps a route identifier to its destination content.
    ///
    /// Any `?...` parameter suffix is ignored for the lookup, matching how
    /// the title is derived.
    pub fn for_route(route: &str) -> Option<Self> {
        match strip_params(route) {
            HOME_ROUTE => Some(Self::Home),
            COMPOSE_ROUTE => Some(Self::Compose),
            _ => None,
        }
    }
}

fn strip_params(route: &str) -> &str {
    route.split_once('?').map_or(route, |(head, _)| head)
}

// =============================================================================
// NAVIGATION STACK
// =============================================================================

/// Ordered list of active routes, root-first, current-on-top.
///
/// Never empty once initialized: the root is pushed exactly once at
/// construction and only [`NavigationStack::reset_to`] can replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    routes: Vec<String>,
}

impl NavigationStack {
    /// Creates a stack holding only the root destination.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            routes: vec![root.into()],
        }
    }

    /// Pushes a destination on top.
    pub fn push(&mut self, route: impl Into<String>) {
        self.routes.push(route.into());
    }

    /// Pops the current destination and returns it.
    ///
    /// Fails with [`NavigationError::Underflow`] when only the root
    /// remains; the back affordance must be structurally absent in that
    /// case rather than handled here.
    pub fn pop(&mut self) -> Result<String, NavigationError> {
        if self.routes.len() <= 1 {
            return Err(NavigationError::Underflow);
        }
        Ok(self.routes.pop().expect("stack is non-empty"))
    }

    /// Discards the whole stack and reinitializes with a single root entry
    /// ("return home, forgetting history").
    pub fn reset_to(&mut self, root: impl Into<String>) {
        self.routes.clear();
        self.routes.push(root.into());
    }

    /// The current (top) route.
    pub fn current(&self) -> &str {
        self.routes.last().expect("stack is never empty")
    }

    /// The current route with any trailing `?...` suffix removed, for the
    /// title bar.
    pub fn display_title(&self) -> &str {
        strip_params(self.current())
    }

    /// Whether a previous destination exists to return to.
    pub fn can_go_back(&self) -> bool {
        self.routes.len() > 1
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The full route sequence, root-first.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(HOME_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_pop_round_trips() {
        let mut nav = NavigationStack::new(HOME_ROUTE);
        let before = nav.clone();
        nav.push(COMPOSE_ROUTE);
        assert_eq!(nav.current(), COMPOSE_ROUTE);
        assert_eq!(nav.pop().unwrap(), COMPOSE_ROUTE);
        assert_eq!(nav, before);
    }

    #[test]
    fn test_pop_on_root_underflows_and_leaves_stack_intact() {
        let mut nav = NavigationStack::new(HOME_ROUTE);
        assert_eq!(nav.pop().unwrap_err(), NavigationError::Underflow);
        assert_eq!(nav.routes(), [HOME_ROUTE]);
    }

    #[test]
    fn test_reset_to_collapses_any_stack() {
        let mut nav = NavigationStack::new(HOME_ROUTE);
        nav.push(COMPOSE_ROUTE);
        nav.push("New Message?draft=1");
        nav.reset_to(HOME_ROUTE);
        assert_eq!(nav.len(), 1);
        assert_eq!(nav.current(), HOME_ROUTE);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_back_affordance_iff_more_than_one_entry() {
        let mut nav = NavigationStack::new(HOME_ROUTE);
        assert!(!nav.can_go_back());
        nav.push(COMPOSE_ROUTE);
        assert!(nav.can_go_back());
        nav.pop().unwrap();
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_display_title_strips_parameter_suffix() {
        let mut nav = NavigationStack::new(HOME_ROUTE);
        nav.push("New Message?draft=1");
        assert_eq!(nav.display_title(), "New Message");
        assert_eq!(nav.current(), "New Message?draft=1");
    }

    #[test]
    fn test_route_table() {
        assert_eq!(Screen::for_route(HOME_ROUTE), Some(Screen::Home));
        assert_eq!(Screen::for_route(COMPOSE_ROUTE), Some(Screen::Compose));
        assert_eq!(Screen::for_route("New Message?draft=1"), Some(Screen::Compose));
        assert_eq!(Screen::for_route("Nowhere"), None);
    }
}
