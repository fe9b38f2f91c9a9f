//! Home screen message handlers.

use iced::Task;

use crate::handler::MessageHandler;
use crate::message::{HomeMessage, Message};
use crate::state::navigation::COMPOSE_ROUTE;
use crate::state::AppState;

/// Handles welcome-screen actions.
pub struct HomeHandler;

impl MessageHandler<HomeMessage> for HomeHandler {
    fn handle(&self, state: &mut AppState, msg: HomeMessage) -> Task<Message> {
        match msg {
            HomeMessage::ComposeClicked => {
                tracing::info!("Navigating to compose screen");
                state.nav.push(COMPOSE_ROUTE);

                // Fresh mount: request focus on the To field exactly once.
                state.compose.reset_initial_focus();
                if state.compose.take_initial_focus() {
                    iced::widget::operation::focus_next()
                } else {
                    Task::none()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::{Screen, HOME_ROUTE};
    use crate::state::FormField;

    #[test]
    fn test_compose_clicked_pushes_route_and_focuses_to() {
        let mut state = AppState::new();
        let _task = HomeHandler.handle(&mut state, HomeMessage::ComposeClicked);

        assert_eq!(state.nav.routes(), [HOME_ROUTE, "New Message"]);
        assert_eq!(state.current_screen(), Some(Screen::Compose));
        assert_eq!(state.compose.focused_field(), Some(FormField::To));
    }
}
