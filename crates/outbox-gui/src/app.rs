//! Application shell.
//!
//! Owns the root state, dispatches messages to the screen handlers, and
//! renders the title bar plus the active screen. Back navigation, keyboard
//! shortcuts, toast lifetime, and stale effect results are all resolved
//! here so the handlers stay screen-local.

use iced::keyboard;
use iced::keyboard::key::Named;
use iced::widget::{Space, column, container, stack, text_editor};
use iced::{Element, Length, Subscription, Task, Theme};

use crate::component::{TitleBar, ToastState, view_toast};
use crate::error::GuiError;
use crate::handler::{ComposeHandler, HomeHandler, MessageHandler};
use crate::message::{Message, ToastMessage};
use crate::service;
use crate::state::{AppState, FormField, Screen};
use crate::theme::{SPACING_MD, mail_theme};
use crate::view::{view_compose, view_home};

/// The Outbox application.
pub struct App {
    pub state: AppState,
    /// Editor buffer for the body. Lives outside [`AppState`] because
    /// `text_editor::Content` does not implement `Clone`; the mirrored
    /// value in `ComposeState` is re-synced after every editor action.
    body_editor: text_editor::Content,
}

impl App {
    /// Creates the application, restoring any persisted draft.
    pub fn new() -> (Self, Task<Message>) {
        let mut state = AppState::new();
        if let Some(snapshot) = service::draft::load() {
            state.compose.restore_snapshot(&snapshot);
        }
        let body_editor = text_editor::Content::with_text(state.compose.body.value());
        (Self { state, body_editor }, Task::none())
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Central update dispatch.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateBack => self.navigate_back(),

            Message::Home(msg) => HomeHandler.handle(&mut self.state, msg),
            Message::Compose(msg) => ComposeHandler::default().handle(&mut self.state, msg),

            Message::ComposeBodyAction(action) => {
                let is_edit = action.is_edit();
                self.body_editor.perform(action);
                if is_edit {
                    // Typing in the body implies it holds focus, blurring
                    // the other fields so their deferred errors surface.
                    self.state.compose.focus_field(FormField::Body);
                }
                let text = self.body_editor.text();
                self.state
                    .compose
                    .body
                    .set_value(text.strip_suffix('\n').unwrap_or(&text));
                Task::none()
            }

            Message::AttachmentPicked(result) => {
                self.state.compose.finish_pick();
                match result {
                    None => {
                        tracing::debug!("Attachment pick cancelled");
                    }
                    // The user left the compose screen while the dialog
                    // was open; the result no longer has a home.
                    Some(path) if !self.state.is_compose_active() => {
                        tracing::info!("Dropping stale attachment pick: {}", path.display());
                    }
                    Some(path) => {
                        let attachment = outbox_core::AttachmentRef::new(path);
                        tracing::info!("Attached {}", attachment.display_name());
                        self.state.compose.attachments.add(attachment);
                    }
                }
                Task::none()
            }

            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    /// Pops the current destination, persisting the draft when leaving the
    /// compose screen.
    fn navigate_back(&mut self) -> Task<Message> {
        if !self.state.nav.can_go_back() {
            // Back requests are structurally absent at the root; a request
            // that arrives anyway (e.g. Escape) is ignored.
            tracing::debug!("Back requested at the root destination");
            return Task::none();
        }

        let leaving_compose = self.state.is_compose_active();

        match self.state.nav.pop() {
            Ok(route) => tracing::info!("Navigated back from {route}"),
            Err(err) => {
                tracing::error!("Navigation pop failed: {err}");
                return Task::none();
            }
        }

        if leaving_compose {
            self.state.compose.blur_focused();
            self.save_draft();
        }
        Task::none()
    }

    fn save_draft(&mut self) {
        let snapshot = self.state.compose.snapshot();
        match service::draft::save(&snapshot) {
            Ok(()) => tracing::debug!("Draft saved"),
            Err(err) => {
                let err = GuiError::draft_save(format!("{err:#}"));
                tracing::warn!("{err}");
                if err.is_transient() {
                    self.state.toast = Some(ToastState::warning("Could not save draft"));
                }
            }
        }
    }

    /// Global keyboard shortcuts: Escape navigates back, Tab and Shift+Tab
    /// move focus between the compose fields.
    fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            keyboard::Key::Named(Named::Escape) => self.navigate_back(),

            keyboard::Key::Named(Named::Tab) if self.state.is_compose_active() => {
                let focused = self.state.compose.focused_field();
                if modifiers.shift() {
                    if let Some(previous) = focused.and_then(FormField::previous) {
                        self.state.compose.focus_field(previous);
                    } else {
                        self.state.compose.blur_focused();
                    }
                    iced::widget::operation::focus_previous()
                } else {
                    if let Some(next) = focused.and_then(FormField::next) {
                        self.state.compose.focus_field(next);
                    } else {
                        self.state.compose.blur_focused();
                    }
                    iced::widget::operation::focus_next()
                }
            }

            _ => Task::none(),
        }
    }

    // =========================================================================
    // VIEW
    // =========================================================================

    /// Renders the title bar, the active screen, and any toast overlay.
    pub fn view(&self) -> Element<'_, Message> {
        let mut title_bar = TitleBar::new(self.state.nav.display_title());
        if self.state.nav.can_go_back() {
            title_bar = title_bar.back(Message::NavigateBack);
        }

        let content = match self.state.current_screen() {
            Some(Screen::Compose) => view_compose(&self.state, &self.body_editor),
            // Unroutable entries fall back to home rather than a blank
            // window.
            Some(Screen::Home) | None => view_home(&self.state),
        };

        let page = column![title_bar.view(), content]
            .width(Length::Fill)
            .height(Length::Fill);

        // Toast overlays the page, bottom-right, without stealing layout.
        match &self.state.toast {
            Some(toast) => {
                let toast_row = iced::widget::row![
                    Space::new().width(Length::Fill),
                    container(view_toast(toast)).padding(SPACING_MD),
                ];
                let overlay = column![Space::new().height(Length::Fill), toast_row];
                stack![page, overlay].into()
            }
            None => page.into(),
        }
    }

    /// Window title, tracking the active destination.
    pub fn title(&self) -> String {
        let title = self.state.nav.display_title();
        if self.state.nav.can_go_back() {
            format!("{title} - Outbox")
        } else {
            "Outbox".to_owned()
        }
    }

    pub fn theme(&self) -> Theme {
        mail_theme()
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Runtime event subscriptions: keyboard shortcuts always, the toast
    /// auto-dismiss timer only while a toast is showing.
    pub fn subscription(&self) -> Subscription<Message> {
        use std::time::Duration;

        let keyboard_events = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        });

        let toast_timer = if self.state.toast.is_some() {
            iced::time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_events, toast_timer])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ComposeMessage, HomeMessage};
    use crate::state::navigation::HOME_ROUTE;
    use std::path::PathBuf;

    fn app() -> App {
        App {
            state: AppState::new(),
            body_editor: text_editor::Content::new(),
        }
    }

    fn app_on_compose() -> App {
        let mut app = app();
        let _ = app.update(Message::Home(HomeMessage::ComposeClicked));
        app
    }

    #[test]
    fn test_back_at_root_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.state.nav.routes(), [HOME_ROUTE]);
    }

    #[test]
    fn test_back_from_compose_keeps_typed_state() {
        let mut app = app_on_compose();
        let _ = app.update(Message::Compose(ComposeMessage::SubjectChanged(
            "Hello".to_owned(),
        )));
        let _ = app.update(Message::NavigateBack);

        assert_eq!(app.state.current_screen(), Some(Screen::Home));
        // The controller outlives the screen; nothing typed is lost.
        assert_eq!(app.state.compose.subject.value(), "Hello");
        assert_eq!(app.state.compose.focused_field(), None);
    }

    #[test]
    fn test_stale_attachment_pick_is_dropped() {
        let mut app = app_on_compose();
        let _ = app.update(Message::Compose(ComposeMessage::AttachClicked));
        let _ = app.update(Message::NavigateBack);

        let _ = app.update(Message::AttachmentPicked(Some(PathBuf::from("/tmp/a.txt"))));
        assert_eq!(app.state.compose.attachments.len(), 0);
    }

    #[test]
    fn test_attachment_pick_lands_while_compose_active() {
        let mut app = app_on_compose();
        let _ = app.update(Message::Compose(ComposeMessage::AttachClicked));
        let _ = app.update(Message::AttachmentPicked(Some(PathBuf::from("/tmp/a.txt"))));

        assert_eq!(app.state.compose.attachments.len(), 1);
        // The guard is released, so a new pick may start.
        assert!(app.state.compose.begin_pick());
    }

    #[test]
    fn test_cancelled_pick_releases_guard() {
        let mut app = app_on_compose();
        let _ = app.update(Message::Compose(ComposeMessage::AttachClicked));
        let _ = app.update(Message::AttachmentPicked(None));

        assert_eq!(app.state.compose.attachments.len(), 0);
        assert!(app.state.compose.begin_pick());
    }

    #[test]
    fn test_escape_navigates_back() {
        let mut app = app_on_compose();
        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(Named::Escape),
            keyboard::Modifiers::empty(),
        ));
        assert_eq!(app.state.current_screen(), Some(Screen::Home));
    }

    #[test]
    fn test_tab_moves_focus_forward() {
        let mut app = app_on_compose();
        // Initial focus sits on To.
        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(Named::Tab),
            keyboard::Modifiers::empty(),
        ));
        assert_eq!(
            app.state.compose.focused_field(),
            Some(FormField::Subject)
        );
    }

    #[test]
    fn test_shift_tab_moves_focus_backward() {
        let mut app = app_on_compose();
        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(Named::Tab),
            keyboard::Modifiers::empty(),
        ));
        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(Named::Tab),
            keyboard::Modifiers::SHIFT,
        ));
        assert_eq!(
            app.state.compose.focused_field(),
            Some(FormField::To)
        );
    }

    #[test]
    fn test_toast_dismiss_clears_toast() {
        let mut app = app();
        app.state.toast = Some(ToastState::error("boom"));
        let _ = app.update(Message::Toast(ToastMessage::Dismiss));
        assert!(app.state.toast.is_none());
    }

    #[test]
    fn test_body_edits_sync_into_form_state() {
        let mut app = app_on_compose();
        let _ = app.update(Message::ComposeBodyAction(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("hello body".to_owned())),
        )));

        assert_eq!(app.state.compose.body.value(), "hello body");
        // Editing the body blurs the other fields.
        assert_eq!(
            app.state.compose.focused_field(),
            Some(FormField::Body)
        );
    }

    #[test]
    fn test_body_survives_back_navigation() {
        let mut app = app_on_compose();
        let _ = app.update(Message::ComposeBodyAction(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("draft text".to_owned())),
        )));
        let _ = app.update(Message::NavigateBack);

        assert_eq!(app.state.compose.body.value(), "draft text");
    }

    #[test]
    fn test_window_title_tracks_destination() {
        let mut app = app();
        assert_eq!(app.title(), "Outbox");
        let _ = app.update(Message::Home(HomeMessage::ComposeClicked));
        assert_eq!(app.title(), "New Message - Outbox");
    }
}
