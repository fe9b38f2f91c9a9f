//! Compose screen message handlers.

use iced::Task;

use outbox_core::{MailMessage, SendError};

use crate::component::toast::ToastState;
use crate::error::GuiError;
use crate::handler::MessageHandler;
use crate::message::{ComposeMessage, Message};
use crate::service::{picker, send};
use crate::state::compose::FormField;
use crate::state::AppState;

/// Send effect signature, injected so tests can fail the handoff without
/// launching a real mail client.
type SendFn = fn(&MailMessage) -> Result<(), SendError>;

/// Handles compose-form actions: edits, focus movement, attachments, and
/// the send handoff.
pub struct ComposeHandler {
    send: SendFn,
}

impl Default for ComposeHandler {
    fn default() -> Self {
        Self { send: send::send }
    }
}

impl ComposeHandler {
    /// Handler with a substitute send effect.
    #[cfg(test)]
    fn with_send(send: SendFn) -> Self {
        Self { send }
    }
}

impl MessageHandler<ComposeMessage> for ComposeHandler {
    fn handle(&self, state: &mut AppState, msg: ComposeMessage) -> Task<Message> {
        match msg {
            // Typing in a field implies it holds focus; marking it focused
            // blurs the others so their deferred errors surface.
            ComposeMessage::ToChanged(value) => {
                state.compose.focus_field(FormField::To);
                state.compose.to.set_value(value);
                Task::none()
            }

            ComposeMessage::SubjectChanged(value) => {
                state.compose.focus_field(FormField::Subject);
                state.compose.subject.set_value(value);
                Task::none()
            }

            ComposeMessage::FieldSubmitted(field) => {
                state.compose.field_mut(field).set_focused(false);
                match field.next() {
                    Some(next) => {
                        state.compose.focus_field(next);
                        iced::widget::operation::focus_next()
                    }
                    None => Task::none(),
                }
            }

            ComposeMessage::InputMethodChanged(visible) => {
                state.compose.set_input_method_visible(visible);
                Task::none()
            }

            ComposeMessage::AttachClicked => {
                if !state.compose.begin_pick() {
                    tracing::debug!("Attachment pick already in flight");
                    return Task::none();
                }
                Task::perform(picker::pick_attachment(), Message::AttachmentPicked)
            }

            ComposeMessage::RemoveAttachment(index) => {
                match state.compose.attachments.remove_at(index) {
                    Ok(removed) => {
                        tracing::info!("Removed attachment {}", removed.display_name());
                    }
                    Err(err) => {
                        // Desynchronized list/UI is a defect; log it and
                        // leave the list untouched.
                        tracing::error!("Attachment removal failed: {err}");
                    }
                }
                Task::none()
            }

            ComposeMessage::SendClicked => {
                let Some(message) = state.compose.submit() else {
                    // The send button is disabled while the form is
                    // invalid; reaching this is the defensive double-check.
                    tracing::debug!("Send clicked while form is not submittable");
                    return Task::none();
                };

                match (self.send)(&message) {
                    Ok(()) => {
                        tracing::info!(
                            recipients = message.recipients.len(),
                            attachments = message.attachments.len(),
                            "Handed message to mail client"
                        );
                    }
                    Err(err) => {
                        // Form state is preserved so the user can retry.
                        let err = GuiError::from(err);
                        tracing::warn!("Send handoff failed: {err}");
                        if err.is_transient() {
                            state.toast = Some(ToastState::error(
                                "No email application available on this system",
                            ));
                        }
                    }
                }
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::COMPOSE_ROUTE;

    fn compose_state() -> AppState {
        let mut state = AppState::new();
        state.nav.push(COMPOSE_ROUTE);
        state
    }

    #[test]
    fn test_edits_track_focus_and_value() {
        let mut state = compose_state();
        let _ = ComposeHandler::default().handle(
            &mut state,
            ComposeMessage::ToChanged("a@b.com".to_owned()),
        );
        assert_eq!(state.compose.to.value(), "a@b.com");
        assert_eq!(state.compose.focused_field(), Some(FormField::To));
    }

    #[test]
    fn test_field_submit_advances_focus_and_surfaces_error() {
        let mut state = compose_state();
        let _ = ComposeHandler::default().handle(&mut state, ComposeMessage::ToChanged("bad".to_owned()));
        let _ = ComposeHandler::default().handle(
            &mut state,
            ComposeMessage::FieldSubmitted(FormField::To),
        );

        assert_eq!(state.compose.focused_field(), Some(FormField::Subject));
        assert!(state.compose.to.error_visible());
    }

    #[test]
    fn test_send_clicked_is_a_noop_while_invalid() {
        let mut state = compose_state();
        let before = state.compose.clone();
        let _ = ComposeHandler::default().handle(&mut state, ComposeMessage::SendClicked);

        // No toast, no state change: the affordance is disabled in the view
        // and the handler only double-checks.
        assert!(state.toast.is_none());
        assert_eq!(state.compose.to.value(), before.to.value());
    }

    #[test]
    fn test_remove_attachment_out_of_range_keeps_list() {
        let mut state = compose_state();
        state
            .compose
            .attachments
            .add(outbox_core::AttachmentRef::new("/tmp/a.txt"));
        let _ = ComposeHandler::default().handle(&mut state, ComposeMessage::RemoveAttachment(5));
        assert_eq!(state.compose.attachments.len(), 1);
    }

    #[test]
    fn test_send_failure_surfaces_toast_and_preserves_form() {
        fn no_handler(_message: &MailMessage) -> Result<(), SendError> {
            Err(SendError::no_handler("xdg-open not found"))
        }

        let mut state = compose_state();
        let _ = ComposeHandler::default()
            .handle(&mut state, ComposeMessage::ToChanged("a@b.com".to_owned()));
        let _ = ComposeHandler::default()
            .handle(&mut state, ComposeMessage::SubjectChanged("Hello".to_owned()));

        let _ = ComposeHandler::with_send(no_handler).handle(&mut state, ComposeMessage::SendClicked);

        let toast = state.toast.as_ref().expect("send failure raises a toast");
        assert_eq!(toast.toast_type, crate::component::toast::ToastType::Error);
        // The form is untouched so the user can retry.
        assert_eq!(state.compose.to.value(), "a@b.com");
        assert_eq!(state.compose.subject.value(), "Hello");
        assert!(state.compose.can_submit());
    }

    #[test]
    fn test_send_success_raises_no_toast() {
        fn accept(_message: &MailMessage) -> Result<(), SendError> {
            Ok(())
        }

        let mut state = compose_state();
        let _ = ComposeHandler::default()
            .handle(&mut state, ComposeMessage::ToChanged("a@b.com".to_owned()));
        let _ = ComposeHandler::with_send(accept).handle(&mut state, ComposeMessage::SendClicked);

        assert!(state.toast.is_none());
    }

    #[test]
    fn test_input_method_hides_send_affordance() {
        let mut state = compose_state();
        let _ = ComposeHandler::default().handle(&mut state, ComposeMessage::InputMethodChanged(true));
        assert!(!state.compose.show_send_affordance());
        let _ = ComposeHandler::default().handle(&mut state, ComposeMessage::InputMethodChanged(false));
        assert!(state.compose.show_send_affordance());
    }
}
