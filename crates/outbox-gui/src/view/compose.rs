//! Compose screen.
//!
//! The email form: recipient, subject, a multiline body filling the
//! remaining area, attachment chips, and the attach/send row. The send row
//! disappears entirely while the host reports an on-screen keyboard, and
//! the Send button is disabled until the recipient field validates.

use iced::widget::{Space, button, column, container, text, text_editor};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::component::{TextField, attachment_row};
use crate::message::{ComposeMessage, Message};
use crate::state::{AppState, FormField};
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, WHITE, button_primary, button_secondary,
};

/// Renders the compose screen.
///
/// The body editor buffer is owned by the shell and passed in alongside the
/// state it mirrors.
pub fn view_compose<'a>(
    state: &'a AppState,
    body_editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let compose = &state.compose;

    let to_field = TextField::new(compose.to.value(), "", |s| {
        Message::Compose(ComposeMessage::ToChanged(s))
    })
    .prefix("To")
    .on_submit(Message::Compose(ComposeMessage::FieldSubmitted(
        FormField::To,
    )))
    .error(
        compose
            .to
            .error_visible()
            .then_some("Invalid email address"),
    )
    .view();

    let subject_field = TextField::new(compose.subject.value(), "Subject", |s| {
        Message::Compose(ComposeMessage::SubjectChanged(s))
    })
    .on_submit(Message::Compose(ComposeMessage::FieldSubmitted(
        FormField::Subject,
    )))
    .view();

    let body_field = text_editor(body_editor)
        .placeholder("Compose email")
        .on_action(Message::ComposeBodyAction)
        .height(Length::Fill)
        .padding([10.0, 12.0])
        .size(14);

    let mut page = column![to_field, subject_field, body_field]
        .spacing(SPACING_SM)
        .padding(SPACING_MD)
        .height(Length::Fill);

    if !compose.attachments.is_empty() {
        let mut chips = column![].spacing(SPACING_XS);
        for (index, attachment) in compose.attachments.iter().enumerate() {
            chips = chips.push(attachment_row(index, attachment));
        }
        page = page.push(chips);
    }

    if compose.show_send_affordance() {
        page = page.push(send_row(state));
    }

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The attach and send actions. Send is disabled until the recipient list
/// validates.
fn send_row(state: &AppState) -> Element<'static, Message> {
    let compose = &state.compose;

    let attach_btn = button(
        iced::widget::row![
            lucide::paperclip().size(14),
            Space::new().width(SPACING_XS),
            text("Attach").size(14),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Compose(ComposeMessage::AttachClicked))
    .padding([8.0, 16.0])
    .style(button_secondary);

    let send_btn = button(
        iced::widget::row![
            lucide::send().size(14).color(WHITE),
            Space::new().width(SPACING_XS),
            text("Send").size(14),
        ]
        .align_y(Alignment::Center),
    )
    .on_press_maybe(
        compose
            .can_submit()
            .then_some(Message::Compose(ComposeMessage::SendClicked)),
    )
    .padding([8.0, 20.0])
    .style(button_primary);

    iced::widget::row![attach_btn, Space::new().width(Length::Fill), send_btn]
        .align_y(Alignment::Center)
        .into()
}
