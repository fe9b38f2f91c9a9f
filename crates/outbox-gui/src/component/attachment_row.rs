//! Attachment row component.
//!
//! One chip per attached file: a file icon, the display name, and a remove
//! button. Removal is positional, so the row carries its index.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use outbox_core::AttachmentRef;

use crate::message::{ComposeMessage, Message};
use crate::theme::{
    SPACING_SM, SPACING_XS, TEXT_MUTED, TEXT_PRIMARY, attachment_container, button_ghost,
};

/// Renders a single attachment chip with a remove button.
pub fn attachment_row(index: usize, attachment: &AttachmentRef) -> Element<'static, Message> {
    let remove_btn = button(lucide::x().size(12))
        .on_press(Message::Compose(ComposeMessage::RemoveAttachment(index)))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        lucide::file().size(14).color(TEXT_MUTED),
        Space::new().width(SPACING_SM),
        text(attachment.display_name()).size(13).color(TEXT_PRIMARY),
        Space::new().width(Length::Fill),
        remove_btn,
    ]
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding([SPACING_XS, SPACING_SM])
        .style(attachment_container)
        .into()
}
