//! Home screen.
//!
//! The landing screen: a short greeting and the single entry point into
//! the compose flow.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::{HomeMessage, Message};
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, TEXT_MUTED, TEXT_PRIMARY, WHITE, button_primary};

/// Renders the home screen.
pub fn view_home(_state: &AppState) -> Element<'static, Message> {
    let compose_btn = button(
        iced::widget::row![
            lucide::pencil().size(14).color(WHITE),
            Space::new().width(SPACING_SM),
            text("Compose Email").size(14),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Home(HomeMessage::ComposeClicked))
    .padding([10.0, 20.0])
    .style(button_primary);

    let content = column![
        text("Outbox").size(28).color(TEXT_PRIMARY),
        Space::new().height(SPACING_SM),
        text("Write an email and hand it to your mail client.")
            .size(14)
            .color(TEXT_MUTED),
        Space::new().height(SPACING_MD * 2.0),
        compose_btn,
    ]
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
