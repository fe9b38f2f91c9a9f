//! Toast notification component.
//!
//! Shows a temporary notification near the bottom of the window. Toasts
//! auto-dismiss after a timeout (driven by a subscription in `App`) or when
//! the user clicks the close button.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, STATUS_ERROR, STATUS_INFO, STATUS_SUCCESS, STATUS_WARNING,
    TEXT_PRIMARY, button_ghost, toast_container,
};

/// Toast notification state.
#[derive(Debug, Clone)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Toast type determines the icon and accent color.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastType {
    fn color(self) -> iced::Color {
        match self {
            ToastType::Success => STATUS_SUCCESS,
            ToastType::Info => STATUS_INFO,
            ToastType::Warning => STATUS_WARNING,
            ToastType::Error => STATUS_ERROR,
        }
    }
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
}

impl ToastState {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Error,
        }
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let icon_color = state.toast_type.color();

    let icon = match state.toast_type {
        ToastType::Success => lucide::circle_check().size(18).color(icon_color),
        ToastType::Info => lucide::info().size(18).color(icon_color),
        ToastType::Warning => lucide::triangle_alert().size(18).color(icon_color),
        ToastType::Error => lucide::circle_x().size(18).color(icon_color),
    };

    let message_text = text(&state.message).size(14).color(TEXT_PRIMARY);

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(toast_container)
        .into()
}
