//! Title bar component.
//!
//! The bar across the top of every screen: an optional back button (only
//! when there is somewhere to go back to) and the current screen title.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{
    SPACING_MD, SPACING_SM, TEXT_PRIMARY, button_secondary, title_bar_container,
};

/// Title bar with optional back button.
pub struct TitleBar<M> {
    title: String,
    on_back: Option<M>,
}

impl<M: Clone + 'static> TitleBar<M> {
    /// Create a new title bar with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            on_back: None,
        }
    }

    /// Add a back button.
    pub fn back(mut self, message: M) -> Self {
        self.on_back = Some(message);
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'static, M> {
        let mut header_row = row![].spacing(SPACING_SM).align_y(Alignment::Center);

        if let Some(on_back) = self.on_back {
            let back_btn = button(
                row![lucide::chevron_left().size(14), text("Back").size(14),]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(on_back)
            .padding([6.0, 12.0])
            .style(button_secondary);

            header_row = header_row.push(back_btn);
            header_row = header_row.push(Space::new().width(SPACING_SM));
        }

        header_row = header_row.push(text(self.title).size(18).color(TEXT_PRIMARY));
        header_row = header_row.push(Space::new().width(Length::Fill));

        container(header_row)
            .width(Length::Fill)
            .padding([SPACING_SM, SPACING_MD])
            .style(title_bar_container)
            .into()
    }
}
