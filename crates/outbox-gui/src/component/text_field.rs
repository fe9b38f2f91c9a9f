//! Text field component with validation display.
//!
//! A single-line input with an optional leading label (the "To" prefix on
//! the recipient row) and an optional validation error line underneath.
//! Whether the error is shown is the caller's decision; this component only
//! renders it.

use iced::widget::{Space, column, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{SPACING_XS, STATUS_ERROR, TEXT_MUTED, text_input_style};

/// A text input with optional prefix label and error line.
///
/// # Example
/// ```ignore
/// TextField::new(state.to.value(), "", |s| Message::Compose(ComposeMessage::ToChanged(s)))
///     .prefix("To")
///     .on_submit(Message::Compose(ComposeMessage::FieldSubmitted(FormField::To)))
///     .error(state.to.error_visible().then_some("Invalid email address"))
///     .view()
/// ```
pub struct TextField<M> {
    prefix: Option<String>,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    on_submit: Option<M>,
    error: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    /// Create a new text field.
    pub fn new(
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            prefix: None,
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            on_submit: None,
            error: None,
        }
    }

    /// Set a leading label rendered inline before the input.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the message sent when the user presses Enter in the field.
    pub fn on_submit(mut self, message: M) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Set an error message to display under the input.
    pub fn error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'static, M> {
        let has_error = self.error.is_some();

        let value = self.value;
        let placeholder = self.placeholder;
        let on_change = self.on_change;

        let mut input = text_input(&placeholder, &value)
            .on_input(on_change)
            .padding([10.0, 12.0])
            .size(14)
            .width(Length::Fill)
            .style(text_input_style(has_error));

        if let Some(on_submit) = self.on_submit {
            input = input.on_submit(on_submit);
        }

        let input_row: Element<'static, M> = if let Some(prefix) = self.prefix {
            row![
                text(prefix).size(14).color(TEXT_MUTED),
                Space::new().width(SPACING_XS * 2.0),
                input,
            ]
            .align_y(Alignment::Center)
            .into()
        } else {
            input.into()
        };

        let error_el: Element<'static, M> = if let Some(err) = self.error {
            row![
                lucide::circle_alert().size(12).color(STATUS_ERROR),
                Space::new().width(4.0),
                text(err).size(11).color(STATUS_ERROR),
            ]
            .align_y(Alignment::Center)
            .into()
        } else {
            Space::new().height(0.0).into()
        };

        column![input_row, error_el].spacing(SPACING_XS).into()
    }
}
