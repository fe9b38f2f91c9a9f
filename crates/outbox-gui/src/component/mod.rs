//! Reusable UI components.

pub mod attachment_row;
pub mod text_field;
pub mod title_bar;
pub mod toast;

pub use attachment_row::attachment_row;
pub use text_field::TextField;
pub use title_bar::TitleBar;
pub use toast::{ToastMessage, ToastState, ToastType, view_toast};
