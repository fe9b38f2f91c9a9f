//! Outbox core library.
//!
//! UI-free domain logic for the Outbox compose application:
//!
//! - [`address`] - syntactic validation of comma-separated address lists
//! - [`message`] - the [`MailMessage`] handed to the send effect and the
//!   opaque [`AttachmentRef`] picked by the user
//! - [`mailto`] - encoding a message as a `mailto:` URL for the platform's
//!   default mail client
//! - [`error`] - the send-side error taxonomy

pub mod address;
pub mod error;
pub mod mailto;
pub mod message;

pub use address::{is_valid_address_list, split_addresses};
pub use error::SendError;
pub use mailto::mailto_url;
pub use message::{AttachmentRef, MailMessage};
