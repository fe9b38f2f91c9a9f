//! Send effect: hand the composed message to the platform mail client.

use outbox_core::{mailto_url, MailMessage, SendError};

/// Launches the default `mailto:` handler with the composed message.
///
/// The handler (or the OS chooser, when several clients are registered) is
/// entirely the platform's business. The only observable failure is the
/// launch itself - the "no capable handler" case. No retry.
pub fn send(message: &MailMessage) -> Result<(), SendError> {
    if message.recipients.is_empty() {
        return Err(SendError::NoRecipients);
    }

    let url = mailto_url(message);
    tracing::debug!(recipients = message.recipients.len(), "Opening mailto URL");
    open::that_detached(&url).map_err(SendError::no_handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_rejects_empty_recipient_list() {
        let message = MailMessage::from_form("", "Subject", "Body", Vec::new());
        assert_eq!(send(&message).unwrap_err(), SendError::NoRecipients);
    }
}
