//! `mailto:` URL encoding.
//!
//! The send effect hands a composed message to whatever mail client the
//! platform associates with the `mailto:` scheme. File contents cannot ride
//! a `mailto:` URL, so picked attachment paths are appended to the body as
//! an `Attached:` trailer instead of being dropped silently.

use crate::message::MailMessage;

/// Encodes `message` as a `mailto:` URL.
///
/// Recipients are comma-joined in the path part; subject and body become
/// percent-encoded query parameters and are omitted when empty.
pub fn mailto_url(message: &MailMessage) -> String {
    let mut url = format!("mailto:{}", message.recipients.join(","));

    let mut params: Vec<(&str, String)> = Vec::new();
    if !message.subject.is_empty() {
        params.push(("subject", message.subject.clone()));
    }

    let body = body_with_attachments(message);
    if !body.is_empty() {
        params.push(("body", body));
    }

    for (i, (key, value)) in params.iter().enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        url.push(sep);
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    url
}

fn body_with_attachments(message: &MailMessage) -> String {
    if message.attachments.is_empty() {
        return message.body.clone();
    }

    let mut body = message.body.clone();
    if !body.is_empty() {
        body.push_str("\n\n");
    }
    body.push_str("Attached:");
    for att in &message.attachments {
        body.push('\n');
        body.push_str(&att.path().display().to_string());
    }
    body
}
