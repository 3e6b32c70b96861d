//! Chat message type and POST form decoding

use chrono::{DateTime, Local};

/// A single chat message with its server-side arrival time.
///
/// Immutable once created; the store owns every instance from creation
/// until process exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Arrival timestamp, stamped with the server clock when the message
    /// is accepted (never client-supplied)
    pub timestamp: DateTime<Local>,
    /// Sender name, decoded from the POST form
    pub username: String,
    /// Message text, decoded from the POST form
    pub text: String,
}

impl ChatMessage {
    /// Create a message stamped with the current local time
    #[must_use]
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            username: username.into(),
            text: text.into(),
        }
    }
}

/// Decode an `application/x-www-form-urlencoded` chat submission.
///
/// The body carries exactly two positional fields, `username=...&message=...`.
/// Each value is the second `=`-separated token of its segment with every `+`
/// replaced by a space; no percent decoding is performed. Returns `None` when
/// either field is missing or decodes to an empty string.
pub fn decode_form_body(body: &str) -> Option<(String, String)> {
    let mut fields = body.split('&');
    let username = decode_field(fields.next()?)?;
    let text = decode_field(fields.next()?)?;
    Some((username, text))
}

fn decode_field(segment: &str) -> Option<String> {
    let value = segment.split('=').nth(1)?;
    let decoded = value.replace('+', " ");
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}
