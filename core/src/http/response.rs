//! Response assembly: template merge and minimal HTTP/1.1 framing

use crate::message::ChatMessage;
use chrono::{Timelike, Utc};

/// Value of the `Server` response header
const SERVER_NAME: &str = concat!("Tertulia v", env!("CARGO_PKG_VERSION"));

/// Merge the template shell with one rendered fragment per message.
///
/// Fragments carry the unpadded server-local hour, minute and second of
/// arrival, then the sender and text. Message content is inserted verbatim:
/// no HTML escaping is applied to stored user input.
pub fn render_page(template: &str, messages: &[ChatMessage]) -> String {
    let mut page = String::with_capacity(template.len() + messages.len() * 64);
    page.push_str(template);
    for message in messages {
        let ts = &message.timestamp;
        page.push_str(&format!(
            "<div>{}:{}:{}  {}: {}</div>",
            ts.hour(),
            ts.minute(),
            ts.second(),
            message.username,
            message.text
        ));
    }
    page
}

/// Assemble a complete minimal HTTP/1.1 response around the HTML body.
///
/// Always `200 OK` with `Server`, `Date` and `Content-Type` headers. No
/// `Content-Length` is set; closing the connection delimits the body.
pub fn build_response(html: &str) -> Vec<u8> {
    let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT");
    format!(
        "HTTP/1.1 200 OK\r\nServer: {SERVER_NAME}\r\nDate: {date}\r\nContent-Type: text/html; charset=UTF-8\r\n\r\n{html}\r\n"
    )
    .into_bytes()
}
