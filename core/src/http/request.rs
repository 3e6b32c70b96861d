//! Hand-rolled HTTP request reader
//!
//! Reads one request from a buffered stream: the request line, the raw
//! header lines, and an optional fixed-length body. No HTTP parser library
//! is involved; the line loop itself is the protocol support.

use crate::error::{ChatError, Result};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use tracing::debug;

/// Maximum accepted `Content-Length` for a request body (64KB)
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// A parsed HTTP request, one per connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method (`GET` and `POST` are the ones the service acts on)
    pub method: String,
    /// Request-target string
    pub path: String,
    /// Raw header lines in arrival order, line terminators stripped
    pub headers: Vec<String>,
    /// Request body, present only when a positive `Content-Length` was seen
    pub body: Option<String>,
}

/// Read one HTTP request from the stream.
///
/// Lines are consumed until the blank line that ends the headers. When a
/// `Content-Length` header declares a positive length, exactly that many
/// bytes are read verbatim as the body (the body may contain `&` and `=`
/// but carries no line structure of its own). No read deadline is enforced
/// here; a deadline, if any, is the caller's concern.
///
/// # Errors
///
/// - `ChatError::Io` when the stream ends before the blank line, or before
///   the declared body length is satisfied.
/// - `ChatError::MalformedRequest` when the request line has fewer than two
///   tokens, or a `Content-Length` value does not parse or exceeds
///   [`MAX_BODY_SIZE`].
pub async fn read_request<R>(reader: &mut R) -> Result<Request>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines: Vec<String> = Vec::new();
    let mut content_length: usize = 0;

    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            return Err(ChatError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stream ended before end of headers",
            )));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name == "Content-Length" {
                content_length = parse_content_length(value)?;
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        return Err(ChatError::MalformedRequest(
            "blank line before any request line".to_string(),
        ));
    }

    let mut tokens = lines[0].split_whitespace();
    let (method, path) = match (tokens.next(), tokens.next()) {
        (Some(method), Some(path)) => (method.to_string(), path.to_string()),
        _ => {
            return Err(ChatError::MalformedRequest(format!(
                "request line '{}' is missing method or path",
                lines[0]
            )));
        }
    };

    let headers = lines.split_off(1);

    let body = if content_length > 0 {
        let mut buf = vec![0u8; content_length];
        reader.read_exact(&mut buf).await?;
        Some(String::from_utf8_lossy(&buf).into_owned())
    } else {
        None
    };

    debug!(
        "Parsed {} {} ({} header lines, {} body bytes)",
        method,
        path,
        headers.len(),
        content_length
    );

    Ok(Request {
        method,
        path,
        headers,
        body,
    })
}

/// Parse a `Content-Length` header value, trimming surrounding whitespace.
fn parse_content_length(value: &str) -> Result<usize> {
    let length: usize = value.trim().parse().map_err(|_| {
        ChatError::MalformedRequest(format!(
            "invalid Content-Length value '{}'",
            value.trim()
        ))
    })?;
    if length > MAX_BODY_SIZE {
        return Err(ChatError::MalformedRequest(format!(
            "Content-Length {length} exceeds maximum of {MAX_BODY_SIZE} bytes"
        )));
    }
    Ok(length)
}
