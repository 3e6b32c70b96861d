//! Minimal hand-rolled HTTP support: request reading and response assembly.
//!
//! This is deliberately not a general HTTP implementation. The reader
//! consumes exactly the shape of request the service supports (a request
//! line, raw header lines, an optional `Content-Length`-delimited body) and
//! the response side emits exactly one kind of response.

pub mod request;
pub mod response;

pub use request::{read_request, Request};
pub use response::{build_response, render_page};
