//! Request handling: store mutation on POST, page rendering for everything

use crate::http::request::Request;
use crate::http::response::{build_response, render_page};
use crate::message::decode_form_body;
use crate::store::MessageStore;
use tracing::{debug, warn};

/// Path browsers probe for a site icon; answered with silence
const FAVICON_PATH: &str = "/favicon.ico";

/// Interprets parsed requests against the shared store and produces
/// response bytes.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    store: MessageStore,
    template: String,
}

impl RequestHandler {
    /// Create a handler over the shared store and an opaque template string
    #[must_use]
    pub fn new(store: MessageStore, template: String) -> Self {
        Self { store, template }
    }

    /// Produce the response bytes for one request.
    ///
    /// Returns `None` for `/favicon.ico` probes regardless of method: the
    /// connection is closed without writing any bytes. Every other request
    /// receives the rendered page; a POST with a decodable body appends to
    /// the store first. A POST whose fields decode empty adds nothing and
    /// still renders the page.
    pub async fn respond(&self, request: &Request) -> Option<Vec<u8>> {
        if request.path == FAVICON_PATH {
            debug!("Favicon probe ignored");
            return None;
        }

        if request.method == "POST" {
            if let Some(body) = request.body.as_deref() {
                match decode_form_body(body) {
                    Some((username, text)) => {
                        if let Err(e) = self.store.append(&username, &text).await {
                            warn!("Message rejected ({}): {}", e.code(), e);
                        }
                    }
                    None => debug!("POST body with empty or missing fields, nothing added"),
                }
            }
        }

        let messages = self.store.snapshot_sorted_by_time().await;
        let html = render_page(&self.template, &messages);
        Some(build_response(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, path: &str, body: Option<&str>) -> Request {
        Request {
            method: method.to_string(),
            path: path.to_string(),
            headers: vec![],
            body: body.map(str::to_string),
        }
    }

    async fn seeded_handler() -> (RequestHandler, MessageStore) {
        let store = MessageStore::new();
        store.append("Ignacio", "Hola").await.unwrap();
        let handler = RequestHandler::new(store.clone(), "<html></html>".to_string());
        (handler, store)
    }

    #[tokio::test]
    async fn test_favicon_gets_no_response_bytes() {
        let (handler, store) = seeded_handler().await;
        assert!(handler.respond(&request("GET", "/favicon.ico", None)).await.is_none());
        // A POST to the favicon path is ignored the same way
        assert!(handler
            .respond(&request("POST", "/favicon.ico", Some("username=a&message=b")))
            .await
            .is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_renders_stored_messages() {
        let (handler, _store) = seeded_handler().await;
        let response = handler.respond(&request("GET", "/", None)).await.unwrap();
        let response = String::from_utf8(response).unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Ignacio: Hola"));
    }

    #[tokio::test]
    async fn test_any_non_favicon_path_renders_the_page() {
        let (handler, _store) = seeded_handler().await;
        let response = handler
            .respond(&request("GET", "/some/other/path", None))
            .await
            .unwrap();
        assert!(String::from_utf8(response).unwrap().contains("Ignacio: Hola"));
    }

    #[tokio::test]
    async fn test_post_appends_then_renders() {
        let (handler, store) = seeded_handler().await;
        let response = handler
            .respond(&request(
                "POST",
                "/",
                Some("username=Diego+Urrutia&message=Hola+Mundo"),
            ))
            .await
            .unwrap();

        assert_eq!(store.len().await, 2);
        let response = String::from_utf8(response).unwrap();
        assert!(response.contains("Diego Urrutia: Hola Mundo"));
    }

    #[tokio::test]
    async fn test_post_with_empty_field_is_silently_skipped() {
        let (handler, store) = seeded_handler().await;
        let response = handler
            .respond(&request("POST", "/", Some("username=&message=Hola")))
            .await;

        assert!(response.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_post_without_body_mutates_nothing() {
        let (handler, store) = seeded_handler().await;
        let response = handler.respond(&request("POST", "/", None)).await;

        assert!(response.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_with_body_mutates_nothing() {
        let (handler, store) = seeded_handler().await;
        handler
            .respond(&request("GET", "/", Some("username=a&message=b")))
            .await
            .unwrap();
        assert_eq!(store.len().await, 1);
    }
}
