//! Core functionality for the Tertulia chat service
//!
//! This crate contains the message store, the hand-rolled HTTP request
//! reader, the request handler and page rendering, plus the configuration
//! and error types shared with the server binary.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod message;
pub mod store;
pub mod template;


pub use config::{load_config_from_toml_path, load_config_from_toml_str, ServerConfig};
pub use error::{ChatError, Result};
pub use handler::RequestHandler;
pub use http::request::{read_request, Request, MAX_BODY_SIZE};
pub use http::response::{build_response, render_page};
pub use message::{decode_form_body, ChatMessage};
pub use store::MessageStore;
pub use template::{load_template, DEFAULT_TEMPLATE};

/// Core utilities and helper functions
pub mod utils {
    use tracing::info;

    /// Initialize tracing for the application
    pub fn init_tracing(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| crate::ChatError::Configuration(e.to_string()))?;

        info!("Tracing initialized with level: {}", level);
        Ok(())
    }
}
