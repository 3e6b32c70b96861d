//! Static HTML template provider
//!
//! The handler treats the template as an opaque string; this module owns
//! where that string comes from.

use crate::error::{ChatError, Result};
use std::path::Path;
use tracing::debug;

/// Embedded fallback shell used when no template file is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/index.html");

/// Load the HTML shell from a template file.
///
/// # Errors
///
/// Returns `ChatError::Template` when the file cannot be read.
pub fn load_template(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let template = std::fs::read_to_string(path).map_err(|e| {
        ChatError::Template(format!("Failed to read template {path:?}: {e}"))
    })?;
    debug!("Template loaded from {:?} ({} bytes)", path, template.len());
    Ok(template)
}
