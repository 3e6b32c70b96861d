//! Seed data loader: example messages installed before accepting traffic

use tertulia_core::{MessageStore, Result};
use tracing::debug;

/// The fixed example messages present when the server starts
const SEED_MESSAGES: [(&str, &str); 3] = [
    ("Ignacio", "Hola"),
    ("Pablo", "adios"),
    ("Javier", "Pez"),
];

/// Populate the store with the startup example messages.
///
/// # Errors
/// Propagates a validation failure from the store.
pub async fn load_seed_messages(store: &MessageStore) -> Result<()> {
    for (username, text) in SEED_MESSAGES {
        store.append(username, text).await?;
    }
    debug!("Seeded {} example messages", SEED_MESSAGES.len());
    Ok(())
}
