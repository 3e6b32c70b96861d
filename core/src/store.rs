//! Shared in-memory message store

use crate::error::{ChatError, Result};
use crate::message::ChatMessage;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Process-wide store of chat messages, shared by every connection worker.
///
/// Messages are held in append order behind a mutex. Readers get sorted
/// snapshots; the live backing sequence is never exposed, so a concurrent
/// append cannot corrupt an in-flight snapshot and no reader can observe a
/// partially constructed element.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
}

impl MessageStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current server time.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Validation` when either field is empty; the store
    /// is left unchanged.
    pub async fn append(&self, username: &str, text: &str) -> Result<ChatMessage> {
        if username.is_empty() {
            return Err(ChatError::Validation(
                "username cannot be empty".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(ChatError::Validation(
                "message text cannot be empty".to_string(),
            ));
        }

        let message = ChatMessage::new(username, text);
        let mut messages = self.messages.lock().await;
        messages.push(message.clone());
        debug!("New message added ({} total)", messages.len());
        Ok(message)
    }

    /// Copy of all current messages ordered ascending by timestamp.
    ///
    /// Ties keep insertion order (stable sort). The copy is taken under the
    /// lock; sorting happens on the snapshot, not the backing sequence.
    pub async fn snapshot_sorted_by_time(&self) -> Vec<ChatMessage> {
        let mut snapshot = self.messages.lock().await.clone();
        snapshot.sort_by_key(|m| m.timestamp);
        snapshot
    }

    /// Number of messages currently held
    pub async fn len(&self) -> usize {
        self.messages.lock().await.len()
    }

    /// Whether the store holds no messages
    pub async fn is_empty(&self) -> bool {
        self.messages.lock().await.is_empty()
    }
}
