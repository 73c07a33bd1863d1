use thiserror::Error;

/// Errors from the persistent message store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Errors from the chat-platform transport (reply delivery, menu linking).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Rejected by platform: status {0}")]
    Status(u16),
}
