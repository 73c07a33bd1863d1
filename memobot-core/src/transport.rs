//! Chat-platform transport contracts: reply delivery and rich-menu linking.
//! Implementations map to a concrete platform (memobot-line for LINE).

use crate::error::TransportError;
use async_trait::async_trait;

/// Sends a single text reply for an inbound event's reply token.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply(&self, reply_token: &str, text: &str)
        -> std::result::Result<(), TransportError>;
}

/// Links the platform's UI menu to a user. Linking an already-linked user is
/// an idempotent no-op on the platform side.
#[async_trait]
pub trait MenuLinker: Send + Sync {
    async fn link_menu(
        &self,
        user_id: &str,
        menu_id: &str,
    ) -> std::result::Result<(), TransportError>;
}
