use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Outbound side of the chat host.
///
/// Command replies are plain text; no parse mode is applied.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
