//! Chat-side handlers
//!
//! The chat platform itself (slash-command registration, mention
//! detection, modals) lives outside this crate; handlers talk to it
//! through the [`Responder`] trait. No failure path is allowed to
//! escape a handler without a user-visible reply.

pub mod context;
pub mod handlers;

use anyhow::Result;
use async_trait::async_trait;

use crate::render::Reply;

pub use context::AppContext;
pub use handlers::{handle_batch_message, handle_card_command};

/// Platform-assigned id of a sent message, used to delete transient
/// status messages.
pub type MessageId = u64;

/// Outbound side of the chat platform.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn send(&self, reply: Reply) -> Result<MessageId>;
    async fn delete(&self, id: MessageId) -> Result<()>;
}
