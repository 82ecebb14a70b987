//! Console runner for the objekt lookup bot
//!
//! Stands in for the external chat adapter: lines read from stdin are
//! accumulated until a blank line, then handled as one batch-mode
//! message against the real catalog API.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=objekt_bot=debug cargo run --bin objekt_bot
//! jiwoo b207 c315a
//! chaeyeon aa201
//!
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use objekt_bot::bot::{handle_batch_message, AppContext, MessageId, Responder};
use objekt_bot::catalog::CatalogClient;
use objekt_bot::config::Config;
use objekt_bot::registry::Registry;
use objekt_bot::render::Reply;

/// Prints replies to stdout; "deleting" a message is a no-op beyond a
/// log line, since printed text cannot be unsent.
struct ConsoleResponder {
    next_id: AtomicU64,
}

impl ConsoleResponder {
    fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl Responder for ConsoleResponder {
    async fn send(&self, reply: Reply) -> Result<MessageId> {
        match reply {
            Reply::Text(text) => println!("{text}"),
            Reply::Card(embeds) => {
                for embed in embeds {
                    println!("[image] {}", embed.image);
                    for field in embed.fields {
                        println!("  {}: {}", field.name, field.value);
                    }
                }
            }
        }
        Ok(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    async fn delete(&self, id: MessageId) -> Result<()> {
        tracing::debug!(id, "would delete message");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::info!(base_url = %config.catalog_base_url, "starting console runner");

    let catalog = CatalogClient::new(&config.catalog_base_url, config.http_timeout)?;
    let ctx = AppContext::new(Registry::current(), Arc::new(catalog));
    let responder = ConsoleResponder::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut block = String::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            if !block.is_empty() {
                handle_batch_message(&ctx, &responder, &block).await?;
                block.clear();
            }
            continue;
        }
        block.push_str(&line);
        block.push('\n');
    }
    if !block.is_empty() {
        handle_batch_message(&ctx, &responder, &block).await?;
    }

    Ok(())
}
