//! Command and message handlers
//!
//! Two entry points share one grammar module: the single slash-command
//! mode and the multi-line batch mode. In command mode a grammar error
//! aborts the whole command with an error reply; in batch mode errors
//! are line-scoped and collected into a consolidated summary.

use anyhow::Result;

use super::{AppContext, Responder};
use crate::batch::parse_batch;
use crate::lookup::{lookup_batch, LookupKey};
use crate::render::{render_error_summary, render_result, Reply};

/// Handle the `objekt` command: a member picked from autocomplete and
/// a free-text list of card codes separated by spaces or commas.
///
/// The returned error covers platform transport only; every domain
/// failure becomes a user-visible reply.
pub async fn handle_card_command(
    ctx: &AppContext,
    responder: &dyn Responder,
    member_name: &str,
    cards: &str,
) -> Result<()> {
    let Some(member) = ctx.registry.find_member(member_name) else {
        responder
            .send(Reply::Text(format!("{member_name} name invalid")))
            .await?;
        return Ok(());
    };

    let cards = cards.to_lowercase();
    let tokens: Vec<&str> = cards
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        responder
            .send(Reply::Text("No card numbers given".to_string()))
            .await?;
        return Ok(());
    }

    let mut keys = Vec::with_capacity(tokens.len());
    for token in tokens {
        match ctx.registry.parse_code(token) {
            Ok(code) => keys.push(LookupKey::new(member, &code)),
            Err(err) => {
                // Command mode aborts on the first bad code.
                responder.send(Reply::Text(err.to_string())).await?;
                return Ok(());
            }
        }
    }

    for (key, result) in lookup_batch(ctx.catalog.as_ref(), keys).await {
        responder.send(render_result(&key, &result)).await?;
    }
    Ok(())
}

/// Handle a multi-line `member code code ...` message (modal or
/// mention-triggered). Sends one reply per resolved code in input
/// order, then a consolidated error summary, then deletes the
/// transient processing message.
pub async fn handle_batch_message(
    ctx: &AppContext,
    responder: &dyn Responder,
    text: &str,
) -> Result<()> {
    let status = responder
        .send(Reply::Text("Processing...".to_string()))
        .await
        .ok();

    let parsed = parse_batch(&ctx.registry, text);
    tracing::debug!(
        entries = parsed.entries.len(),
        errors = parsed.errors.len(),
        "parsed batch message"
    );

    for entry in &parsed.entries {
        let keys: Vec<LookupKey> = entry
            .codes
            .iter()
            .map(|code| LookupKey::new(entry.member, code))
            .collect();
        // An empty key list means the member was recognized with
        // nothing to look up; that is not an error.
        for (key, result) in lookup_batch(ctx.catalog.as_ref(), keys).await {
            responder.send(render_result(&key, &result)).await?;
        }
    }

    if let Some(summary) = render_error_summary(&parsed.errors) {
        responder.send(summary).await?;
    }

    if let Some(id) = status {
        if let Err(err) = responder.delete(id).await {
            tracing::warn!(error = %err, "failed to delete processing message");
        }
    }
    Ok(())
}
