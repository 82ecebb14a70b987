//! Reply rendering
//!
//! Platform-neutral message shapes. The chat adapter decides how an
//! `Embed` maps onto its own message type; the front/back embeds of a
//! card share one URL so platforms that merge same-URL embeds show the
//! two images as a single message.

use crate::error::CatalogError;
use crate::lookup::{LookupKey, Objekt, ObjektResult};

/// Platforms merge embeds sharing this URL into one message.
const EMBED_PAIR_URL: &str = "https://www.google.com";

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

impl EmbedField {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    pub url: String,
    pub image: String,
    pub fields: Vec<EmbedField>,
}

/// One outbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Card(Vec<Embed>),
}

/// Paired front/back card for a found objekt.
///
/// Transfer stats are shown only when some copies are locked; a fully
/// transferable objekt omits them per the orchestrator's hint.
pub fn render_objekt(objekt: &Objekt) -> Reply {
    let mut fields = vec![
        EmbedField::new("Collection", objekt.collection_no.clone()),
        EmbedField::new("Copies", objekt.copies.to_string()),
        EmbedField::new("Description", objekt.description.clone()),
    ];
    if !objekt.fully_transferable {
        fields.push(EmbedField::new(
            "Transferable",
            objekt.transferable.to_string(),
        ));
        fields.push(EmbedField::new(
            "Percentage",
            format!("{:.2}%", objekt.percentage),
        ));
    }

    Reply::Card(vec![
        Embed {
            url: EMBED_PAIR_URL.to_string(),
            image: objekt.front_image.clone(),
            fields,
        },
        Embed {
            url: EMBED_PAIR_URL.to_string(),
            image: objekt.back_image.clone(),
            fields: Vec::new(),
        },
    ])
}

/// One reply per lookup outcome. Errors render as short text, keyed by
/// slug so a batch reader can tell which code failed.
pub fn render_result(key: &LookupKey, result: &ObjektResult) -> Reply {
    match result {
        ObjektResult::Found(objekt) => render_objekt(objekt),
        ObjektResult::NotFound => Reply::Text(format!("No objekt found for {}", key.slug())),
        ObjektResult::ApiError(err) => render_api_error(key, err),
    }
}

fn render_api_error(key: &LookupKey, err: &CatalogError) -> Reply {
    Reply::Text(format!("Lookup failed for {}: {}", key.slug(), err))
}

/// Consolidated summary of batch parse errors, one per line.
pub fn render_error_summary(errors: &[String]) -> Option<Reply> {
    if errors.is_empty() {
        None
    } else {
        Some(Reply::Text(errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objekt(fully_transferable: bool) -> Objekt {
        Objekt {
            collection_no: "207Z".to_string(),
            front_image: "front".to_string(),
            back_image: "back".to_string(),
            copies: 512,
            transferable: if fully_transferable { 512 } else { 300 },
            percentage: if fully_transferable { 100.0 } else { 58.59 },
            description: "test objekt".to_string(),
            fully_transferable,
        }
    }

    fn field_names(reply: &Reply) -> Vec<&str> {
        match reply {
            Reply::Card(embeds) => embeds[0].fields.iter().map(|f| f.name.as_str()).collect(),
            Reply::Text(_) => panic!("expected a card reply"),
        }
    }

    #[test]
    fn test_card_pairs_front_and_back_embeds() {
        let reply = render_objekt(&objekt(false));
        let Reply::Card(embeds) = &reply else {
            panic!("expected a card reply");
        };
        assert_eq!(embeds.len(), 2);
        assert_eq!(embeds[0].url, embeds[1].url);
        assert_eq!(embeds[0].image, "front");
        assert_eq!(embeds[1].image, "back");
        assert!(embeds[1].fields.is_empty());
    }

    #[test]
    fn test_transfer_stats_omitted_when_fully_transferable() {
        let reply = render_objekt(&objekt(false));
        let shown = field_names(&reply);
        assert!(shown.contains(&"Transferable"));
        assert!(shown.contains(&"Percentage"));

        let reply = render_objekt(&objekt(true));
        let omitted = field_names(&reply);
        assert_eq!(omitted, ["Collection", "Copies", "Description"]);
    }

    #[test]
    fn test_error_summary_is_none_when_clean() {
        assert!(render_error_summary(&[]).is_none());
        let summary = render_error_summary(&[
            "nobody b208 name invalid".to_string(),
            "x999 invalid card number".to_string(),
        ]);
        assert_eq!(
            summary,
            Some(Reply::Text(
                "nobody b208 name invalid\nx999 invalid card number".to_string()
            ))
        );
    }
}
