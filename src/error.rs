//! Error handling for the objekt lookup bot
//!
//! Idiomatic Rust error types using thiserror. Grammar and vocabulary
//! failures are resolved locally (per token or per line); catalog
//! failures are surfaced per lookup and never abort sibling lookups.

use thiserror::Error;

/// Main error type for the bot
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("Unknown member name '{name}'")]
    UnknownMember { name: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Card-code grammar errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("'{token}' is not a valid card code")]
    InvalidCode { token: String },

    /// The grammar is compiled from the registry, so a matched prefix
    /// must resolve. This variant marks the invariant violation; it is
    /// never mapped to a fallback season.
    #[error("season prefix '{prefix}' matched the grammar but is not in the registry")]
    UnresolvedPrefix { prefix: String },
}

/// Catalog API errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(
        "catalog returned metadata {metadata_status} / by-slug {by_slug_status} for '{slug}'"
    )]
    Upstream {
        slug: String,
        metadata_status: u16,
        by_slug_status: u16,
    },

    #[error("malformed catalog response for '{slug}': {message}")]
    MalformedResponse { slug: String, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type aliases for convenience
pub type BotResult<T> = Result<T, BotError>;
pub type GrammarResult<T> = Result<T, GrammarError>;
pub type CatalogResult<T> = Result<T, CatalogError>;
