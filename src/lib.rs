//! Objekt catalog lookup bot
//!
//! Looks up trading-card ("objekt") metadata from a remote catalog API
//! given a member name and a short card code, and renders the result
//! as a chat message. One grammar module backs both the slash-command
//! and the batch-message entry points.
//!
//! ## Quick start
//!
//! ```rust
//! use objekt_bot::registry::Registry;
//!
//! let registry = Registry::current();
//! let code = registry.parse_code("b207").unwrap();
//! assert_eq!(code.season().id, "binary01");
//! assert_eq!(code.collection(), "207z");
//! ```

// Core error handling
pub mod error;

// Vocabulary and grammar
pub mod batch;
pub mod parser;
pub mod registry;

// Catalog API integration
pub mod catalog;
pub mod lookup;

// Chat side
pub mod bot;
pub mod config;
pub mod render;
