//! Batch text parser
//!
//! Splits free-form multi-line chat text into (member, card codes)
//! entries. Lines are independent: member names and card codes are
//! validated per line, and errors are collected rather than aborting
//! the batch.

use crate::parser::CardCode;
use crate::registry::{Member, Registry};

/// One member's accumulated codes, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub member: Member,
    pub codes: Vec<CardCode>,
}

/// Result of parsing a whole batch message.
///
/// Entries are ordered by first-seen member name; an entry with an
/// empty code list means the member was recognized but nothing is left
/// to look up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchParse {
    pub entries: Vec<BatchEntry>,
    pub errors: Vec<String>,
}

impl BatchParse {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse `member code code ...` lines.
///
/// Tokens split on whitespace and commas (commas are separators, never
/// part of a token). The first token on each line is the member name,
/// matched case-insensitively; the rest are card-code candidates. A
/// member recurring on a later line accumulates into its first entry.
pub fn parse_batch(registry: &Registry, text: &str) -> BatchParse {
    let mut parse = BatchParse::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());

        let Some(name) = tokens.next() else {
            // Separator-only line, nothing to report.
            continue;
        };

        let Some(member) = registry.find_member(name) else {
            parse.errors.push(format!("{line} name invalid"));
            continue;
        };

        let entry_idx = parse
            .entries
            .iter()
            .position(|e| e.member == member)
            .unwrap_or_else(|| {
                parse.entries.push(BatchEntry {
                    member,
                    codes: Vec::new(),
                });
                parse.entries.len() - 1
            });

        for token in tokens {
            match registry.parse_code(&token.to_lowercase()) {
                Ok(code) => parse.entries[entry_idx].codes.push(code),
                Err(_) => parse.errors.push(format!("{token} invalid card number")),
            }
        }
    }

    parse
}
