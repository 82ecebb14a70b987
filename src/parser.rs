//! Card code parser
//!
//! Validates a single user-typed token (e.g. `b207`, `c315a`) against
//! the registry grammar and splits it into season, 3-digit collection
//! number, and variant. A bare number without a trailing letter means
//! the digital copy, so every parsed code carries an explicit variant.

use crate::error::GrammarError;
use crate::registry::{Registry, Season};

/// Physical (`a`) or digital (`z`) copy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Physical,
    Digital,
}

impl Variant {
    pub fn letter(self) -> char {
        match self {
            Variant::Physical => 'a',
            Variant::Digital => 'z',
        }
    }

    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "a" => Some(Variant::Physical),
            "z" => Some(Variant::Digital),
            _ => None,
        }
    }
}

/// A validated card code, normalized to an explicit variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCode {
    season: Season,
    number: String,
    variant: Variant,
}

impl CardCode {
    pub fn season(&self) -> Season {
        self.season
    }

    /// Exactly 3 ASCII digits.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Collection part of the catalog slug, e.g. `"315z"`.
    pub fn collection(&self) -> String {
        format!("{}{}", self.number, self.variant.letter())
    }

    /// Re-serialize to the user-typed form, e.g. `"c315z"`.
    pub fn to_code_string(&self) -> String {
        format!("{}{}{}", self.season.prefix, self.number, self.variant.letter())
    }
}

impl Registry {
    /// Parse a raw card-code token.
    ///
    /// The caller lowercases `raw` before this call; case handling is
    /// not re-validated here. An absent variant letter defaults to
    /// digital, decided on the 3-digit remainder after the season
    /// prefix is stripped.
    pub fn parse_code(&self, raw: &str) -> Result<CardCode, GrammarError> {
        let caps = self
            .grammar()
            .captures(raw)
            .ok_or_else(|| GrammarError::InvalidCode {
                token: raw.to_string(),
            })?;

        let prefix = &caps[1];
        let season = self
            .resolve_season_prefix(prefix)
            .copied()
            .ok_or_else(|| GrammarError::UnresolvedPrefix {
                prefix: prefix.to_string(),
            })?;

        let variant = caps
            .get(3)
            .and_then(|m| Variant::from_letter(m.as_str()))
            .unwrap_or(Variant::Digital);

        Ok(CardCode {
            season,
            number: caps[2].to_string(),
            variant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_defaults_to_digital_variant() {
        let registry = Registry::current();
        let code = registry.parse_code("b207").unwrap();
        assert_eq!(code.season().id, "binary01");
        assert_eq!(code.number(), "207");
        assert_eq!(code.variant(), Variant::Digital);
        assert_eq!(code.collection(), "207z");
    }

    #[test]
    fn test_parse_explicit_physical_variant() {
        let registry = Registry::current();
        let code = registry.parse_code("b207a").unwrap();
        assert_eq!(code.variant(), Variant::Physical);
        assert_eq!(code.collection(), "207a");
    }

    #[test]
    fn test_parse_two_char_prefix() {
        let registry = Registry::current();
        let code = registry.parse_code("aa201").unwrap();
        assert_eq!(code.season().id, "atom02");
        assert_eq!(code.collection(), "201z");
        assert_eq!(code.to_code_string(), "aa201z");
    }

    #[test]
    fn test_parse_rejects_four_digit_number() {
        let registry = Registry::current();
        let err = registry.parse_code("b2070").unwrap_err();
        assert_eq!(
            err,
            GrammarError::InvalidCode {
                token: "b2070".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        let registry = Registry::current();
        assert!(matches!(
            registry.parse_code("z207"),
            Err(GrammarError::InvalidCode { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_short_number_and_bad_variant() {
        let registry = Registry::current();
        assert!(registry.parse_code("b20").is_err());
        assert!(registry.parse_code("b207b").is_err());
        assert!(registry.parse_code("207z").is_err());
        assert!(registry.parse_code("").is_err());
    }

    proptest! {
        /// Round-trip law: serializing a parsed code back to
        /// `{prefix}{number}{variant}` and re-parsing yields an
        /// identical structure.
        #[test]
        fn prop_code_string_round_trips(
            season_idx in 0usize..6,
            number in 0u32..1000,
            explicit_variant in proptest::option::of(prop_oneof!(Just('a'), Just('z'))),
        ) {
            let registry = Registry::current();
            let season = registry.seasons()[season_idx];
            let mut raw = format!("{}{:03}", season.prefix, number);
            if let Some(letter) = explicit_variant {
                raw.push(letter);
            }

            let code = registry.parse_code(&raw).unwrap();
            let reparsed = registry.parse_code(&code.to_code_string()).unwrap();
            prop_assert_eq!(code, reparsed);
        }
    }
}
