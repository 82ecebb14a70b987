//! Vocabulary registry
//!
//! Closed sets of valid seasons and member names, plus the card-code
//! grammar compiled from them. The registry is versioned data, not
//! code: switching catalog eras means swapping the data set, and the
//! parsing algorithm stays the same.

use regex::Regex;

/// A release cycle of objekts, identified by a short prefix code.
///
/// Prefixes are 1 or 2 lowercase letters. One prefix may be a proper
/// prefix of another (`a` vs `aa`), so matching must try longer
/// candidates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    pub id: &'static str,
    pub prefix: &'static str,
}

/// A member from the closed roster, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    display: &'static str,
}

impl Member {
    /// Canonical display name as it appears in the roster.
    pub fn display(&self) -> &'static str {
        self.display
    }

    /// Lowercase form used in catalog slugs.
    pub fn slug(&self) -> String {
        self.display.to_lowercase()
    }
}

/// Current catalog era: six seasons, including the first 2-char prefix.
const CURRENT_SEASONS: &[Season] = &[
    Season { id: "atom01", prefix: "a" },
    Season { id: "binary01", prefix: "b" },
    Season { id: "cream01", prefix: "c" },
    Season { id: "divine01", prefix: "d" },
    Season { id: "ever01", prefix: "e" },
    Season { id: "atom02", prefix: "aa" },
];

const CURRENT_MEMBERS: &[&str] = &[
    "YooYeon", "Mayu", "Xinyu", "NaKyoung", "SoHyun",
    "DaHyun", "Nien", "SeoYeon", "JiYeon", "Kotone",
    "ChaeYeon", "YuBin", "JiWoo", "Kaede", "ShiOn",
    "Lynn", "Sullin", "HyeRin", "ChaeWon", "HaYeon",
    "SooMin", "YeonJi", "JooBin", "SeoAh", "JinSoul",
    "HaSeul", "KimLip", "HeeJin", "Choerry",
];

/// Legacy era: fixed single-letter prefixes, four seasons.
const LEGACY_SEASONS: &[Season] = &[
    Season { id: "atom01", prefix: "a" },
    Season { id: "binary01", prefix: "b" },
    Season { id: "cream01", prefix: "c" },
    Season { id: "divine01", prefix: "d" },
];

const LEGACY_MEMBERS: &[&str] = &[
    "YooYeon", "Mayu", "Xinyu", "NaKyoung", "SoHyun",
    "DaHyun", "Nien", "SeoYeon", "JiYeon", "Kotone",
    "ChaeYeon", "YuBin", "JiWoo", "Kaede", "ShiOn",
    "Lynn", "Sullin", "HyeRin", "ChaeWon", "HaYeon",
    "SooMin", "YeonJi", "JooBin", "SeoAh",
];

/// Immutable vocabulary shared by both lookup entry points.
///
/// Built once at startup and never mutated; the single compiled
/// grammar keeps the slash-command and batch paths from drifting.
pub struct Registry {
    seasons: &'static [Season],
    members: &'static [&'static str],
    grammar: Regex,
}

impl Registry {
    /// Registry for the current catalog era.
    pub fn current() -> Self {
        Self::from_data(CURRENT_SEASONS, CURRENT_MEMBERS)
    }

    /// Registry for the legacy single-letter-prefix era.
    pub fn legacy() -> Self {
        Self::from_data(LEGACY_SEASONS, LEGACY_MEMBERS)
    }

    fn from_data(seasons: &'static [Season], members: &'static [&'static str]) -> Self {
        let grammar = Self::compile_grammar(seasons);
        Self {
            seasons,
            members,
            grammar,
        }
    }

    /// Compile the card-code grammar from the season prefix table.
    fn compile_grammar(seasons: &[Season]) -> Regex {
        let mut prefixes: Vec<&str> = seasons.iter().map(|s| s.prefix).collect();
        // Longer alternatives first so 'aa' never reads as 'a' + 'a'.
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let pattern = format!(r"^({})(\d{{3}})([az])?$", prefixes.join("|"));
        Regex::new(&pattern).expect("season prefix table compiles to a valid regex")
    }

    /// Resolve a season prefix code to its season.
    pub fn resolve_season_prefix(&self, prefix: &str) -> Option<&Season> {
        self.seasons.iter().find(|s| s.prefix == prefix)
    }

    /// Case-insensitive roster lookup.
    pub fn find_member(&self, name: &str) -> Option<Member> {
        self.members
            .iter()
            .find(|m| m.eq_ignore_ascii_case(name))
            .map(|display| Member { display })
    }

    pub fn is_known_member(&self, name: &str) -> bool {
        self.find_member(name).is_some()
    }

    /// Roster display names, e.g. for command autocomplete choices.
    pub fn member_names(&self) -> &'static [&'static str] {
        self.members
    }

    pub fn seasons(&self) -> &'static [Season] {
        self.seasons
    }

    /// The compiled `^(prefix)(\d{3})([az])?$` grammar.
    pub(crate) fn grammar(&self) -> &Regex {
        &self.grammar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_char_prefix_never_falls_through_to_one_char() {
        let registry = Registry::current();
        let season = registry.resolve_season_prefix("aa").unwrap();
        assert_eq!(season.id, "atom02");

        // The grammar must also capture 'aa' as one prefix, not 'a' twice.
        let caps = registry.grammar().captures("aa201").unwrap();
        assert_eq!(&caps[1], "aa");
        assert_eq!(&caps[2], "201");
    }

    #[test]
    fn test_resolve_single_char_prefixes() {
        let registry = Registry::current();
        assert_eq!(registry.resolve_season_prefix("a").unwrap().id, "atom01");
        assert_eq!(registry.resolve_season_prefix("e").unwrap().id, "ever01");
        assert!(registry.resolve_season_prefix("z").is_none());
    }

    #[test]
    fn test_member_lookup_is_case_insensitive() {
        let registry = Registry::current();
        let member = registry.find_member("jiwoo").unwrap();
        assert_eq!(member.display(), "JiWoo");
        assert_eq!(member.slug(), "jiwoo");
        assert!(registry.is_known_member("CHAEYEON"));
        assert!(!registry.is_known_member("unknownname"));
    }

    #[test]
    fn test_legacy_era_has_no_two_char_prefix() {
        let registry = Registry::legacy();
        assert!(registry.resolve_season_prefix("aa").is_none());
        assert!(registry.resolve_season_prefix("e").is_none());
        assert_eq!(registry.resolve_season_prefix("d").unwrap().id, "divine01");
        assert!(!registry.is_known_member("JinSoul"));
    }
}
