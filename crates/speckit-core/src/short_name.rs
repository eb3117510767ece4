//! Derives a branch- and filesystem-safe slug from a feature description.
//!
//! Deterministic pure function: same description, same slug. Stop words
//! and very short tokens are dropped so "I want to add photo albums"
//! and "photo albums" land on the same name.

use regex::Regex;
use std::sync::OnceLock;

/// Common English function words plus a handful of generic verbs that
/// carry no signal in a branch name.
const STOP_WORDS: &[&str] = &[
    "i", "a", "an", "the", "to", "for", "of", "in", "on", "at", "by", "with", "from", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "should", "could", "can", "may", "might", "must", "shall", "this", "that", "these",
    "those", "my", "your", "our", "their", "want", "need", "add", "get", "set",
];

const FALLBACK: &str = "feature";

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z0-9]+)?").unwrap())
}

fn non_alnum_re() -> &'static Regex {
    NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Derive a lowercase hyphen-joined slug from a free-text description.
///
/// Tokens shorter than 3 characters or in the stop-word set are dropped;
/// if fewer than 2 tokens survive, the full token list is used instead.
/// At most the first 4 tokens are kept. Never returns an empty string.
pub fn derive(description: &str) -> String {
    let tokens: Vec<String> = token_re()
        .find_iter(description)
        .map(|m| m.as_str().to_lowercase().trim_matches('\'').to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let meaningful: Vec<&String> = tokens
        .iter()
        .filter(|t| t.len() >= 3 && !STOP_WORDS.contains(&t.as_str()))
        .collect();

    let candidates: Vec<&String> = if meaningful.len() < 2 {
        tokens.iter().collect()
    } else {
        meaningful
    };

    let joined = candidates
        .iter()
        .take(4)
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("-");

    if joined.is_empty() {
        return FALLBACK.to_string();
    }
    clean_branch_suffix(&joined)
}

/// Normalize an arbitrary name into a branch suffix: lowercase, runs of
/// non-alphanumerics collapsed to single hyphens, no leading or trailing
/// hyphen. Empty input becomes the fallback slug.
pub fn clean_branch_suffix(name: &str) -> String {
    let lowered = name.to_lowercase();
    let cleaned = non_alnum_re().replace_all(&lowered, "-");
    let cleaned = cleaned.trim_matches('-');
    if cleaned.is_empty() {
        FALLBACK.to_string()
    } else {
        cleaned.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_short_tokens() {
        assert_eq!(derive("I want to add photo albums"), "photo-albums");
    }

    #[test]
    fn caps_at_four_tokens() {
        assert_eq!(
            derive("organize tag search share export archive photos"),
            "organize-tag-search-share"
        );
    }

    #[test]
    fn falls_back_to_all_tokens_when_too_few_survive() {
        // Only one meaningful token — the unfiltered list wins.
        assert_eq!(derive("add tags"), "add-tags");
    }

    #[test]
    fn empty_description_uses_fallback() {
        assert_eq!(derive(""), "feature");
        assert_eq!(derive("!!! ???"), "feature");
    }

    #[test]
    fn internal_apostrophes_become_hyphens() {
        assert_eq!(
            derive("user's profile dashboard"),
            "user-s-profile-dashboard"
        );
    }

    #[test]
    fn deterministic() {
        let description = "Create photo albums";
        assert_eq!(derive(description), derive(description));
    }

    #[test]
    fn slug_charset_is_safe() {
        for description in [
            "Create photo albums",
            "UPPER case Input!",
            "emoji 😀 rocket feature",
            "trailing punctuation...",
        ] {
            let slug = derive(description);
            assert!(!slug.is_empty());
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{slug}"
            );
            assert!(!slug.contains("--"), "{slug}");
        }
    }

    #[test]
    fn clean_branch_suffix_collapses_runs() {
        assert_eq!(clean_branch_suffix("My  Fancy -- Name!"), "my-fancy-name");
        assert_eq!(clean_branch_suffix("---"), "feature");
    }
}
