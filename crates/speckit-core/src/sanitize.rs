//! Post-processing for backend-generated markdown.
//!
//! Generation backends tend to wrap their answer in conversational
//! preamble, trailing code fences, and occasionally leftover merge
//! conflict scaffolding when asked to revise existing text. Every piece
//! of generated prose goes through [`clean`] before validation or
//! persistence.

use regex::Regex;
use std::sync::OnceLock;

static HEADER_RE: OnceLock<Regex> = OnceLock::new();
static TRAILING_FENCE_RE: OnceLock<Regex> = OnceLock::new();
static CONFLICT_BLOCK_RE: OnceLock<Regex> = OnceLock::new();
static STRAY_OURS_RE: OnceLock<Regex> = OnceLock::new();
static STRAY_SEP_RE: OnceLock<Regex> = OnceLock::new();
static STRAY_THEIRS_RE: OnceLock<Regex> = OnceLock::new();

fn header_re() -> &'static Regex {
    HEADER_RE.get_or_init(|| Regex::new(r"(?m)^#{1,6}\s+.*").unwrap())
}

fn trailing_fence_re() -> &'static Regex {
    TRAILING_FENCE_RE.get_or_init(|| Regex::new(r"\n*```+\s*$").unwrap())
}

fn conflict_block_re() -> &'static Regex {
    CONFLICT_BLOCK_RE.get_or_init(|| {
        Regex::new(r"(?ms)(?:<<<<<<<[^\n]*\n)?=======\n(?P<theirs>.*?)(?:\n>>>>>>>[^\n]*\n?)")
            .unwrap()
    })
}

fn stray_ours_re() -> &'static Regex {
    STRAY_OURS_RE.get_or_init(|| Regex::new(r"(?m)^<<<<<<<.*\n?").unwrap())
}

fn stray_sep_re() -> &'static Regex {
    STRAY_SEP_RE.get_or_init(|| Regex::new(r"(?m)^=======.*\n?").unwrap())
}

fn stray_theirs_re() -> &'static Regex {
    STRAY_THEIRS_RE.get_or_init(|| Regex::new(r"(?m)^>>>>>>>.*\n?").unwrap())
}

/// Drop everything before the first markdown header line, strip trailing
/// closing code fences, and trim trailing whitespace.
///
/// If no header line exists the text is kept as-is (minus the fence and
/// whitespace trimming).
pub fn sanitize(text: &str) -> String {
    let body = match header_re().find(text) {
        Some(m) => text[m.start()..].trim_start_matches('\n'),
        None => text,
    };
    let body = trailing_fence_re().replace(body, "");
    body.trim_end().to_string()
}

/// Remove version-control merge-conflict scaffolding, keeping the
/// "theirs" side of each block. Any marker lines that survive outside a
/// matched block are removed in a final pass.
pub fn strip_conflict_markers(text: &str) -> String {
    let mut cleaned = text.to_string();
    while let Some(m) = conflict_block_re().captures(&cleaned) {
        let whole = m.get(0).unwrap();
        let theirs = m.name("theirs").map(|g| g.as_str()).unwrap_or("");
        let mut next = String::with_capacity(cleaned.len());
        next.push_str(&cleaned[..whole.start()]);
        next.push_str(theirs);
        next.push_str(&cleaned[whole.end()..]);
        cleaned = next;
    }
    let cleaned = stray_ours_re().replace_all(&cleaned, "");
    let cleaned = stray_sep_re().replace_all(&cleaned, "");
    let cleaned = stray_theirs_re().replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// The standard pipeline: [`sanitize`] then [`strip_conflict_markers`].
pub fn clean(text: &str) -> String {
    strip_conflict_markers(&sanitize(text))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
