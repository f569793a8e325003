//! Input normalization and slide splitting.
//!
//! Turns raw source text into independent per-slide text spans: strips a
//! byte-order mark and a leading front-matter block, normalizes line endings,
//! and splits on `---` rule lines. Documents that mark slides with inline
//! `***` metadata blocks instead of rules are recovered by a fallback split
//! on each `***`/`slide_number` boundary.

use std::sync::LazyLock;

use regex::Regex;

/// Leading front-matter block at the start of the document.
static DOC_FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*\*\*\*.*?\*\*\*\s*").unwrap());

/// Front-matter block at the start of a single slide span (already trimmed).
static SLIDE_FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\*\*\*.*?\*\*\*\s*").unwrap());

/// A leftover horizontal rule at the start of the document.
static LEADING_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*---\s*\n?").unwrap());

/// Start of an inline per-slide metadata block, used by the fallback split.
static SLIDE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\*\*\*\s*\nslide_number").unwrap());

/// Normalize raw input text: strip a single leading byte-order mark and
/// convert CRLF line endings to LF.
pub fn normalize(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.replace("\r\n", "\n")
}

/// Split normalized text into per-slide spans.
///
/// Primary split rule: a `---` rule on its own line. Fallback: when that
/// yields a single span but the text carries `slide_number` metadata, split
/// before each `***`/`slide_number` block instead. Each span is trimmed and
/// has its own leading metadata block removed.
pub fn split_slides(raw: &str) -> Vec<String> {
    let text = normalize(raw);

    // Document front matter, then any rule left directly behind it.
    let text = DOC_FRONT_MATTER.replace(&text, "");
    let text = LEADING_RULE.replace(&text, "");

    let mut spans: Vec<&str> = text.split("\n---\n").collect();

    if spans.len() == 1 && text.contains("slide_number") {
        let fallback = split_on_slide_markers(&text);
        if fallback.len() > 1 {
            spans = fallback;
        }
    }

    spans
        .into_iter()
        .map(|span| {
            let span = span.trim();
            SLIDE_FRONT_MATTER.replace(span, "").into_owned()
        })
        .collect()
}

/// Split before each inline `***`/`slide_number` metadata block. The marker
/// itself stays with the span it introduces.
fn split_on_slide_markers(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    for m in SLIDE_MARKER.find_iter(text) {
        // The match begins at the newline preceding the marker; the span
        // boundary sits just after that newline.
        spans.push(&text[start..m.start()]);
        start = m.start() + 1;
    }
    spans.push(&text[start..]);
    spans
}
