//! Table of contents extraction.
//!
//! # Pipeline
//!
//! ```text
//! body ──► scan_headings() ──► Vec<HeadingDraft> ──► assign_anchors() ──► Vec<Heading>
//!          (line by line)      (depth, text, id?)    (slugify + dedupe)
//! ```
//!
//! A heading line is `##` to `######`, at least one whitespace character,
//! then text:
//!
//! ```text
//! ## Kick-off                 depth 2, "Kick-off"
//! ### Set piece ###           depth 3, "Set piece"
//! ## Line-out {#lineout}      depth 2, "Line-out", id "lineout"
//! ####### too deep            ignored
//! ##no-space                  ignored
//! ```

mod anchor;
mod slug;

pub use anchor::AnchorSet;
pub use slug::slugify;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `##`..`######`, whitespace, text. Trailing whitespace is not captured.
static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{2,6})\s+(.+?)\s*$").expect("valid heading regex"));

/// Explicit identifier at the end of a heading: `{#some-id}`.
static RE_EXPLICIT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\{#([^\s{}]+)\}$").expect("valid id regex"));

// ============================================================================
// Types
// ============================================================================

/// Inclusive range of heading depths to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthRange {
    min: u8,
    max: u8,
}

impl DepthRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, depth: u8) -> bool {
        self.min <= depth && depth <= self.max
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

/// A heading before anchor assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingDraft {
    pub depth: u8,
    pub text: String,
    /// Identifier supplied by the author (`{#id}`), if any
    pub id: Option<String>,
}

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub depth: u8,
    pub text: String,
    pub anchor: String,
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract headings from `body` and give each a unique anchor.
///
/// `fallback` is the anchor base for headings whose text slugifies to nothing.
pub fn extract_headings(body: &str, range: DepthRange, fallback: &str) -> Vec<Heading> {
    assign_anchors(scan_headings(body, range), fallback)
}

/// Find heading lines within `range`, in order of appearance.
pub fn scan_headings(body: &str, range: DepthRange) -> Vec<HeadingDraft> {
    body.lines()
        .filter_map(parse_heading_line)
        .filter(|draft| range.contains(draft.depth))
        .collect()
}

/// Resolve anchors left to right.
///
/// The base of each heading is its explicit id, otherwise the slug of its
/// text, otherwise `fallback`.
pub fn assign_anchors(drafts: Vec<HeadingDraft>, fallback: &str) -> Vec<Heading> {
    let mut anchors = AnchorSet::new();

    drafts
        .into_iter()
        .map(|draft| {
            let base = draft
                .id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| {
                    let slug = slugify(&draft.text);
                    if slug.is_empty() { fallback.to_owned() } else { slug }
                });

            Heading {
                depth: draft.depth,
                text: draft.text,
                anchor: anchors.claim(&base),
            }
        })
        .collect()
}

fn parse_heading_line(line: &str) -> Option<HeadingDraft> {
    let caps = RE_HEADING.captures(line)?;
    #[allow(clippy::cast_possible_truncation)] // at most 6 markers
    let depth = caps[1].len() as u8;
    let mut text = &caps[2];

    let mut id = None;
    if let Some(m) = RE_EXPLICIT_ID.captures(text) {
        id = Some(m[1].to_owned());
        text = &text[..m.get(0).map_or(text.len(), |whole| whole.start())];
    }

    let text = text.trim_end().trim_end_matches('#').trim();
    if text.is_empty() {
        return None;
    }

    Some(HeadingDraft {
        depth,
        text: text.to_owned(),
        id,
    })
}
