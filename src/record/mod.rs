//! Article metadata records.
//!
//! [`normalize`] turns whatever the front matter block contained into a
//! [`DocumentRecord`], or `None` when `slug` or `title` is missing. It never
//! fails and never panics: historical articles written against older
//! metadata layouts still load, with defaults in place of bad fields.
//!
//! # Front matter keys
//!
//! | Key        | Field          | Rule                          |
//! |------------|----------------|-------------------------------|
//! | `slug`     | `slug`         | required, text or number      |
//! | `title`    | `title`        | required, text or number      |
//! | `date`     | `date`         | text, default `""`            |
//! | `author`   | `author`       | text, default `""`            |
//! | `readMin`  | `read_minutes` | count, default `0`            |
//! | `cover`    | `cover_image`  | text                          |
//! | `excerpt`  | `excerpt`      | text                          |
//! | `teams`    | `teams`        | string set                    |
//! | `tags`     | `tags`         | string set                    |
//! | `category` | `category`     | text                          |
//! | `matchId`  | `match_id`     | text                          |
//! | `views`    | `view_count`   | count                         |

mod coerce;

use crate::store::RawMetadata;
use serde::Serialize;
use serde_yaml::Value;

/// Normalized article metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub slug: String,
    pub title: String,
    /// As written; see [`crate::utils::date`] for how it is interpreted
    pub date: String,
    /// Writer slug, empty when unknown
    pub author: String,
    pub read_minutes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Team names, first-appearance order, no duplicates
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
}

/// Normalize a raw metadata block.
pub fn normalize(raw: &RawMetadata) -> Option<DocumentRecord> {
    match raw {
        RawMetadata::Parsed(value) => DocumentRecord::from_value(value),
        RawMetadata::Absent | RawMetadata::Malformed { .. } => None,
    }
}

impl DocumentRecord {
    /// Build a record from a YAML mapping.
    ///
    /// Returns `None` for non-mappings and when `slug` or `title` is
    /// missing, empty or blank.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_mapping() {
            return None;
        }
        let field = |key: &str| value.get(key);

        let slug = coerce::label(field("slug")).filter(|s| !s.trim().is_empty())?;
        let title = coerce::label(field("title")).filter(|s| !s.trim().is_empty())?;

        Some(Self {
            slug,
            title,
            date: coerce::text(field("date")).unwrap_or_default(),
            author: coerce::text(field("author")).unwrap_or_default(),
            read_minutes: coerce::count(field("readMin")).unwrap_or(0),
            cover_image: coerce::text(field("cover")),
            excerpt: coerce::text(field("excerpt")),
            teams: coerce::string_set(field("teams")).unwrap_or_default(),
            tags: coerce::string_set(field("tags")).unwrap_or_default(),
            category: coerce::text(field("category")),
            match_id: coerce::text(field("matchId")),
            view_count: coerce::count(field("views")),
        })
    }

    /// Publication time in epoch milliseconds, 0 when the date is unparsable.
    pub fn timestamp(&self) -> i64 {
        crate::utils::date::sort_key(&self.date)
    }

    /// Case-insensitive team membership.
    pub fn has_team(&self, team: &str) -> bool {
        let team = team.to_lowercase();
        self.teams.iter().any(|t| t.to_lowercase() == team)
    }

    /// Case-insensitive author match; an empty author matches nothing.
    pub fn is_by(&self, author: &str) -> bool {
        !self.author.is_empty() && self.author.to_lowercase() == author.to_lowercase()
    }
}
