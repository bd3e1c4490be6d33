//! Listing and ranking selection over normalized records.
//!
//! Apart from [`all_records`], which reads the store, the functions here
//! are pure: they take records, return new vectors, and keep the relative
//! order of records that compare equal.

use crate::{
    log,
    record::DocumentRecord,
    store::{DocumentStore, StoreError},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Ranking types
// ============================================================================

/// How a record's score is computed for [`top_by_score`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Records with a view count rank above records without one. Within the
    /// first group higher counts win, within the second newer dates win.
    #[default]
    Tiered,
    /// Single numeric score: the view count when present, otherwise the date
    /// in epoch milliseconds. Dated records without views outrank almost
    /// any view count.
    Legacy,
}

/// What a ranking entry was scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Score {
    Views(u64),
    /// Epoch milliseconds, 0 for unparsable dates
    Date(i64),
}

impl Score {
    pub fn of(record: &DocumentRecord) -> Self {
        match record.view_count {
            Some(views) => Self::Views(views),
            None => Self::Date(record.timestamp()),
        }
    }

    /// The score as one number, mixing units.
    pub fn legacy_value(self) -> i128 {
        match self {
            Self::Views(views) => i128::from(views),
            Self::Date(millis) => i128::from(millis),
        }
    }

    fn compare(self, other: Self, mode: RankingMode) -> Ordering {
        match mode {
            RankingMode::Legacy => self.legacy_value().cmp(&other.legacy_value()),
            RankingMode::Tiered => match (self, other) {
                (Self::Views(a), Self::Views(b)) => a.cmp(&b),
                (Self::Date(a), Self::Date(b)) => a.cmp(&b),
                (Self::Views(_), Self::Date(_)) => Ordering::Greater,
                (Self::Date(_), Self::Views(_)) => Ordering::Less,
            },
        }
    }
}

/// A ranked article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub slug: String,
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    pub score: Score,
}

// ============================================================================
// Listings
// ============================================================================

/// Every valid record in the store, newest first.
///
/// Files dropped for missing `slug` or `title` are logged, not returned.
pub fn all_records(store: &DocumentStore) -> Result<Vec<DocumentRecord>, StoreError> {
    let collected = store.collect()?;
    for file in &collected.skipped {
        log!("skip"; "{}: missing slug or title", file.name);
    }

    let records = collected.documents.into_iter().map(|doc| doc.record).collect();
    Ok(sort_by_date(records))
}

/// Stable sort by date, newest first. Unparsable dates count as epoch zero.
pub fn sort_by_date(mut records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
    records.sort_by_cached_key(|r| std::cmp::Reverse(r.timestamp()));
    records
}

/// Top `n` records by score, highest first; ties keep input order.
pub fn top_by_score(records: &[DocumentRecord], n: usize, mode: RankingMode) -> Vec<RankingEntry> {
    let mut scored: Vec<_> = records.iter().map(|r| (Score::of(r), r)).collect();
    scored.sort_by(|(a, _), (b, _)| b.compare(*a, mode));

    scored
        .into_iter()
        .take(n)
        .map(|(score, r)| RankingEntry {
            slug: r.slug.clone(),
            title: r.title.clone(),
            date: r.date.clone(),
            view_count: r.view_count,
            score,
        })
        .collect()
}

/// Records whose category equals `category` exactly.
pub fn filter_by_category<'a>(records: &'a [DocumentRecord], category: &str) -> Vec<&'a DocumentRecord> {
    records
        .iter()
        .filter(|r| r.category.as_deref() == Some(category))
        .collect()
}

/// Records listing `team`, compared case-insensitively.
pub fn filter_by_team<'a>(records: &'a [DocumentRecord], team: &str) -> Vec<&'a DocumentRecord> {
    records.iter().filter(|r| r.has_team(team)).collect()
}

/// Records written by `author` (a writer slug), compared case-insensitively.
pub fn filter_by_author<'a>(records: &'a [DocumentRecord], author: &str) -> Vec<&'a DocumentRecord> {
    records.iter().filter(|r| r.is_by(author)).collect()
}

/// Distinct team names across all records, lowercased and sorted.
pub fn team_index(records: &[DocumentRecord]) -> Vec<String> {
    let mut teams: Vec<String> = records
        .iter()
        .flat_map(|r| r.teams.iter().map(|t| t.to_lowercase()))
        .collect();
    teams.sort();
    teams.dedup();
    teams
}
