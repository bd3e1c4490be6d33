//! Data types for the exported JSON files.
//!
//! These types are serialized to JSON and read by the page renderer.

use crate::{
    directory::{Category, Writer},
    record::DocumentRecord,
    toc::Heading,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// An article reference within an index, exposed in `teams.json`,
/// `tags.json` and `categories.json`.
///
/// Contains minimal information for listing articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRef {
    pub slug: String,
    pub title: String,
    /// Publication date as written in the front matter
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date: String,
}

impl From<&DocumentRecord> for ArticleRef {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            slug: record.slug.clone(),
            title: record.title.clone(),
            date: record.date.clone(),
        }
    }
}

/// Name to articles, exposed in `teams.json` and `tags.json`.
///
/// Sorted alphabetically by key.
pub type GroupIndex = BTreeMap<String, Vec<ArticleRef>>;

/// A configured category with its articles, exposed in `categories.json`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryData<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub articles: Vec<ArticleRef>,
}

/// A writer profile with the slugs of their articles, exposed in `writers.json`.
#[derive(Debug, Clone, Serialize)]
pub struct WriterData<'a> {
    #[serde(flatten)]
    pub writer: &'a Writer,
    pub articles: Vec<String>,
}

/// Table of contents of one article, exposed in `toc/<slug>.json`.
#[derive(Debug, Clone, Serialize)]
pub struct TocData<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub headings: Vec<Heading>,
}
