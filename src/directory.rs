//! Writer directory and category table.
//!
//! Both are static reference tables owned by the configuration and handed
//! in by reference; nothing here is global or mutable.

use serde::{Deserialize, Serialize};

/// A writer profile, matched against the `author` field of articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Writer {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<WriterLink>,
}

/// External profile link (X, Instagram, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriterLink {
    pub label: String,
    pub url: String,
}

/// A known article category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub slug: String,
    pub label: String,
}

/// Read-only view over the configured writers.
#[derive(Debug, Clone, Copy)]
pub struct WriterDirectory<'a> {
    writers: &'a [Writer],
}

impl<'a> WriterDirectory<'a> {
    pub const fn new(writers: &'a [Writer]) -> Self {
        Self { writers }
    }

    /// Case-insensitive lookup by slug.
    pub fn find(&self, slug: &str) -> Option<&'a Writer> {
        self.writers
            .iter()
            .find(|w| w.slug.to_lowercase() == slug.to_lowercase())
    }

    /// All writers ordered by display name, compared by code point rather
    /// than by reading.
    pub fn sorted(&self) -> Vec<&'a Writer> {
        let mut writers: Vec<_> = self.writers.iter().collect();
        writers.sort_by(|a, b| a.name.cmp(&b.name));
        writers
    }
}

/// Read-only view over the configured categories.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable<'a> {
    categories: &'a [Category],
}

impl<'a> CategoryTable<'a> {
    pub const fn new(categories: &'a [Category]) -> Self {
        Self { categories }
    }

    /// Exact lookup by slug.
    pub fn find(&self, slug: &str) -> Option<&'a Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Category> {
        self.categories.iter()
    }
}
