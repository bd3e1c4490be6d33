//! Site-wide data for the page renderer.
//!
//! Collects every article once and writes grouped JSON views of it, so
//! pages can be rendered without re-reading the article directory.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────────┐
//! │ DocumentStore    │ ──► │ SiteData         │ ──► │ <output>/*.json      │
//! │ ::collect()      │     │ (newest first)   │     │ <output>/toc/*.json  │
//! └──────────────────┘     └──────────────────┘     └──────────────────────┘
//!         │
//!         └── bodies ──► extract_headings() ──► toc/<slug>.json
//! ```
//!
//! # Files
//!
//! | Path | Description |
//! |------|-------------|
//! | `site.json` | Site title and language |
//! | `articles.json` | All records, newest first |
//! | `ranking.json` | Top entries by score |
//! | `teams.json` | Articles grouped by lowercase team name |
//! | `tags.json` | Articles grouped by tag |
//! | `categories.json` | Configured categories with their articles |
//! | `writers.json` | Writer profiles with their article slugs |
//! | `toc/<slug>.json` | Table of contents of one article |

mod export;
mod index;
mod types;

pub use export::export;
