//! JSON data export.
//!
//! Writes the files the page renderer reads instead of scanning the
//! articles itself:
//!
//! ```text
//! <output>/
//! ├── site.json         site title and language
//! ├── articles.json     all records, newest first
//! ├── ranking.json      top [ranking.size] entries
//! ├── teams.json        team → articles
//! ├── tags.json         tag → articles
//! ├── categories.json   configured category → articles
//! ├── writers.json      writer profile + article slugs
//! └── toc/
//!     └── <slug>.json   headings of one article
//! ```

use super::{
    index::SiteData,
    types::TocData,
};
use crate::{
    config::SiteConfig,
    directory::{CategoryTable, WriterDirectory},
    listing::top_by_score,
    log,
    store::{Document, DocumentStore},
    toc::{DepthRange, extract_headings},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    collections::HashSet,
    fs,
    path::Path,
};

/// Directory holding per-article table of contents files
const TOC_DIR: &str = "toc";

/// What an export run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub articles: usize,
    pub skipped: usize,
    pub files: usize,
}

/// Read every article from `store` and write the data files under `dir`.
pub fn export(store: &DocumentStore, config: &SiteConfig, dir: &Path) -> Result<ExportSummary> {
    let collected = store
        .collect()
        .with_context(|| format!("Failed to read articles from {}", store.dir().display()))?;

    for file in &collected.skipped {
        log!("skip"; "{}: missing slug or title", file.name);
    }

    // Rebuilt from scratch so removed or renamed articles leave nothing behind
    let toc_dir = dir.join(TOC_DIR);
    if toc_dir.exists() {
        fs::remove_dir_all(&toc_dir)
            .with_context(|| format!("Failed to clear {}", toc_dir.display()))?;
    }
    fs::create_dir_all(&toc_dir)
        .with_context(|| format!("Failed to create {}", toc_dir.display()))?;

    let mut summary = ExportSummary {
        articles: collected.documents.len(),
        skipped: collected.skipped.len(),
        files: 0,
    };

    summary.files += write_tocs(
        &collected.documents,
        dir,
        config.toc.depth_range(),
        &config.toc.fallback,
    )?;

    let data = SiteData::new(collected.documents.into_iter().map(|doc| doc.record).collect());
    let ranking = top_by_score(data.articles(), config.ranking.size, config.ranking.mode);

    write_json(&dir.join("site.json"), &config.site)?;
    write_json(&dir.join("articles.json"), &data.articles())?;
    write_json(&dir.join("ranking.json"), &ranking)?;
    write_json(&dir.join("teams.json"), &data.teams_index())?;
    write_json(&dir.join("tags.json"), &data.tags_index())?;
    write_json(
        &dir.join("categories.json"),
        &data.categories(CategoryTable::new(&config.categories)),
    )?;
    write_json(
        &dir.join("writers.json"),
        &data.writers(WriterDirectory::new(&config.writers)),
    )?;
    summary.files += 7;

    log!(
        "export";
        "{} articles, {} files in {}",
        summary.articles,
        summary.files,
        dir.display()
    );
    Ok(summary)
}

/// Write one `toc/<slug>.json` per article; returns the number written.
///
/// When several files share a slug the first one in file order wins, the
/// same rule slug lookups follow.
fn write_tocs(documents: &[Document], dir: &Path, range: DepthRange, fallback: &str) -> Result<usize> {
    let mut seen = HashSet::new();
    let mut written = 0;

    for doc in documents {
        let slug = &doc.record.slug;
        if !is_safe_file_stem(slug) {
            log!("skip"; "{}: slug `{}` is not usable as a file name", doc.file.name, slug);
            continue;
        }
        if !seen.insert(slug.to_lowercase()) {
            log!("skip"; "{}: duplicate slug `{}`", doc.file.name, slug);
            continue;
        }

        let toc = TocData {
            slug,
            title: &doc.record.title,
            headings: extract_headings(&doc.body, range, fallback),
        };
        write_json(&dir.join(TOC_DIR).join(format!("{slug}.json")), &toc)?;
        written += 1;
    }

    Ok(written)
}

fn is_safe_file_stem(slug: &str) -> bool {
    !slug.starts_with('.') && !slug.contains(['/', '\\', '\0'])
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
