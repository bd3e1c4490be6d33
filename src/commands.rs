//! Subcommand implementations.
//!
//! Listings go to stdout (plain text, or JSON with `--json`); progress and
//! skipped files go through [`log!`] to stderr.

use crate::{
    cli::FilterArgs,
    config::SiteConfig,
    data,
    directory::{CategoryTable, WriterDirectory},
    listing::{self, RankingEntry, Score},
    log,
    record::DocumentRecord,
    store::DocumentStore,
    toc::{Heading, extract_headings},
    utils::date::display_date,
};
use anyhow::{Context, Result, bail};
use serde::Serialize;

// ============================================================================
// Articles
// ============================================================================

/// `list`: filtered articles, newest first.
pub fn list(config: &SiteConfig, filter: &FilterArgs, limit: Option<usize>, json: bool) -> Result<()> {
    let mut records = load_records(config)?;
    if let Some(category) = &filter.category {
        records = owned(listing::filter_by_category(&records, category));
    }
    if let Some(team) = &filter.team {
        records = owned(listing::filter_by_team(&records, team));
    }
    if let Some(author) = &filter.author {
        records = owned(listing::filter_by_author(&records, author));
    }
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    let selected: Vec<&DocumentRecord> = records.iter().collect();
    if json {
        return print_json(&selected);
    }
    print_records(&selected);
    Ok(())
}

/// Article metadata together with its table of contents.
#[derive(Serialize)]
struct ArticleView<'a> {
    #[serde(flatten)]
    record: &'a DocumentRecord,
    file: &'a str,
    headings: Vec<Heading>,
}

/// `show`: one article's metadata and headings.
pub fn show(config: &SiteConfig, slug: &str, json: bool) -> Result<()> {
    let store = DocumentStore::from_config(config);
    let Some(doc) = store.find_document(slug)? else {
        bail!("article `{slug}` not found in {}", store.dir().display());
    };
    let headings = headings_of(config, &doc.body);

    if json {
        return print_json(&ArticleView {
            record: &doc.record,
            file: &doc.file.name,
            headings,
        });
    }

    let r = &doc.record;
    println!("{}", r.title);
    println!("  slug      {}", r.slug);
    println!("  file      {}", doc.file.name);
    println!("  date      {}", display_date(&r.date));
    print_field("author", (!r.author.is_empty()).then_some(r.author.as_str()));
    println!("  read      {} min", r.read_minutes);
    print_field("category", r.category.as_deref());
    print_list("teams", &r.teams);
    print_list("tags", &r.tags);
    print_field("match", r.match_id.as_deref());
    if let Some(views) = r.view_count {
        println!("  views     {views}");
    }
    print_field("cover", r.cover_image.as_deref());
    print_field("excerpt", r.excerpt.as_deref());

    if !headings.is_empty() {
        println!();
        print_headings(&headings, config.toc.min_depth);
    }
    Ok(())
}

/// `toc`: headings of one article with their anchors.
pub fn toc(config: &SiteConfig, slug: &str) -> Result<()> {
    let store = DocumentStore::from_config(config);
    let Some(doc) = store.find_document(slug)? else {
        bail!("article `{slug}` not found in {}", store.dir().display());
    };

    let headings = headings_of(config, &doc.body);
    if headings.is_empty() {
        log!("toc"; "{}: no headings", doc.record.slug);
        return Ok(());
    }
    print_headings(&headings, config.toc.min_depth);
    Ok(())
}

/// `top`: ranking by the configured mode.
pub fn top(config: &SiteConfig, json: bool) -> Result<()> {
    let records = load_records(config)?;
    let ranking = listing::top_by_score(&records, config.ranking.size, config.ranking.mode);

    if json {
        return print_json(&ranking);
    }
    for (i, entry) in ranking.iter().enumerate() {
        println!("{:>2}. {}  ({})  {}", i + 1, entry.title, entry.slug, score_label(entry));
    }
    Ok(())
}

/// `teams`: every team mentioned by an article.
pub fn teams(config: &SiteConfig) -> Result<()> {
    let records = load_records(config)?;
    for team in listing::team_index(&records) {
        println!("{team}");
    }
    Ok(())
}

// ============================================================================
// Writers and categories
// ============================================================================

/// `writers`: the writer directory, by name.
pub fn writers(config: &SiteConfig) -> Result<()> {
    for writer in WriterDirectory::new(&config.writers).sorted() {
        println!("{:<16} {}", writer.slug, writer.name);
    }
    Ok(())
}

/// `writer`: one profile and the articles written by it.
pub fn writer(config: &SiteConfig, slug: &str) -> Result<()> {
    let Some(writer) = WriterDirectory::new(&config.writers).find(slug) else {
        bail!("writer `{slug}` not found");
    };

    println!("{} ({})", writer.name, writer.slug);
    if let Some(bio) = &writer.bio {
        println!("  {bio}");
    }
    for link in &writer.links {
        println!("  {}: {}", link.label, link.url);
    }

    let records = load_records(config)?;
    let articles = listing::filter_by_author(&records, &writer.slug);
    println!();
    print_records(&articles);
    Ok(())
}

/// `categories`: the category table with article counts.
pub fn categories(config: &SiteConfig) -> Result<()> {
    let records = load_records(config)?;
    for category in CategoryTable::new(&config.categories).iter() {
        let count = listing::filter_by_category(&records, &category.slug).len();
        println!("{:<20} {:<12} {count}", category.slug, category.label);
    }
    Ok(())
}

/// `category`: articles of one known category.
pub fn category(config: &SiteConfig, slug: &str) -> Result<()> {
    let Some(category) = CategoryTable::new(&config.categories).find(slug) else {
        bail!("category `{slug}` not found");
    };

    let records = load_records(config)?;
    println!("{} ({})", category.label, category.slug);
    println!();
    print_records(&listing::filter_by_category(&records, &category.slug));
    Ok(())
}

// ============================================================================
// Export
// ============================================================================

/// `export`: write the JSON data files.
pub fn export(config: &SiteConfig) -> Result<()> {
    let store = DocumentStore::from_config(config);
    let output = config.export_dir();
    data::export(&store, config, &output)?;
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn load_records(config: &SiteConfig) -> Result<Vec<DocumentRecord>> {
    let store = DocumentStore::from_config(config);
    listing::all_records(&store)
        .with_context(|| format!("Failed to read articles from {}", store.dir().display()))
}

fn owned(records: Vec<&DocumentRecord>) -> Vec<DocumentRecord> {
    records.into_iter().cloned().collect()
}

fn headings_of(config: &SiteConfig, body: &str) -> Vec<Heading> {
    extract_headings(body, config.toc.depth_range(), &config.toc.fallback)
}

fn score_label(entry: &RankingEntry) -> String {
    match entry.score {
        Score::Views(views) => format!("{views} views"),
        Score::Date(_) => display_date(&entry.date),
    }
}

fn print_records(records: &[&DocumentRecord]) {
    for r in records {
        println!("{:<10}  {:<24}  {}", display_date(&r.date), r.slug, r.title);
    }
}

fn print_headings(headings: &[Heading], min_depth: u8) {
    for h in headings {
        let indent = "  ".repeat(usize::from(h.depth.saturating_sub(min_depth)));
        println!("{indent}- {}  #{}", h.text, h.anchor);
    }
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {label:<9} {value}");
    }
}

fn print_list(label: &str, values: &[String]) {
    if !values.is_empty() {
        println!("  {label:<9} {}", values.join(", "));
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
