//! Document store: article discovery and reading.
//!
//! # Architecture
//!
//! ```text
//! DocumentStore::list_document_files()  ──► Vec<FileRef>   (sorted by name)
//!                     │
//!                     ▼
//! DocumentStore::read_document(file)    ──► RawDocument { metadata, body }
//!                     │
//!                     ▼
//! record::normalize(&metadata)          ──► Option<DocumentRecord>
//! ```
//!
//! Nothing is cached: every call goes back to the filesystem, so edits to
//! article files are picked up by the next query.

mod error;
mod frontmatter;

pub use error::StoreError;
pub use frontmatter::split_front_matter;

use crate::{
    config::SiteConfig,
    record::{self, DocumentRecord},
};
use serde::Serialize;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

// ============================================================================
// Types
// ============================================================================

/// An article file found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    /// Full path to the file
    pub path: PathBuf,
    /// Path relative to the content directory, `/`-separated
    pub name: String,
}

/// Metadata block as found in the file, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMetadata {
    /// The file has no leading `---` block
    Absent,
    /// The block parsed as YAML (any shape)
    Parsed(serde_yaml::Value),
    /// The block exists but could not be parsed
    Malformed { source: String, reason: String },
}

/// A file split into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub metadata: RawMetadata,
    pub body: String,
}

/// A normalized article together with its body.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub file: FileRef,
    #[serde(flatten)]
    pub record: DocumentRecord,
    #[serde(skip)]
    pub body: String,
}

/// Result of reading every article in the store.
#[derive(Debug, Default)]
pub struct Collected {
    /// Articles with valid metadata, in file order
    pub documents: Vec<Document>,
    /// Files dropped for missing `slug` or `title`
    pub skipped: Vec<FileRef>,
}

// ============================================================================
// DocumentStore
// ============================================================================

/// Reads article files from one directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
    extension: String,
    recursive: bool,
}

impl DocumentStore {
    /// Store over `dir`, matching files with `extension` (with or without the dot).
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_owned(),
            recursive: false,
        }
    }

    /// Also descend into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.content_dir(), &config.content.extension)
            .recursive(config.content.recursive)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List article files, sorted by name.
    ///
    /// A missing content directory yields an empty list.
    pub fn list_document_files(&self) -> Result<Vec<FileRef>, StoreError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Ok(Vec::new()),
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(&self.dir, err)),
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(&self.dir).to_path_buf();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| ErrorKind::Other.into());
                StoreError::io(path, source)
            })?;

            let path = entry.path();
            if !path.is_file() || !self.has_extension(path) {
                continue;
            }

            let name = path
                .strip_prefix(&self.dir)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            files.push(FileRef {
                path: path.to_path_buf(),
                name,
            });
        }

        Ok(files)
    }

    /// Read one file and split off its metadata block.
    pub fn read_document(&self, file: &FileRef) -> Result<RawDocument, StoreError> {
        let text = fs::read_to_string(&file.path).map_err(|err| StoreError::io(&file.path, err))?;
        let (metadata, body) = split_front_matter(&text);
        Ok(RawDocument {
            metadata,
            body: body.to_owned(),
        })
    }

    /// Read and normalize every article.
    pub fn collect(&self) -> Result<Collected, StoreError> {
        let mut collected = Collected::default();

        for file in self.list_document_files()? {
            let raw = self.read_document(&file)?;
            match record::normalize(&raw.metadata) {
                Some(record) => collected.documents.push(Document {
                    file,
                    record,
                    body: raw.body,
                }),
                None => collected.skipped.push(file),
            }
        }

        Ok(collected)
    }

    /// First article whose slug matches case-insensitively.
    ///
    /// Files are read in name order and reading stops at the first match.
    pub fn find_document(&self, slug: &str) -> Result<Option<Document>, StoreError> {
        if slug.is_empty() {
            return Ok(None);
        }
        let target = slug.to_lowercase();

        for file in self.list_document_files()? {
            let raw = self.read_document(&file)?;
            let Some(record) = record::normalize(&raw.metadata) else {
                continue;
            };
            if record.slug.to_lowercase() == target {
                return Ok(Some(Document {
                    file,
                    record,
                    body: raw.body,
                }));
            }
        }

        Ok(None)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn article(slug: &str, title: &str, body: &str) -> String {
        format!("---\nslug: {slug}\ntitle: {title}\ndate: 2024-01-01\n---\n{body}")
    }

    fn store_with(files: &[(&str, &str)]) -> (TempDir, DocumentStore) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        let store = DocumentStore::new(dir.path(), "mdx");
        (dir, store)
    }

    // ========================================================================
    // list_document_files
    // ========================================================================

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path().join("nope"), "mdx");
        assert!(store.list_document_files().unwrap().is_empty());
        assert!(store.collect().unwrap().documents.is_empty());
    }

    #[test]
    fn test_lists_matching_extension_sorted() {
        let (_dir, store) = store_with(&[
            ("b.mdx", ""),
            ("a.MDX", ""),
            ("notes.md", ""),
            ("c.mdx.bak", ""),
        ]);
        let names: Vec<_> = store
            .list_document_files()
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["a.MDX", "b.mdx"]);
    }

    #[test]
    fn test_unreadable_content_dir_is_io_error() {
        // a path running through a regular file cannot be stat'ed
        let (dir, _) = store_with(&[("plain", "")]);
        let broken = dir.path().join("plain").join("articles");
        let store = DocumentStore::new(&broken, "mdx");

        let StoreError::Io { path, .. } = store.list_document_files().unwrap_err();
        assert_eq!(path, broken);
        assert!(store.collect().is_err());
        assert!(store.find_document("a").is_err());
    }

    #[test]
    fn test_content_path_is_a_file() {
        let (dir, _) = store_with(&[("articles.mdx", "")]);
        let store = DocumentStore::new(dir.path().join("articles.mdx"), "mdx");
        assert!(store.list_document_files().unwrap().is_empty());
    }

    #[test]
    fn test_subdirectories_only_when_recursive() {
        let (dir, store) = store_with(&[("top.mdx", ""), ("2024/nested.mdx", "")]);
        assert_eq!(store.list_document_files().unwrap().len(), 1);

        let store = DocumentStore::new(dir.path(), ".mdx").recursive(true);
        let names: Vec<_> = store
            .list_document_files()
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["2024/nested.mdx", "top.mdx"]);
    }

    // ========================================================================
    // read_document
    // ========================================================================

    #[test]
    fn test_read_document_splits_body() {
        let (_dir, store) = store_with(&[("a.mdx", &article("a", "A", "## Intro\ntext\n"))]);
        let file = &store.list_document_files().unwrap()[0];
        let raw = store.read_document(file).unwrap();
        assert!(matches!(raw.metadata, RawMetadata::Parsed(_)));
        assert_eq!(raw.body, "## Intro\ntext\n");
    }

    #[test]
    fn test_read_document_passes_malformed_metadata_through() {
        let (_dir, store) = store_with(&[("a.mdx", "---\ntitle: [\n---\nbody")]);
        let file = &store.list_document_files().unwrap()[0];
        let raw = store.read_document(file).unwrap();
        assert!(matches!(raw.metadata, RawMetadata::Malformed { .. }));
    }

    #[test]
    fn test_read_vanished_file_is_io_error() {
        let (dir, store) = store_with(&[("a.mdx", "")]);
        let file = store.list_document_files().unwrap().remove(0);
        fs::remove_file(dir.path().join("a.mdx")).unwrap();

        let err = store.read_document(&file).unwrap_err();
        let StoreError::Io { path, source } = err;
        assert_eq!(path, file.path);
        assert_eq!(source.kind(), ErrorKind::NotFound);
    }

    // ========================================================================
    // collect / find_document
    // ========================================================================

    #[test]
    fn test_collect_skips_records_without_required_fields() {
        let (_dir, store) = store_with(&[
            ("a.mdx", &article("a", "A", "")),
            ("b.mdx", "---\ntitle: No slug\n---\n"),
            ("c.mdx", "no front matter at all"),
        ]);
        let collected = store.collect().unwrap();
        assert_eq!(collected.documents.len(), 1);
        assert_eq!(collected.documents[0].record.slug, "a");
        let skipped: Vec<_> = collected.skipped.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(skipped, ["b.mdx", "c.mdx"]);
    }

    #[test]
    fn test_find_document_case_insensitive() {
        let (_dir, store) = store_with(&[("x.mdx", &article("Opening-Day", "Opening", "## Kick-off\n"))]);
        let doc = store.find_document("opening-day").unwrap().unwrap();
        assert_eq!(doc.record.title, "Opening");
        assert_eq!(doc.body, "## Kick-off\n");
        assert_eq!(doc.file.name, "x.mdx");
    }

    #[test]
    fn test_find_document_first_match_wins() {
        let (_dir, store) = store_with(&[
            ("1.mdx", &article("dup", "First", "")),
            ("2.mdx", &article("dup", "Second", "")),
        ]);
        let doc = store.find_document("DUP").unwrap().unwrap();
        assert_eq!(doc.record.title, "First");
    }

    #[test]
    fn test_find_document_miss() {
        let (_dir, store) = store_with(&[("a.mdx", &article("a", "A", ""))]);
        assert!(store.find_document("b").unwrap().is_none());
        assert!(store.find_document("").unwrap().is_none());
    }
}
