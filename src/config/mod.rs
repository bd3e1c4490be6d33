//! Site configuration management for `tryline.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                     |
//! |------------------|---------------------------------------------|
//! | `[site]`         | Site metadata (title, language)             |
//! | `[content]`      | Article directory and file extension        |
//! | `[toc]`          | Heading depth range and anchor fallback     |
//! | `[ranking]`      | Ranking mode and size                       |
//! | `[export]`       | JSON data output directory                  |
//! | `[[writers]]`    | Writer directory                            |
//! | `[[categories]]` | Category table (defaults to the site's own) |
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "content/articles"
//!
//! [toc]
//! max_depth = 3
//!
//! [[writers]]
//! slug = "imamoto"
//! name = "今本"
//! avatar = "/images/writers/imamoto.jpg"
//! ```
//!
//! A missing config file is not an error: every field has a default.

mod content;
pub mod defaults;
mod error;
mod output;
mod site;

pub use content::{ContentConfig, TocConfig};
pub use error::ConfigError;
pub use output::{ExportConfig, RankingConfig};
pub use site::SiteSection;

use crate::{
    cli::{Cli, Commands},
    directory::{Category, Writer},
};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Heading levels the extractor can produce (`##` to `######`).
const HEADING_LEVELS: std::ops::RangeInclusive<u8> = 2..=6;

/// Root configuration structure representing tryline.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root; relative paths below are resolved against it
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Path the config was loaded from (may not exist)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub toc: TocConfig,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub export: ExportConfig,

    /// Writer directory, looked up by the `author` field of articles
    #[serde(default)]
    pub writers: Vec<Writer>,

    /// Known categories
    #[serde(default = "defaults::categories")]
    #[educe(Default = defaults::categories())]
    pub categories: Vec<Category>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))
    }

    /// Load `file` under `root`, falling back to defaults when it does not exist.
    pub fn load(root: &Path, file: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(file);

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .map_err(|err| ConfigError::Io(config_path.clone(), err))?;
            Self::from_toml(&content, &config_path)?
        } else {
            Self::default()
        };

        config.root = root.to_path_buf();
        config.config_path = config_path;
        Ok(config)
    }

    /// Absolute-or-root-relative article directory
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.content.dir)
    }

    /// Absolute-or-root-relative export directory
    pub fn export_dir(&self) -> PathBuf {
        self.root.join(&self.export.output)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(content) = &cli.content {
            self.content.dir = content.clone();
        }

        match &cli.command {
            Commands::Toc {
                min_depth,
                max_depth,
                ..
            } => {
                Self::update_option(&mut self.toc.min_depth, min_depth.as_ref());
                Self::update_option(&mut self.toc.max_depth, max_depth.as_ref());

                // A single bound from the command line drags the other one along
                match (min_depth, max_depth) {
                    (Some(min), None) => self.toc.max_depth = self.toc.max_depth.max(*min),
                    (None, Some(max)) => self.toc.min_depth = self.toc.min_depth.min(*max),
                    _ => {}
                }
            }
            Commands::Top { count, mode, .. } => {
                Self::update_option(&mut self.ranking.size, count.as_ref());
                Self::update_option(&mut self.ranking.mode, mode.as_ref());
            }
            Commands::Export { output } => {
                Self::update_option(&mut self.export.output, output.as_ref());
            }
            _ => {}
        }
    }

    /// Reject values the rest of the crate cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extension = self.content.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(ConfigError::invalid(
                "content.extension",
                "must not be empty",
            ));
        }

        if !HEADING_LEVELS.contains(&self.toc.min_depth) {
            return Err(ConfigError::invalid(
                "toc.min_depth",
                format!("must be between 2 and 6, got {}", self.toc.min_depth),
            ));
        }
        if !HEADING_LEVELS.contains(&self.toc.max_depth) {
            return Err(ConfigError::invalid(
                "toc.max_depth",
                format!("must be between 2 and 6, got {}", self.toc.max_depth),
            ));
        }
        if self.toc.min_depth > self.toc.max_depth {
            return Err(ConfigError::invalid(
                "toc.min_depth",
                "must not be greater than [toc.max_depth]",
            ));
        }
        if crate::toc::slugify(&self.toc.fallback).is_empty() {
            return Err(ConfigError::invalid(
                "toc.fallback",
                "must contain at least one letter or digit",
            ));
        }

        if self.ranking.size == 0 {
            return Err(ConfigError::invalid("ranking.size", "must be at least 1"));
        }

        if let Some(writer) = self.writers.iter().find(|w| w.slug.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "writers.slug",
                format!("writer `{}` has an empty slug", writer.name),
            ));
        }
        if let Some(category) = self.categories.iter().find(|c| c.slug.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "categories.slug",
                format!("category `{}` has an empty slug", category.label),
            ));
        }

        Ok(())
    }

    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::listing::RankingMode;
    use tempfile::TempDir;

    fn parse(toml: &str) -> SiteConfig {
        SiteConfig::from_toml(toml, Path::new("tryline.toml")).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
        assert!(parse("").validate().is_ok());
    }

    #[test]
    fn test_default_categories() {
        let config = SiteConfig::default();
        assert_eq!(config.categories.len(), 9);
        assert_eq!(config.categories[0].slug, "kanto-taikosen");
        assert_eq!(config.categories[8].label, "その他");
    }

    #[test]
    fn test_categories_replaced_by_file() {
        let config = parse(
            r#"
            [[categories]]
            slug = "super-rugby"
            label = "Super Rugby"
        "#,
        );
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].slug, "super-rugby");
    }

    #[test]
    fn test_writers_parsing() {
        let config = parse(
            r#"
            [[writers]]
            slug = "imamoto"
            name = "今本"
            bio = "関西出身。"
            avatar = "/images/writers/imamoto.jpg"

            [[writers.links]]
            label = "X"
            url = "https://x.com/imamoto"

            [[writers]]
            slug = "yamamoto"
            name = "山本 陽平"
        "#,
        );
        assert_eq!(config.writers.len(), 2);
        assert_eq!(config.writers[0].links.len(), 1);
        assert_eq!(config.writers[0].links[0].label, "X");
        assert_eq!(config.writers[1].bio, None);
        assert!(config.writers[1].links.is_empty());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = SiteConfig::from_toml("[build]\nminify = true\n", Path::new("tryline.toml"));
        assert!(matches!(result, Err(ConfigError::Toml(..))));
    }

    #[test]
    fn test_validate_depth_range() {
        let mut config = SiteConfig::default();
        config.toc.min_depth = 1;
        assert!(config.validate().is_err());

        config.toc.min_depth = 2;
        config.toc.max_depth = 7;
        assert!(config.validate().is_err());

        config.toc.min_depth = 4;
        config.toc.max_depth = 3;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("toc.min_depth"));
    }

    #[test]
    fn test_validate_fallback() {
        let mut config = SiteConfig::default();
        config.toc.fallback = "!!!".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_extension_and_size() {
        let mut config = SiteConfig::default();
        config.content.extension = ".".into();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.ranking.size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(dir.path(), Path::new("tryline.toml")).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.content_dir(), dir.path().join("content/articles"));
        assert_eq!(config.export_dir(), dir.path().join("public/_data"));
    }

    #[test]
    fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("tryline.toml"),
            "[content]\ndir = \"posts\"\nextension = \"md\"\n",
        )
        .unwrap();

        let config = SiteConfig::load(dir.path(), Path::new("tryline.toml")).unwrap();
        assert_eq!(config.content_dir(), dir.path().join("posts"));
        assert_eq!(config.content.extension, "md");
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tryline.toml"), "[content\n").unwrap();
        let result = SiteConfig::load(dir.path(), Path::new("tryline.toml"));
        assert!(matches!(result, Err(ConfigError::Toml(..))));
    }

    #[test]
    fn test_update_with_cli_overrides() {
        let cli = Cli::parse_from(["tryline", "-c", "posts", "top", "-n", "10", "--mode", "legacy"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        assert_eq!(config.content.dir, PathBuf::from("posts"));
        assert_eq!(config.ranking.size, 10);
        assert_eq!(config.ranking.mode, RankingMode::Legacy);
    }

    #[test]
    fn test_update_with_cli_toc_depth() {
        let cli = Cli::parse_from(["tryline", "toc", "intro", "--max-depth", "6"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        assert_eq!(config.toc.min_depth, 2);
        assert_eq!(config.toc.max_depth, 6);
    }

    #[test]
    fn test_update_with_cli_single_depth_bound_widens_range() {
        let cli = Cli::parse_from(["tryline", "toc", "intro", "--min-depth", "5"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);
        assert_eq!((config.toc.min_depth, config.toc.max_depth), (5, 5));
        assert!(config.validate().is_ok());

        let cli = Cli::parse_from(["tryline", "toc", "intro", "--max-depth", "2"]);
        let mut config = SiteConfig::default();
        config.toc.min_depth = 3;
        config.update_with_cli(&cli);
        assert_eq!((config.toc.min_depth, config.toc.max_depth), (2, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_update_with_cli_both_depth_bounds_kept_as_given() {
        let cli = Cli::parse_from(["tryline", "toc", "intro", "--min-depth", "5", "--max-depth", "3"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);
        assert_eq!((config.toc.min_depth, config.toc.max_depth), (5, 3));
        assert!(config.validate().is_err());
    }
}
