//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::listing::RankingMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Article listings, tables of contents and rankings for the site content
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (default: tryline.toml)
    #[arg(short = 'C', long, default_value = "tryline.toml")]
    pub config: PathBuf,

    /// Article directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by listing commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only articles in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Only articles mentioning this team (case-insensitive)
    #[arg(long)]
    pub team: Option<String>,

    /// Only articles by this author slug (case-insensitive)
    #[arg(long)]
    pub author: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List articles, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Show at most this many articles
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one article's metadata and table of contents
    Show {
        /// Article slug (case-insensitive)
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the table of contents of an article
    Toc {
        /// Article slug (case-insensitive)
        slug: String,

        /// Shallowest heading level to include (raises max depth if needed)
        #[arg(long)]
        min_depth: Option<u8>,

        /// Deepest heading level to include (lowers min depth if needed)
        #[arg(long)]
        max_depth: Option<u8>,
    },

    /// Print the article ranking
    Top {
        /// Number of entries
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Score combination mode
        #[arg(long, value_enum)]
        mode: Option<RankingMode>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every team mentioned by an article
    Teams,

    /// List the writers
    Writers,

    /// Show a writer and their articles
    Writer {
        /// Writer slug (case-insensitive)
        slug: String,
    },

    /// List the categories
    Categories,

    /// Show the articles of a category
    Category {
        /// Category slug
        slug: String,
    },

    /// Write JSON data files for the page renderer
    Export {
        /// Output directory (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
