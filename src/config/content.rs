//! `[content]` and `[toc]` section configuration.

use super::defaults;
use crate::toc::DepthRange;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section - where article files live.
///
/// # Example
/// ```toml
/// [content]
/// dir = "content/articles"
/// extension = "mdx"
/// recursive = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Article directory, relative to the project root.
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// File extension of article files, without the dot. Matched case-insensitively.
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,

    /// Also pick up articles in subdirectories.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub recursive: bool,
}

/// `[toc]` section - table of contents extraction.
///
/// # Example
/// ```toml
/// [toc]
/// min_depth = 2
/// max_depth = 3
/// fallback = "section"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TocConfig {
    /// Shallowest heading level included (`##` is 2).
    #[serde(default = "defaults::toc::min_depth")]
    #[educe(Default = defaults::toc::min_depth())]
    pub min_depth: u8,

    /// Deepest heading level included.
    #[serde(default = "defaults::toc::max_depth")]
    #[educe(Default = defaults::toc::max_depth())]
    pub max_depth: u8,

    /// Anchor used when a heading slugifies to nothing.
    #[serde(default = "defaults::toc::fallback")]
    #[educe(Default = defaults::toc::fallback())]
    pub fallback: String,
}

impl TocConfig {
    pub const fn depth_range(&self) -> DepthRange {
        DepthRange::new(self.min_depth, self.max_depth)
    }
}
