//! `[ranking]` and `[export]` section configuration.

use super::defaults;
use crate::listing::RankingMode;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[ranking]` section.
///
/// # Example
/// ```toml
/// [ranking]
/// mode = "legacy"
/// size = 10
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    /// How view counts and dates are combined into one score.
    #[serde(default = "defaults::ranking::mode")]
    #[educe(Default = defaults::ranking::mode())]
    pub mode: RankingMode,

    /// Number of entries in the ranking.
    #[serde(default = "defaults::ranking::size")]
    #[educe(Default = defaults::ranking::size())]
    pub size: usize,
}

/// `[export]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory receiving the JSON data files, relative to the project root.
    #[serde(default = "defaults::export::output")]
    #[educe(Default = defaults::export::output())]
    pub output: PathBuf,
}
