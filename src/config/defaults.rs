//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn title() -> String {
        "UNIVERSIS".into()
    }

    pub fn language() -> String {
        "ja".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content/articles".into()
    }

    pub fn extension() -> String {
        "mdx".into()
    }
}

// ============================================================================
// [toc] Section Defaults
// ============================================================================

pub mod toc {
    pub fn min_depth() -> u8 {
        2
    }

    pub fn max_depth() -> u8 {
        4
    }

    pub fn fallback() -> String {
        "heading".into()
    }
}

// ============================================================================
// [ranking] Section Defaults
// ============================================================================

pub mod ranking {
    use crate::listing::RankingMode;

    pub fn mode() -> RankingMode {
        RankingMode::Tiered
    }

    pub fn size() -> usize {
        5
    }
}

// ============================================================================
// [export] Section Defaults
// ============================================================================

pub mod export {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public/_data".into()
    }
}

// ============================================================================
// [[categories]] Defaults
// ============================================================================

pub fn categories() -> Vec<crate::directory::Category> {
    use crate::directory::Category;

    [
        ("kanto-taikosen", "関東大学対抗戦"),
        ("kanto-league", "関東大学リーグ戦"),
        ("kansai-league", "関西大学リーグ"),
        ("japan", "日本代表"),
        ("overseas", "海外"),
        ("sevens", "セブンズ"),
        ("women", "女子"),
        ("practice-game", "練習試合"),
        ("other", "その他"),
    ]
    .into_iter()
    .map(|(slug, label)| Category {
        slug: slug.into(),
        label: label.into(),
    })
    .collect()
}
