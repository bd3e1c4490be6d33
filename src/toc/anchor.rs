//! Unique anchor assignment within one heading list.

use std::collections::{HashMap, HashSet};

/// Hands out anchors left to right.
///
/// The n-th request for the same base gets `base-n` (n ≥ 2); the first one
/// keeps `base`. When a suffixed anchor was already handed out (a heading
/// literally titled `Intro 2` before the second `Intro`), the suffix keeps
/// counting up until a free one is found.
#[derive(Debug, Default)]
pub struct AnchorSet {
    occurrences: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a unique anchor derived from `base`.
    pub fn claim(&mut self, base: &str) -> String {
        let count = self.occurrences.entry(base.to_owned()).or_insert(0);
        *count += 1;

        let mut anchor = if *count == 1 {
            base.to_owned()
        } else {
            format!("{base}-{count}")
        };
        while self.issued.contains(&anchor) {
            *count += 1;
            anchor = format!("{base}-{count}");
        }

        self.issued.insert(anchor.clone());
        anchor
    }
}
