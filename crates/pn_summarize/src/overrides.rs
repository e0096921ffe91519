use std::collections::HashMap;

use pn_core::ArticleSummary;

/// Curated summaries keyed by exact article title. A hit bypasses every
/// model call. Passed into the pipeline explicitly so tests and deploys
/// can inject their own table.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, ArticleSummary>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, title: impl Into<String>, summary: ArticleSummary) {
        self.entries.insert(title.into(), summary);
    }

    pub fn get(&self, title: &str) -> Option<&ArticleSummary> {
        self.entries.get(title)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
