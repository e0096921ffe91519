use std::fs;
use std::path::PathBuf;

use pn_core::Result;

/// The saved interest list: one JSON file holding an array of tags,
/// read on load and rewritten on every change. A missing file is an
/// empty list. No versioning, no migration.
#[derive(Debug, Clone)]
pub struct InterestStore {
    path: PathBuf,
}

impl InterestStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let tags: Vec<String> = serde_json::from_str(&raw)?;
        Ok(normalize(tags))
    }

    pub fn save(&self, tags: &[String]) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(tags)?)?;
        Ok(())
    }

    /// Add a tag at the end of the list; a duplicate is a no-op. Returns
    /// the updated list.
    pub fn add(&self, tag: &str) -> Result<Vec<String>> {
        let tag = tag.trim();
        let mut tags = self.load()?;
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
            self.save(&tags)?;
        }
        Ok(tags)
    }

    /// Remove a tag; unknown tags are a no-op. Returns the updated list.
    pub fn remove(&self, tag: &str) -> Result<Vec<String>> {
        let tag = tag.trim();
        let mut tags = self.load()?;
        tags.retain(|t| t != tag);
        self.save(&tags)?;
        Ok(tags)
    }
}

/// Tags are trimmed, non-empty, deduplicated, order-preserving.
fn normalize(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !seen.iter().any(|s| s == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}
