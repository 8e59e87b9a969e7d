use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Header line of the text summary
pub const SUMMARY_HEADER: &str = "=== Tag Counts ===";

/// Per-category line counts of a run (sorted by category name)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one line for a category
    pub fn record(&mut self, category: &str) {
        *self.counts.entry(category.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for a category (0 when never seen)
    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Categories and counts in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// `CATEGORY: count` lines in lexicographic order, one per line
    pub fn counts_text(&self) -> String {
        self.iter()
            .map(|(category, count)| format!("{}: {}\n", category, count))
            .collect()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SUMMARY_HEADER)?;
        f.write_str(&self.counts_text())
    }
}
