use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ToolError};

/// Source → canonical pairs shipped with the tool, in significant order.
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("Site", "Site"),
    ("Domain", "Site"),
    ("Link origin", "Site"),
    ("Market", "Market"),
    ("DA", "DA"),
    ("DR", "DR"),
    ("Traffic", "Traffic"),
    ("Price", "Price"),
    ("Price €", "Price"),
    ("Link costs", "Price"),
    ("Status", "Status"),
    ("LL approved", "Status"),
    ("Publish", "Publish"),
    ("Anchor Text", "Anchor Text"),
    ("Link text", "Anchor Text"),
    ("Target URL", "Target URL"),
    ("Link target", "Target URL"),
    ("Live URL", "Live URL / Published Link"),
    ("Published Link", "Live URL / Published Link"),
    ("Project", "Project"),
    ("Date", "Published Date"),
];

/// One rename rule: a source header matched exactly (case-sensitive) and the
/// canonical header it becomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub source: String,
    pub canonical: String,
}

/// Ordered, immutable many-to-one mapping from source column names to
/// canonical column names.
///
/// Each source name appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: Vec<MappingEntry>,
}

impl ColumnMapping {
    /// Builds a mapping from `(source, canonical)` pairs.
    pub fn new<I, S, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(source, canonical)| MappingEntry {
                source: source.into(),
                canonical: canonical.into(),
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<MappingEntry>) -> Result<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(entries.len());
        for entry in &entries {
            if entry.source.is_empty() || entry.canonical.is_empty() {
                return Err(ToolError::InvalidMapping(
                    "source and canonical names must not be empty".into(),
                ));
            }
            if seen.contains(&entry.source.as_str()) {
                return Err(ToolError::InvalidMapping(format!(
                    "duplicate source column '{}'",
                    entry.source
                )));
            }
            seen.push(&entry.source);
        }
        Ok(Self { entries })
    }

    /// Loads a mapping from a JSON array of `{"source", "canonical"}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let entries: Vec<MappingEntry> = serde_json::from_str(&data)?;
        debug!(entry_count = entries.len(), path = %path.display(), "loaded column mapping");
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Canonical name for a source header, if the header is mapped.
    pub fn canonical_for(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.canonical.as_str())
    }

    /// Distinct canonical names in order of first appearance.
    pub fn canonical_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !columns.contains(&entry.canonical.as_str()) {
                columns.push(&entry.canonical);
            }
        }
        columns
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(source, canonical)| MappingEntry {
                    source: (*source).to_string(),
                    canonical: (*canonical).to_string(),
                })
                .collect(),
        }
    }
}
