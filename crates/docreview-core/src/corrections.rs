//! Reviewer corrections, kept as an overlay beside the extracted values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute id → reviewer-entered value.
///
/// Extracted values are never overwritten; this map is the only place a
/// correction lives. An empty string is stored as given: it displays as "no
/// correction" but is still distinguishable from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectionOverlay {
    entries: BTreeMap<String, String>,
}

impl CorrectionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a correction verbatim. Any string is accepted.
    pub fn set(&mut self, attribute_id: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(attribute_id.into(), value.into());
    }

    /// Raw stored value, including empty strings.
    pub fn get(&self, attribute_id: &str) -> Option<&str> {
        self.entries.get(attribute_id).map(String::as_str)
    }

    /// Stored value for display: empty entries read as no correction.
    pub fn display_value(&self, attribute_id: &str) -> Option<&str> {
        self.get(attribute_id).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, attribute_id: &str) -> bool {
        self.entries.contains_key(attribute_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
