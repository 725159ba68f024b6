//! Document summaries and their AI-extracted attributes.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review lifecycle of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    #[serde(rename = "Pending Review")]
    PendingReview,
    Reviewed,
    Approved,
}

impl DocumentStatus {
    /// Human-readable label, as shown on the status badge.
    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::PendingReview => "Pending Review",
            DocumentStatus::Reviewed => "Reviewed",
            DocumentStatus::Approved => "Approved",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentStatus {
    type Err = crate::ReviewError;

    /// Accepts the display label or a kebab/compact form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|&c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "pendingreview" | "pending" => Ok(DocumentStatus::PendingReview),
            "reviewed" => Ok(DocumentStatus::Reviewed),
            "approved" => Ok(DocumentStatus::Approved),
            _ => Err(crate::ReviewError::InvalidStatus(s.to_string())),
        }
    }
}

/// A contract in the review queue.
///
/// `reviewed_by` is expected only once the document has left
/// `PendingReview`; see [`Document::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub uploaded_date: NaiveDate,
    pub attribute_count: u32,
    /// Overall extraction confidence, 0–100.
    pub confidence: u8,
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

impl Document {
    /// Whether `reviewed_by` agrees with `status`.
    ///
    /// Source records are not corrected when this is false.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            DocumentStatus::PendingReview => self.reviewed_by.is_none(),
            DocumentStatus::Reviewed | DocumentStatus::Approved => true,
        }
    }
}

/// Coarse reliability tier of an extraction.
///
/// The bucket is authoritative input and is stored next to the numeric
/// score; it is never recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
}

impl ConfidenceBucket {
    /// Bucket the sample data conventionally pairs with `score`
    /// (High ≥ 85, Medium 70–84, Low < 70). Diagnostic only.
    pub fn expected_for_score(score: u8) -> Self {
        match score {
            85.. => ConfidenceBucket::High,
            70..=84 => ConfidenceBucket::Medium,
            _ => ConfidenceBucket::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceBucket::High => "High",
            ConfidenceBucket::Medium => "Medium",
            ConfidenceBucket::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single extracted field of one document, tied to a source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub name: String,
    pub confidence: ConfidenceBucket,
    /// Fine-grained confidence, 0–100.
    pub confidence_score: u8,
    pub section: String,
    pub category: String,
    pub extracted_value: String,
    /// Correction shipped with the source record. Reviewer edits live in
    /// the [`CorrectionOverlay`](crate::CorrectionOverlay), not here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_value: Option<String>,
    /// 1-based page the excerpt was taken from.
    pub page: NonZeroU32,
    pub highlighted_text: String,
}

impl Attribute {
    /// Whether the stored bucket differs from the score convention.
    pub fn bucket_mismatch(&self) -> bool {
        ConfidenceBucket::expected_for_score(self.confidence_score) != self.confidence
    }
}
