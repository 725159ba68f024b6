//! Attribute review model for a single document.
//!
//! A [`ReviewSession`] owns the document's attribute list, the attribute
//! search, the focused attribute, and the [`CorrectionOverlay`]. Focus
//! survives search changes: the detail panel keeps showing the focused
//! attribute even when the search hides its row, and
//! [`ReviewSession::focus_is_visible`] tells the two apart.

use std::fmt;

use tracing::{debug, info, warn};

use crate::events::{DocumentViewer, HighlightTarget, Notifier, ReviewEvent};
use crate::filter::contains_ci;
use crate::{Attribute, ConfidenceBucket, CorrectionOverlay, Document};

/// Attributes whose name or section contains `query`, case-insensitively.
///
/// Correction text is never searched.
pub fn filter_attributes<'a>(attributes: &'a [Attribute], query: &str) -> Vec<&'a Attribute> {
    let needle = query.to_lowercase();
    attributes
        .iter()
        .filter(|a| contains_ci(&a.name, &needle) || contains_ci(&a.section, &needle))
        .collect()
}

/// The attribute with id `focused`, else the first attribute, else `None`.
pub fn selected_attribute<'a>(
    attributes: &'a [Attribute],
    focused: Option<&str>,
) -> Option<&'a Attribute> {
    focused
        .and_then(|id| attributes.iter().find(|a| a.id == id))
        .or_else(|| attributes.first())
}

/// Number of `Low` bucket attributes.
pub fn low_confidence_count(attributes: &[Attribute]) -> usize {
    attributes
        .iter()
        .filter(|a| a.confidence == ConfidenceBucket::Low)
        .count()
}

/// One row of the attribute list with the overlay applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeView<'a> {
    pub attribute: &'a Attribute,
    /// Overlay value if present, else the correction shipped with the source.
    pub corrected_value: Option<&'a str>,
    pub focused: bool,
}

impl AttributeView<'_> {
    /// Non-empty correction, else the extracted value.
    pub fn effective_value(&self) -> &str {
        self.corrected_value
            .filter(|v| !v.is_empty())
            .unwrap_or(&self.attribute.extracted_value)
    }
}

/// A correction that actually changes an extracted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionDiff {
    pub attribute_id: String,
    pub name: String,
    pub extracted: String,
    pub corrected: String,
}

/// Header line of the review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub document_id: String,
    pub attribute_count: usize,
    pub low_confidence: usize,
}

impl fmt::Display for ReviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document ID: {} • {} attributes • {} low confidence",
            self.document_id, self.attribute_count, self.low_confidence
        )
    }
}

pub struct ReviewSession {
    document: Document,
    attributes: Vec<Attribute>,
    search: String,
    focused: Option<String>,
    overlay: CorrectionOverlay,
}

impl ReviewSession {
    /// Open a review of `document` and show its default focus in `viewer`.
    pub fn open(
        document: Document,
        attributes: Vec<Attribute>,
        viewer: &mut dyn DocumentViewer,
    ) -> Self {
        let session = Self {
            document,
            attributes,
            search: String::new(),
            focused: None,
            overlay: CorrectionOverlay::new(),
        };
        info!(
            document_id = %session.document.id,
            attributes = session.attributes.len(),
            low_confidence = session.low_confidence_count(),
            "review opened"
        );
        if let Some(target) = session.highlight() {
            viewer.show(&target);
        }
        session
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The full attribute list, unaffected by search.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    // ── Search ──

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Change the attribute search. Focus is left untouched.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        debug!(
            query = %self.search,
            visible = self.visible().len(),
            "attribute search changed"
        );
    }

    pub fn visible(&self) -> Vec<&Attribute> {
        filter_attributes(&self.attributes, &self.search)
    }

    /// Visible rows with corrections and focus applied.
    pub fn view(&self) -> Vec<AttributeView<'_>> {
        let selected = self.selected().map(|a| a.id.as_str());
        self.visible()
            .into_iter()
            .map(|attribute| AttributeView {
                attribute,
                corrected_value: self
                    .overlay
                    .get(&attribute.id)
                    .or(attribute.corrected_value.as_deref()),
                focused: selected == Some(attribute.id.as_str()),
            })
            .collect()
    }

    // ── Focus ──

    /// Focus `attribute_id` and send its location to `viewer`.
    ///
    /// Unknown ids are kept; selection then falls back to the first
    /// attribute.
    pub fn focus(&mut self, attribute_id: &str, viewer: &mut dyn DocumentViewer) {
        if !self.attributes.iter().any(|a| a.id == attribute_id) {
            warn!(
                document_id = %self.document.id,
                attribute_id,
                "focus on unknown attribute, falling back to first"
            );
        }
        self.focused = Some(attribute_id.to_string());
        if let Some(target) = self.highlight() {
            debug!(
                attribute_id = %target.attribute_id,
                page = target.page.get(),
                "focus changed"
            );
            viewer.show(&target);
        }
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Attribute shown in the detail panel.
    pub fn selected(&self) -> Option<&Attribute> {
        selected_attribute(&self.attributes, self.focused.as_deref())
    }

    /// Whether the selected attribute is in the filtered list.
    pub fn focus_is_visible(&self) -> bool {
        match self.selected() {
            Some(sel) => self.visible().iter().any(|a| a.id == sel.id),
            None => false,
        }
    }

    /// Viewer target for the selected attribute.
    pub fn highlight(&self) -> Option<HighlightTarget> {
        self.selected().map(|a| HighlightTarget {
            document_id: self.document.id.clone(),
            attribute_id: a.id.clone(),
            page: a.page,
            section: a.section.clone(),
            highlighted_text: a.highlighted_text.clone(),
        })
    }

    // ── Corrections ──

    /// Record `value` for `attribute_id` in the overlay, verbatim.
    pub fn set_correction(&mut self, attribute_id: &str, value: impl Into<String>) {
        let value = value.into();
        debug!(attribute_id, len = value.len(), "correction set");
        self.overlay.set(attribute_id, value);
    }

    pub fn correction(&self, attribute_id: &str) -> Option<&str> {
        self.overlay.get(attribute_id)
    }

    pub fn overlay(&self) -> &CorrectionOverlay {
        &self.overlay
    }

    /// Overlay entries that change an extracted value, in attribute order.
    pub fn corrections(&self) -> Vec<CorrectionDiff> {
        self.attributes
            .iter()
            .filter_map(|a| {
                let corrected = self.overlay.display_value(&a.id)?;
                (corrected != a.extracted_value).then(|| CorrectionDiff {
                    attribute_id: a.id.clone(),
                    name: a.name.clone(),
                    extracted: a.extracted_value.clone(),
                    corrected: corrected.to_string(),
                })
            })
            .collect()
    }

    // ── Counts ──

    pub fn low_confidence_count(&self) -> usize {
        low_confidence_count(&self.attributes)
    }

    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary {
            document_id: self.document.id.clone(),
            attribute_count: self.attributes.len(),
            low_confidence: self.low_confidence_count(),
        }
    }

    // ── Actions ──

    /// Acknowledge the extracted values. Nothing is modified or stored.
    pub fn accept_all(&self, notifier: &mut dyn Notifier) {
        info!(document_id = %self.document.id, "extracted values accepted");
        notifier.notify(ReviewEvent::ValuesAccepted);
    }

    /// Acknowledge the review. The overlay is not persisted.
    pub fn save_review(&self, notifier: &mut dyn Notifier) {
        info!(
            document_id = %self.document.id,
            corrections = self.corrections().len(),
            "review saved"
        );
        notifier.notify(ReviewEvent::ReviewSaved);
    }
}
