//! Document list filtering and the summary-header counts.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::{Document, DocumentStatus, ReviewError};

/// Status predicate of the document list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DocumentStatus),
}

impl StatusFilter {
    pub fn matches(self, status: DocumentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }
}

impl From<DocumentStatus> for StatusFilter {
    fn from(status: DocumentStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All Status"),
            StatusFilter::Only(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("all status") {
            return Ok(StatusFilter::All);
        }
        s.parse::<DocumentStatus>().map(StatusFilter::Only)
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Documents passing both the title search and the status filter, in their
/// original order.
pub fn filter_documents<'a>(
    documents: &'a [Document],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Document> {
    let needle = query.to_lowercase();
    documents
        .iter()
        .filter(|d| status.matches(d.status) && contains_ci(&d.title, &needle))
        .collect()
}

/// Summary-header counts, always taken over the full document set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub total: usize,
    pub pending_review: usize,
    pub reviewed: usize,
    /// Approved documents.
    pub completed: usize,
}

impl DocumentStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let count = |s: DocumentStatus| documents.iter().filter(|d| d.status == s).count();
        Self {
            total: documents.len(),
            pending_review: count(DocumentStatus::PendingReview),
            reviewed: count(DocumentStatus::Reviewed),
            completed: count(DocumentStatus::Approved),
        }
    }
}

/// State of the document list view: the collection plus its two filters.
pub struct Dashboard<'a> {
    documents: &'a [Document],
    query: String,
    status: StatusFilter,
}

impl<'a> Dashboard<'a> {
    pub fn new(documents: &'a [Document]) -> Self {
        Self {
            documents,
            query: String::new(),
            status: StatusFilter::All,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "document search changed");
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        debug!(status = %status, "document status filter changed");
    }

    pub fn visible(&self) -> Vec<&'a Document> {
        filter_documents(self.documents, &self.query, self.status)
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_documents(self.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;

    fn ids(docs: &[&Document]) -> Vec<String> {
        docs.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn approved_filter_returns_vendor_agreement() {
        let docs = seed::documents();
        let out = filter_documents(&docs, "", DocumentStatus::Approved.into());
        assert_eq!(ids(&out), vec!["3"]);
    }

    #[test]
    fn empty_filters_return_everything_in_order() {
        let docs = seed::documents();
        let out = filter_documents(&docs, "", StatusFilter::All);
        assert_eq!(ids(&out), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn title_search_is_case_insensitive() {
        let docs = seed::documents();
        assert_eq!(ids(&filter_documents(&docs, "ACME", StatusFilter::All)), vec!["1"]);
        assert_eq!(
            ids(&filter_documents(&docs, "agreement", StatusFilter::All)),
            vec!["1", "3", "4", "5"]
        );
    }

    #[test]
    fn search_and_status_are_anded() {
        let docs = seed::documents();
        let out = filter_documents(&docs, "agreement", DocumentStatus::PendingReview.into());
        assert_eq!(ids(&out), vec!["1", "4", "5"]);
        let none = filter_documents(&docs, "employment", DocumentStatus::Approved.into());
        assert!(none.is_empty());
    }

    #[test]
    fn search_does_not_look_at_reviewer() {
        let docs = seed::documents();
        assert!(filter_documents(&docs, "Sarah", StatusFilter::All).is_empty());
    }

    #[test]
    fn seeded_stats() {
        let stats = DocumentStats::from_documents(&seed::documents());
        assert_eq!(
            stats,
            DocumentStats {
                total: 5,
                pending_review: 3,
                reviewed: 1,
                completed: 1,
            }
        );
    }

    #[test]
    fn dashboard_stats_ignore_filters() {
        let docs = seed::documents();
        let mut dash = Dashboard::new(&docs);
        assert_eq!(dash.query(), "");
        assert_eq!(dash.status(), StatusFilter::All);
        let before = dash.stats();
        dash.set_query("lease");
        dash.set_status(DocumentStatus::Approved.into());
        assert_eq!(dash.query(), "lease");
        assert_eq!(dash.status(), StatusFilter::Only(DocumentStatus::Approved));
        assert!(dash.visible().is_empty());
        assert_eq!(dash.stats(), before);
    }

    #[test]
    fn status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Pending Review".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(DocumentStatus::PendingReview)
        );
        assert_eq!("All Status".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!(matches!(
            "draft".parse::<StatusFilter>(),
            Err(ReviewError::InvalidStatus(s)) if s == "draft"
        ));
    }

    #[test]
    fn status_filter_display_parses_back() {
        let filters = [
            StatusFilter::All,
            DocumentStatus::PendingReview.into(),
            DocumentStatus::Reviewed.into(),
            DocumentStatus::Approved.into(),
        ];
        for filter in filters {
            assert_eq!(filter.to_string().parse::<StatusFilter>().unwrap(), filter);
        }
    }

    fn arb_status() -> impl Strategy<Value = DocumentStatus> {
        prop_oneof![
            Just(DocumentStatus::PendingReview),
            Just(DocumentStatus::Reviewed),
            Just(DocumentStatus::Approved),
        ]
    }

    fn arb_filter() -> impl Strategy<Value = StatusFilter> {
        prop_oneof![Just(StatusFilter::All), arb_status().prop_map(StatusFilter::Only)]
    }

    fn arb_documents() -> impl Strategy<Value = Vec<Document>> {
        prop::collection::vec(("[A-Za-z ]{0,16}", arb_status()), 0..20).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, status))| Document {
                    id: i.to_string(),
                    title,
                    uploaded_date: chrono::NaiveDate::default(),
                    attribute_count: 0,
                    confidence: 50,
                    status,
                    reviewed_by: None,
                })
                .collect()
        })
    }

    proptest! {
        /// Property: results are a stable sub-order of the input and satisfy both predicates
        #[test]
        fn filter_is_ordered_subset(
            docs in arb_documents(),
            query in "[A-Za-z]{0,3}",
            status in arb_filter(),
        ) {
            let out = filter_documents(&docs, &query, status);
            let positions: Vec<usize> = out
                .iter()
                .map(|d| docs.iter().position(|x| x.id == d.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for d in &out {
                prop_assert!(status.matches(d.status));
                prop_assert!(d.title.to_lowercase().contains(&query.to_lowercase()));
            }
            let expected = docs
                .iter()
                .filter(|d| status.matches(d.status)
                    && d.title.to_lowercase().contains(&query.to_lowercase()))
                .count();
            prop_assert_eq!(out.len(), expected);
        }

        /// Property: header counts do not depend on the active filters
        #[test]
        fn stats_invariant_under_filters(
            docs in arb_documents(),
            query in "[A-Za-z]{0,3}",
            status in arb_filter(),
        ) {
            let mut dash = Dashboard::new(&docs);
            let before = dash.stats();
            dash.set_query(query);
            dash.set_status(status);
            prop_assert_eq!(dash.stats(), before);
            prop_assert_eq!(before.total, docs.len());
        }
    }
}
