//! In-memory document source.

use std::collections::{HashMap, HashSet};

use docreview_core::{Attribute, Document, DocumentSource, seed};
use tracing::{info, warn};

use crate::StoreError;

/// Documents and attributes held in memory, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<Document>,
    attributes: HashMap<String, Vec<Attribute>>,
}

impl InMemorySource {
    /// Build a source, rejecting duplicate document ids and attribute lists
    /// keyed by a document that does not exist.
    pub fn new(
        documents: Vec<Document>,
        attributes: HashMap<String, Vec<Attribute>>,
    ) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(StoreError::DuplicateDocument(doc.id.clone()));
            }
            if !doc.is_consistent() {
                warn!(
                    document_id = %doc.id,
                    status = %doc.status,
                    "pending document carries a reviewer"
                );
            }
        }
        if let Some(orphan) = attributes.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(StoreError::OrphanAttributes(orphan.clone()));
        }
        for (doc_id, attrs) in &attributes {
            for attr in attrs.iter().filter(|a| a.bucket_mismatch()) {
                warn!(
                    document_id = %doc_id,
                    attribute_id = %attr.id,
                    bucket = %attr.confidence,
                    score = attr.confidence_score,
                    "confidence bucket disagrees with score; keeping bucket"
                );
            }
        }

        info!(
            documents = documents.len(),
            with_attributes = attributes.len(),
            "document source ready"
        );
        Ok(Self {
            documents,
            attributes,
        })
    }

    /// The built-in sample dataset.
    pub fn seeded() -> Self {
        Self {
            documents: seed::documents(),
            attributes: seed::attributes(),
        }
    }
}

impl DocumentSource for InMemorySource {
    fn documents(&self) -> &[Document] {
        &self.documents
    }

    fn attributes(&self, document_id: &str) -> &[Attribute] {
        self.attributes
            .get(document_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docreview_core::DocumentStatus;

    #[test]
    fn seeded_source_lookups() {
        let source = InMemorySource::seeded();
        assert_eq!(source.documents().len(), 5);
        assert_eq!(source.attributes("1").len(), 10);
        assert!(source.attributes("2").is_empty());
        assert!(source.attributes("missing").is_empty());
        assert_eq!(
            source.document("3").map(|d| d.status),
            Some(DocumentStatus::Approved)
        );
        assert!(source.document("6").is_none());
    }

    #[test]
    fn seeded_data_passes_validation() {
        let source = InMemorySource::new(seed::documents(), seed::attributes()).unwrap();
        assert_eq!(source.documents().len(), 5);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut docs = seed::documents();
        docs.push(docs[0].clone());
        let err = InMemorySource::new(docs, HashMap::new()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateDocument(id) if id == "1"));
    }

    #[test]
    fn rejects_orphan_attributes() {
        let mut attrs = seed::attributes();
        let acme = attrs["1"].clone();
        attrs.insert("77".into(), acme);
        let err = InMemorySource::new(seed::documents(), attrs).unwrap_err();
        assert!(matches!(err, StoreError::OrphanAttributes(id) if id == "77"));
    }

    #[test]
    fn inconsistent_records_are_kept_verbatim() {
        let mut docs = seed::documents();
        docs[0].reviewed_by = Some("Sarah Johnson".into());
        let source = InMemorySource::new(docs, HashMap::new()).unwrap();
        assert_eq!(
            source.document("1").unwrap().reviewed_by.as_deref(),
            Some("Sarah Johnson")
        );
    }
}
