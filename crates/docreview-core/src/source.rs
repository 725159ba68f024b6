use crate::{Attribute, Document};

/// Read-only provider of documents and their extracted attributes.
///
/// Implementations live in `docreview-store`; the review model only ever
/// reads through this trait.
pub trait DocumentSource {
    /// Every document, in display order.
    fn documents(&self) -> &[Document];

    /// Attributes of `document_id`, empty when the document has none or is
    /// unknown.
    fn attributes(&self, document_id: &str) -> &[Attribute];

    fn document(&self, document_id: &str) -> Option<&Document> {
        self.documents().iter().find(|d| d.id == document_id)
    }
}
