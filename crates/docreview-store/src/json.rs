//! Read-only JSON dataset source.
//!
//! ```json
//! { "documents": [ { "id": "1", "title": "...", "uploaded_date": "2024-01-15",
//!                    "attribute_count": 10, "confidence": 92,
//!                    "status": "Pending Review" } ],
//!   "attributes": { "1": [ { "id": "attr-1", "name": "...", ... } ] } }
//! ```

use std::collections::HashMap;
use std::path::Path;

use docreview_core::{Attribute, Document, DocumentSource};
use serde::Deserialize;
use tracing::info;

use crate::{InMemorySource, StoreError};

#[derive(Deserialize)]
struct Dataset {
    documents: Vec<Document>,
    #[serde(default)]
    attributes: HashMap<String, Vec<Attribute>>,
}

/// Document source loaded once from a JSON file and never written back.
#[derive(Debug, Clone)]
pub struct JsonSource {
    inner: InMemorySource,
}

impl JsonSource {
    /// Load and validate the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::DatasetNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let source = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            documents = source.documents().len(),
            "loaded dataset"
        );
        Ok(source)
    }

    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let dataset: Dataset = serde_json::from_str(text)?;
        let inner = InMemorySource::new(dataset.documents, dataset.attributes)?;
        Ok(Self { inner })
    }
}

impl DocumentSource for JsonSource {
    fn documents(&self) -> &[Document] {
        self.inner.documents()
    }

    fn attributes(&self, document_id: &str) -> &[Attribute] {
        self.inner.attributes(document_id)
    }
}
