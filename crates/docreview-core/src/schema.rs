//! Arrow schema for the document list table.

use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, StringArray, UInt8Array, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::Datelike;

use crate::{Document, ReviewError};

/// Days from 0001-01-01 to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Schema of one row per document, as rendered by the list view.
pub fn document_list_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("title", DataType::Utf8, false),
        Field::new("uploaded", DataType::Date32, false),
        Field::new("attributes", DataType::UInt32, false),
        Field::new("confidence", DataType::UInt8, false),
        Field::new("status", DataType::Utf8, false),
        Field::new("reviewed_by", DataType::Utf8, true),
    ])
}

/// Build a single [`RecordBatch`] from `documents`, keeping their order.
pub fn documents_to_batch<'a, I>(documents: I) -> Result<RecordBatch, ReviewError>
where
    I: IntoIterator<Item = &'a Document>,
{
    let docs: Vec<&Document> = documents.into_iter().collect();

    let ids = StringArray::from_iter_values(docs.iter().map(|d| d.id.as_str()));
    let titles = StringArray::from_iter_values(docs.iter().map(|d| d.title.as_str()));
    let uploaded = Date32Array::from_iter_values(
        docs.iter()
            .map(|d| d.uploaded_date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE),
    );
    let counts = UInt32Array::from_iter_values(docs.iter().map(|d| d.attribute_count));
    let confidence = UInt8Array::from_iter_values(docs.iter().map(|d| d.confidence));
    let status = StringArray::from_iter_values(docs.iter().map(|d| d.status.label()));
    let reviewed_by: StringArray = docs.iter().map(|d| d.reviewed_by.as_deref()).collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(ids),
        Arc::new(titles),
        Arc::new(uploaded),
        Arc::new(counts),
        Arc::new(confidence),
        Arc::new(status),
        Arc::new(reviewed_by),
    ];
    Ok(RecordBatch::try_new(
        Arc::new(document_list_schema()),
        columns,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use arrow::array::Array;

    #[test]
    fn document_list_schema_has_expected_fields() {
        let schema = document_list_schema();
        assert_eq!(schema.fields().len(), 7);
        assert!(schema.field_with_name("reviewed_by").unwrap().is_nullable());
        assert!(!schema.field_with_name("status").unwrap().is_nullable());
    }

    #[test]
    fn seeded_documents_to_batch() {
        let docs = seed::documents();
        let batch = documents_to_batch(&docs).unwrap();
        assert_eq!(batch.num_rows(), 5);
        assert_eq!(batch.num_columns(), 7);

        let status = batch
            .column_by_name("status")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(status.value(0), "Pending Review");
        assert_eq!(status.value(2), "Approved");

        let reviewed_by = batch.column_by_name("reviewed_by").unwrap();
        assert!(reviewed_by.is_null(0));
        assert!(!reviewed_by.is_null(1));
    }

    #[test]
    fn uploaded_date_is_days_since_epoch() {
        let docs = seed::documents();
        let batch = documents_to_batch(&docs[..1]).unwrap();
        let uploaded = batch
            .column_by_name("uploaded")
            .unwrap()
            .as_any()
            .downcast_ref::<Date32Array>()
            .unwrap();
        // 2024-01-15
        assert_eq!(uploaded.value(0), 19_737);
    }

    #[test]
    fn empty_input_gives_empty_batch() {
        let batch = documents_to_batch(std::iter::empty()).unwrap();
        assert_eq!(batch.num_rows(), 0);
    }
}
