//! Built-in sample dataset: five contracts, with extracted attributes for
//! the Acme service agreement.

use std::collections::HashMap;
use std::num::NonZeroU32;

use chrono::NaiveDate;

use crate::{Attribute, ConfidenceBucket, Document, DocumentStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn document(
    id: &str,
    title: &str,
    uploaded: NaiveDate,
    attribute_count: u32,
    confidence: u8,
    status: DocumentStatus,
    reviewed_by: Option<&str>,
) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        uploaded_date: uploaded,
        attribute_count,
        confidence,
        status,
        reviewed_by: reviewed_by.map(String::from),
    }
}

/// The seeded document list, newest upload first.
pub fn documents() -> Vec<Document> {
    use DocumentStatus::*;
    vec![
        document(
            "1",
            "Service Agreement – Acme Corp.pdf",
            date(2024, 1, 15),
            10,
            92,
            PendingReview,
            None,
        ),
        document(
            "2",
            "Employment Contract – John Doe.pdf",
            date(2024, 1, 14),
            15,
            88,
            Reviewed,
            Some("Sarah Johnson"),
        ),
        document(
            "3",
            "Vendor Agreement – Tech Solutions.pdf",
            date(2024, 1, 13),
            12,
            95,
            Approved,
            Some("Mike Chen"),
        ),
        document(
            "4",
            "Lease Agreement – Office Space.pdf",
            date(2024, 1, 12),
            8,
            85,
            PendingReview,
            None,
        ),
        document(
            "5",
            "Non-Disclosure Agreement – Partner Co.pdf",
            date(2024, 1, 11),
            6,
            98,
            PendingReview,
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn attribute(
    id: &str,
    name: &str,
    confidence: ConfidenceBucket,
    confidence_score: u8,
    section: &str,
    category: &str,
    extracted_value: &str,
    page: u32,
    highlighted_text: &str,
) -> Attribute {
    Attribute {
        id: id.to_string(),
        name: name.to_string(),
        confidence,
        confidence_score,
        section: section.to_string(),
        category: category.to_string(),
        extracted_value: extracted_value.to_string(),
        corrected_value: None,
        page: NonZeroU32::new(page).unwrap_or(NonZeroU32::MIN),
        highlighted_text: highlighted_text.to_string(),
    }
}

/// Extracted attributes keyed by document id. Only document `1` has any.
pub fn attributes() -> HashMap<String, Vec<Attribute>> {
    use ConfidenceBucket::*;
    let acme = vec![
        attribute(
            "attr-1",
            "Contract Start Date",
            High,
            95,
            "Term and Termination",
            "Date",
            "January 1, 2024",
            1,
            "This Agreement shall commence on January 1, 2024 and shall continue for a period of twelve (12) months unless earlier terminated in accordance with the provisions herein.",
        ),
        attribute(
            "attr-2",
            "Contract End Date",
            High,
            93,
            "Term and Termination",
            "Date",
            "December 31, 2024",
            1,
            "The initial term of this Agreement shall expire on December 31, 2024, unless renewed or extended by mutual written agreement of both parties.",
        ),
        attribute(
            "attr-3",
            "Party A Name",
            High,
            98,
            "Parties",
            "Entity",
            "Acme Corporation",
            1,
            "This Service Agreement (\"Agreement\") is entered into as of the date last signed below by and between Acme Corporation, a Delaware corporation (\"Client\"), and the service provider listed below.",
        ),
        attribute(
            "attr-4",
            "Party B Name",
            Medium,
            72,
            "Parties",
            "Entity",
            "Tech Services LLC",
            1,
            "Service Provider: Tech Services LLC or its affiliated entities as may be designated from time to time (\"Provider\").",
        ),
        attribute(
            "attr-5",
            "Payment Terms",
            Low,
            65,
            "Payment",
            "Financial",
            "Net 30 days",
            2,
            "Client shall pay all undisputed invoices within thirty (30) days of receipt. Payment terms may be modified by mutual agreement in writing.",
        ),
        attribute(
            "attr-6",
            "Total Contract Value",
            High,
            91,
            "Compensation",
            "Financial",
            "$120,000",
            2,
            "The total compensation for services rendered under this Agreement shall not exceed One Hundred Twenty Thousand Dollars ($120,000) for the initial term.",
        ),
        attribute(
            "attr-7",
            "Termination Notice Period",
            Medium,
            78,
            "Termination",
            "Terms",
            "30 days written notice",
            3,
            "Either party may terminate this Agreement for convenience upon thirty (30) days prior written notice to the other party.",
        ),
        attribute(
            "attr-8",
            "Governing Law",
            High,
            96,
            "General Provisions",
            "Legal",
            "State of Delaware",
            4,
            "This Agreement shall be governed by and construed in accordance with the laws of the State of Delaware, without regard to its conflict of laws principles.",
        ),
        attribute(
            "attr-9",
            "Confidentiality Duration",
            Low,
            68,
            "Confidentiality",
            "Terms",
            "2 years after termination",
            3,
            "The obligations of confidentiality shall survive for a period of two (2) years following the termination or expiration of this Agreement.",
        ),
        attribute(
            "attr-10",
            "Liability Cap",
            Medium,
            75,
            "Limitation of Liability",
            "Financial",
            "$50,000",
            4,
            "In no event shall either party's aggregate liability exceed Fifty Thousand Dollars ($50,000) or the total fees paid under this Agreement, whichever is greater.",
        ),
    ];

    HashMap::from([("1".to_string(), acme)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_sizes() {
        assert_eq!(documents().len(), 5);
        let attrs = attributes();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["1"].len(), 10);
    }

    #[test]
    fn seeded_documents_are_consistent() {
        assert!(documents().iter().all(Document::is_consistent));
    }

    #[test]
    fn seeded_attribute_ids_unique() {
        let attrs = &attributes()["1"];
        let mut ids: Vec<&str> = attrs.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), attrs.len());
    }

    #[test]
    fn seeded_buckets_follow_score_convention() {
        assert!(attributes()["1"].iter().all(|a| !a.bucket_mismatch()));
    }
}
