//! Terminal rendering for the document list and the review screen.
//!
//! The list is printed as an Arrow table; the review screen is a vertical
//! card per attribute followed by the document panel for the focused one.

use std::io::{self, Write};

use docreview_core::schema::documents_to_batch;
use docreview_core::{
    Document, DocumentStats, HighlightTarget, Identity, ReviewSession,
    events::NotificationRecord,
};

const MAX_EXCERPT: usize = 160;

// ── Document list ──

pub fn write_stats(out: &mut impl Write, stats: &DocumentStats) -> io::Result<()> {
    writeln!(out, "  {:<26} {}", "Total Documents", stats.total)?;
    writeln!(out, "  {:<26} {}", "Pending Review", stats.pending_review)?;
    writeln!(out, "  {:<26} {}", "Completed", stats.completed)?;
    writeln!(out)
}

pub fn write_document_table(out: &mut impl Write, documents: &[&Document]) -> anyhow::Result<()> {
    if documents.is_empty() {
        writeln!(out, "No documents found")?;
        return Ok(());
    }
    let batch = documents_to_batch(documents.iter().copied())?;
    let table = arrow::util::pretty::pretty_format_batches(&[batch])?;
    writeln!(out, "{table}")?;
    Ok(())
}

// ── Review screen ──

pub fn write_review(out: &mut impl Write, review: &ReviewSession) -> io::Result<()> {
    let doc = review.document();
    writeln!(out, "=== Contract Review ===")?;
    writeln!(out, "{}", doc.title)?;
    writeln!(out, "{}", review.summary())?;
    writeln!(out)?;

    let rows = review.view();
    if !review.search().is_empty() {
        writeln!(
            out,
            "Search \"{}\": {} of {} attributes",
            review.search(),
            rows.len(),
            review.attributes().len()
        )?;
        writeln!(out)?;
    }
    if rows.is_empty() {
        writeln!(out, "  (no matching attributes)")?;
        writeln!(out)?;
    }

    for row in &rows {
        let attr = row.attribute;
        let marker = if row.focused { ">" } else { " " };
        writeln!(
            out,
            "{marker} {} [{} ({}%)]",
            attr.name, attr.confidence, attr.confidence_score
        )?;
        writeln!(out, "  {:<26} {} – {}", "Section", attr.section, attr.category)?;
        writeln!(out, "  {:<26} {}", "Extracted Value", attr.extracted_value)?;
        if let Some(corrected) = row.corrected_value.filter(|v| !v.is_empty()) {
            writeln!(out, "  {:<26} {}", "Corrected Value", corrected)?;
        }
        writeln!(out)?;
    }

    let diffs = review.corrections();
    if !diffs.is_empty() {
        writeln!(out, "Corrections ({}):", diffs.len())?;
        for d in &diffs {
            writeln!(out, "    {:<30} {} -> {}", d.name, d.extracted, d.corrected)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Right-hand panel: what the document viewer was last asked to show.
pub fn write_document_panel(
    out: &mut impl Write,
    review: &ReviewSession,
    target: Option<&HighlightTarget>,
) -> io::Result<()> {
    let Some(target) = target else {
        return Ok(());
    };
    let name = review
        .attributes()
        .iter()
        .find(|a| a.id == target.attribute_id)
        .map(|a| a.name.as_str())
        .unwrap_or("-");

    writeln!(out, "Contract Document")?;
    writeln!(out, "  {:<26} {}", "Viewing", name)?;
    writeln!(out, "  {:<26} {}", "Section", target.section)?;
    writeln!(out, "  {:<26} {}", "Page", target.page)?;
    if !review.focus_is_visible() {
        writeln!(out, "  {:<26} hidden by current search", "Note")?;
    }
    writeln!(out, "  Highlighted Section Text")?;
    writeln!(out, "    {}", excerpt(&target.highlighted_text))?;
    Ok(())
}

pub fn write_identity(out: &mut impl Write, identity: &Identity) -> io::Result<()> {
    writeln!(out, "{} <{}>", identity.name, identity.email)
}

fn excerpt(text: &str) -> String {
    if text.chars().count() > MAX_EXCERPT {
        let short: String = text.chars().take(MAX_EXCERPT - 3).collect();
        format!("{short}...")
    } else {
        text.to_string()
    }
}

pub fn write_notification(out: &mut impl Write, record: &NotificationRecord) -> io::Result<()> {
    writeln!(out, "{}: {}", record.event.title(), record.event.message())
}
