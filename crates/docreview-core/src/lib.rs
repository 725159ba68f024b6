//! Core of the contract review dashboard: document and attribute types, the
//! document filter engine, the attribute review model with its correction
//! overlay, and the session gate.

mod error;

pub mod corrections;
pub mod document;
pub mod events;
pub mod filter;
pub mod review;
pub mod schema;
pub mod seed;
pub mod session;
pub mod source;

pub use corrections::CorrectionOverlay;
pub use document::{Attribute, ConfidenceBucket, Document, DocumentStatus};
pub use error::ReviewError;
pub use events::{
    DocumentViewer, HighlightTarget, Notifier, NullViewer, RecordingNotifier, RecordingViewer,
    ReviewEvent,
};
pub use filter::{Dashboard, DocumentStats, StatusFilter, filter_documents};
pub use review::{
    AttributeView, CorrectionDiff, ReviewSession, ReviewSummary, filter_attributes,
    low_confidence_count, selected_attribute,
};
pub use session::{Authenticator, Identity, Navigation, SessionContext, StaticAuthenticator};
pub use source::DocumentSource;
