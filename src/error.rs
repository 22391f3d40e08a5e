//! Error types for document analytics.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Everything that can go wrong while producing a report.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A document could not be fetched or parsed by the acquisition
    /// collaborator.
    ///
    /// The analytics core never produces or catches this variant; it
    /// passes through unchanged and aborts processing for the affected
    /// document only.
    #[error("failed to acquire {url}: {reason}")]
    Acquisition { url: String, reason: String },

    /// A statistic that is undefined on an empty sequence was requested
    /// on one (mean, median, or a longest-item lookup).
    #[error("document has no {0} to analyze")]
    EmptyContent(&'static str),

    /// Writing the report record to disk failed.
    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the report record failed.
    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
