//! Error types for the publishing pipeline

use thiserror::Error;

/// Configuration problems, detected before any network activity.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// NOTION_API_KEY is unset or empty
    #[error("NOTION_API_KEY is not set; export it or add it to your environment")]
    MissingApiKey,

    /// NOTION_PAGE_URL is unset or empty
    #[error("NOTION_PAGE_URL is not set; it must point at the target Notion page")]
    MissingPageUrl,
}

/// Failures of a single append request.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The remote answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection-level failure (DNS, TLS, request build)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failures of a publishing run.
///
/// A rejected batch aborts the run immediately; batches already appended are
/// not rolled back, so the remote page may hold a prefix of the document.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Append for batch `index` (zero-based, of `total`) failed
    #[error("batch {index} of {total} was not accepted: {source}")]
    Batch {
        index: usize,
        total: usize,
        #[source]
        source: TransportError,
    },
}

impl PublishError {
    /// Zero-based index of the failing batch.
    pub fn batch_index(&self) -> usize {
        match self {
            PublishError::Batch { index, .. } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_error_reports_index_status_and_body() {
        let err = PublishError::Batch {
            index: 2,
            total: 5,
            source: TransportError::Status {
                status: 400,
                body: "validation_error".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("batch 2 of 5"));
        assert!(message.contains("400"));
        assert!(message.contains("validation_error"));
        assert_eq!(err.batch_index(), 2);
    }
}
