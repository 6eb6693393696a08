//! Chunked, ordered, fail-fast publishing of a document
//!
//! The Notion API caps one children-append request at 100 blocks, so the
//! document is partitioned into consecutive batches of at most that many
//! blocks and each batch is appended in index order. Concatenating the sent
//! batches in order reproduces the document exactly: no reordering, no
//! duplication, no drops.
//!
//! A non-success response aborts the run immediately. There are no retries
//! and no rollback of already-appended batches; this tool is run
//! interactively and failures are surfaced to the operator at once.

use crate::config::PageId;
use crate::document::Document;
use crate::error::PublishError;
use crate::transport::AppendTransport;
use tracing::{debug, info};

/// Documented per-request block limit of the Notion children-append API.
pub const MAX_BLOCKS_PER_REQUEST: usize = 100;

/// Summary of a completed publishing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    /// Number of append requests issued.
    pub batches: usize,
    /// Total number of blocks appended.
    pub blocks: usize,
}

/// Appends a document to one remote page in ordered batches.
pub struct Publisher<T> {
    transport: T,
    page_id: PageId,
    batch_limit: usize,
}

impl<T: AppendTransport> Publisher<T> {
    pub fn new(transport: T, page_id: PageId) -> Self {
        Publisher {
            transport,
            page_id,
            batch_limit: MAX_BLOCKS_PER_REQUEST,
        }
    }

    /// Override the per-request block limit.
    ///
    /// The remote cap stays at [`MAX_BLOCKS_PER_REQUEST`]; smaller limits
    /// exist so the chunking contract can be exercised without hundred-block
    /// fixtures.
    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "batch limit must be positive");
        self.batch_limit = limit;
        self
    }

    /// Append `doc` to the target page, batch by batch, in order.
    ///
    /// An empty document issues zero requests and succeeds. On a rejected
    /// batch the error names the zero-based batch index and carries the
    /// remote status and body; no further batches are attempted.
    pub async fn publish(&self, doc: &Document) -> Result<PublishReport, PublishError> {
        let total = doc.len().div_ceil(self.batch_limit);
        debug!(
            blocks = doc.len(),
            batches = total,
            page_id = %self.page_id,
            "starting publish"
        );

        for (index, batch) in doc.batches(self.batch_limit).enumerate() {
            info!(
                batch = index + 1,
                total,
                blocks = batch.len(),
                "sending batch"
            );

            self.transport
                .append_children(&self.page_id, batch)
                .await
                .map_err(|source| PublishError::Batch {
                    index,
                    total,
                    source,
                })?;
        }

        info!(batches = total, blocks = doc.len(), "publish complete");
        Ok(PublishReport {
            batches: total,
            blocks: doc.len(),
        })
    }
}
