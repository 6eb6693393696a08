//! End-to-end publishing flow against a capturing transport stub

use async_trait::async_trait;
use promptpress_core::{
    build_document, AppendTransport, Block, Config, PageId, PromptSet, PublishError, Publisher,
    TransportError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Records every appended batch; optionally rejects the call at `fail_at`.
#[derive(Default)]
struct CapturingTransport {
    calls: Mutex<Vec<Vec<Block>>>,
    attempts: AtomicUsize,
    fail_at: Option<usize>,
}

impl CapturingTransport {
    fn failing_at(index: usize) -> Self {
        CapturingTransport {
            fail_at: Some(index),
            ..Default::default()
        }
    }

    fn sent_blocks(&self) -> Vec<Block> {
        self.calls.lock().unwrap().iter().flatten().cloned().collect()
    }
}

#[async_trait]
impl AppendTransport for CapturingTransport {
    async fn append_children(
        &self,
        _page_id: &PageId,
        children: &[Block],
    ) -> Result<(), TransportError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(attempt) {
            return Err(TransportError::Status {
                status: 401,
                body: "unauthorized".to_string(),
            });
        }
        self.calls.lock().unwrap().push(children.to_vec());
        Ok(())
    }
}

fn page_id() -> PageId {
    PageId::from_locator("https://www.notion.so/1fbd5c5438fd8034928ec1d36495c564?pvs=4")
}

#[tokio::test]
async fn curated_document_publishes_in_one_ordered_batch() {
    let doc = build_document(&PromptSet::curated("2026年08月30日 12:00"));
    assert!(doc.len() <= 100, "curated set should fit one batch");

    let transport = CapturingTransport::default();
    let publisher = Publisher::new(transport, page_id());

    let report = publisher.publish(&doc).await.unwrap();
    assert_eq!(report.batches, 1);
    assert_eq!(report.blocks, doc.len());
}

#[tokio::test]
async fn sent_batches_concatenate_to_the_original_document() {
    let doc = build_document(&PromptSet::curated("now"));
    let transport = CapturingTransport::default();
    let publisher = Publisher::new(&transport, page_id()).with_batch_limit(7);

    publisher.publish(&doc).await.unwrap();

    let original: Vec<Block> = doc.iter().cloned().collect();
    assert_eq!(transport.sent_blocks(), original);
}

#[tokio::test]
async fn failure_at_batch_k_stops_all_later_batches() {
    let doc: promptpress_core::Document =
        (0..25).map(|i| Block::paragraph(format!("b{i}"))).collect();

    let transport = CapturingTransport::failing_at(2);
    let publisher = Publisher::new(&transport, page_id()).with_batch_limit(5);

    let err = publisher.publish(&doc).await.unwrap_err();
    let PublishError::Batch { index, total, .. } = err;
    assert_eq!(index, 2);
    assert_eq!(total, 5);

    // Batches 0 and 1 landed; 2 was rejected; 3 and 4 were never attempted.
    assert_eq!(transport.attempts.load(Ordering::SeqCst), 3);
    assert_eq!(transport.calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_credential_is_rejected_before_any_call() {
    let transport = CapturingTransport::default();

    // The CLI resolves configuration before a publisher ever exists; an
    // empty credential fails here and the transport stays untouched.
    let config = Config::new("", "https://www.notion.so/abc123");
    assert!(config.is_err());

    assert_eq!(transport.attempts.load(Ordering::SeqCst), 0);
    assert!(transport.calls.lock().unwrap().is_empty());
}
