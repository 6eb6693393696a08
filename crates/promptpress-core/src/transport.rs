//! Append transport over the Notion blocks API
//!
//! [`AppendTransport`] is the seam between the publish loop and the network;
//! tests substitute a capturing stub, production uses [`NotionTransport`].

use crate::block::Block;
use crate::config::PageId;
use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::json;

/// API version pinned in every request, as required by the Notion API.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// One append of a block batch to a remote page.
///
/// Implementations must treat each call as a single atomic remote write:
/// either every block in `children` is appended after the page's existing
/// content, or the call fails and nothing is recorded as sent.
#[async_trait]
pub trait AppendTransport: Send + Sync {
    /// Append `children` after the existing content of `page_id`.
    async fn append_children(
        &self,
        page_id: &PageId,
        children: &[Block],
    ) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: AppendTransport + ?Sized> AppendTransport for &T {
    async fn append_children(
        &self,
        page_id: &PageId,
        children: &[Block],
    ) -> Result<(), TransportError> {
        (**self).append_children(page_id, children).await
    }
}

/// HTTP transport against the Notion API.
pub struct NotionTransport {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl NotionTransport {
    /// Create a transport against the public Notion endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a transport against a custom endpoint.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("promptpress/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        NotionTransport {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn children_url(&self, page_id: &PageId) -> String {
        format!("{}/v1/blocks/{}/children", self.base_url, page_id)
    }
}

#[async_trait]
impl AppendTransport for NotionTransport {
    async fn append_children(
        &self,
        page_id: &PageId,
        children: &[Block],
    ) -> Result<(), TransportError> {
        let payload = json!({ "children": children });

        let response = self
            .client
            .patch(self.children_url(page_id))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
