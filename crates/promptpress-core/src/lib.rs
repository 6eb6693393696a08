//! Promptpress core - curated prompt content as Notion blocks
//!
//! This crate turns a fixed, curated prompt collection into an ordered
//! sequence of Notion content blocks and appends that sequence to a single
//! page through the public Notion API.
//!
//! Two responsibilities:
//!
//! - **Builder** ([`content::build_document`]): a pure, total transform from
//!   the curated [`content::PromptSet`] to an ordered [`Document`] of
//!   [`Block`] values. No I/O, no failure modes.
//! - **Publisher** ([`Publisher`]): partitions the document into batches of
//!   at most 100 blocks (the documented Notion per-request limit), then
//!   appends each batch in order via an [`AppendTransport`]. The first
//!   non-success response aborts the run; earlier batches stay applied.
//!
//! Everything runs sequentially: build, then one append at a time.

pub mod block;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod publisher;
pub mod telemetry;
pub mod transport;

pub use block::{Block, HeadingLevel};
pub use config::{Config, PageId, Target};
pub use content::{build_document, PromptEntry, PromptSet};
pub use document::Document;
pub use error::{ConfigError, PublishError, TransportError};
pub use publisher::{PublishReport, Publisher, MAX_BLOCKS_PER_REQUEST};
pub use telemetry::init_tracing;
pub use transport::{AppendTransport, NotionTransport, NOTION_VERSION};
