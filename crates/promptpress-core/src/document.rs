//! Ordered block sequence handed to the publisher
//!
//! A [`Document`] is built once by the content builder and never mutated
//! after handoff. Blocks have no identity beyond their position.

use crate::block::Block;

/// An ordered sequence of content blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Document { blocks: Vec::new() }
    }

    /// Append one block at the end of the sequence.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Partition into consecutive batches of at most `limit` blocks,
    /// preserving order. The last batch may be smaller; an empty document
    /// yields no batches.
    pub fn batches(&self, limit: usize) -> std::slice::Chunks<'_, Block> {
        self.blocks.chunks(limit)
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Document { blocks }
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Document {
            blocks: iter.into_iter().collect(),
        }
    }
}
