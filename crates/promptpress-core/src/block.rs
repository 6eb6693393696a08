//! Content block model and its Notion wire representation
//!
//! A [`Block`] is one unit of formatted content in the target page's
//! rendering model. Blocks are immutable once created; ordering within the
//! owning [`Document`](crate::Document) is significant and preserved
//! end-to-end.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// Heading depth supported by the Notion block model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// The Notion block type for this level (`heading_1` .. `heading_3`).
    pub fn wire_type(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "heading_1",
            HeadingLevel::H2 => "heading_2",
            HeadingLevel::H3 => "heading_3",
        }
    }
}

/// One unit of formatted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading at one of three depths.
    Heading { level: HeadingLevel, text: String },
    /// Plain text paragraph. Empty text renders as vertical spacing.
    Paragraph { text: String },
    /// Verbatim code sample with a Notion language tag.
    Code { text: String, language: String },
    /// Highlighted note with an emoji icon.
    Callout { text: String, icon: String },
}

impl Block {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Empty paragraph used as a separator between logical groups.
    pub fn separator() -> Self {
        Block::Paragraph {
            text: String::new(),
        }
    }

    /// Code block with Notion's default language tag.
    pub fn code(text: impl Into<String>) -> Self {
        Block::Code {
            text: text.into(),
            language: "plain text".to_string(),
        }
    }

    pub fn callout(text: impl Into<String>, icon: impl Into<String>) -> Self {
        Block::Callout {
            text: text.into(),
            icon: icon.into(),
        }
    }

    /// The Notion `type` tag for this block.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { level, .. } => level.wire_type(),
            Block::Paragraph { .. } => "paragraph",
            Block::Code { .. } => "code",
            Block::Callout { .. } => "callout",
        }
    }

    /// The text content carried by this block.
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::Code { text, .. }
            | Block::Callout { text, .. } => text,
        }
    }

    /// Serialise to the Notion block wire shape.
    ///
    /// The kind name appears twice - as the `type` discriminator and as the
    /// nested payload key - which is how the Notion API keys block payloads.
    /// That shape is preserved exactly for wire compatibility.
    pub fn to_wire(&self) -> Value {
        let kind = self.kind();
        let mut payload = json!({ "rich_text": [rich_text(self.text())] });

        match self {
            Block::Code { language, .. } => {
                payload["language"] = json!(language);
            }
            Block::Callout { icon, .. } => {
                payload["icon"] = json!({ "type": "emoji", "emoji": icon });
            }
            _ => {}
        }

        // The payload key is the kind name itself, so the object is
        // assembled by hand rather than through the json! macro.
        let mut wire = serde_json::Map::new();
        wire.insert("object".to_string(), json!("block"));
        wire.insert("type".to_string(), json!(kind));
        wire.insert(kind.to_string(), payload);
        Value::Object(wire)
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

/// A single-element Notion rich text span.
fn rich_text(content: &str) -> Value {
    json!({
        "type": "text",
        "text": { "content": content },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_wire_shape() {
        let wire = Block::heading(HeadingLevel::H2, "Usage notes").to_wire();
        assert_eq!(
            wire,
            json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": {
                    "rich_text": [
                        { "type": "text", "text": { "content": "Usage notes" } }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_code_wire_shape_carries_language() {
        let wire = Block::code("fn main() {}").to_wire();
        assert_eq!(wire["type"], "code");
        assert_eq!(wire["code"]["language"], "plain text");
        assert_eq!(
            wire["code"]["rich_text"][0]["text"]["content"],
            "fn main() {}"
        );
    }

    #[test]
    fn test_callout_wire_shape_carries_emoji_icon() {
        let wire = Block::callout("heads up", "💡").to_wire();
        assert_eq!(wire["type"], "callout");
        assert_eq!(
            wire["callout"]["icon"],
            json!({ "type": "emoji", "emoji": "💡" })
        );
    }

    #[test]
    fn test_kind_key_matches_type_discriminator() {
        let blocks = [
            Block::heading(HeadingLevel::H1, "t"),
            Block::paragraph("p"),
            Block::code("c"),
            Block::callout("n", "🚀"),
        ];
        for block in &blocks {
            let wire = block.to_wire();
            let kind = wire["type"].as_str().unwrap();
            assert!(
                wire.get(kind).is_some(),
                "payload not keyed by kind for {kind}"
            );
        }
    }

    #[test]
    fn test_separator_is_empty_paragraph() {
        let sep = Block::separator();
        assert_eq!(sep.kind(), "paragraph");
        assert_eq!(sep.text(), "");
    }

    #[test]
    fn test_serde_serialize_matches_to_wire() {
        let block = Block::paragraph("hello");
        let via_serde = serde_json::to_value(&block).unwrap();
        assert_eq!(via_serde, block.to_wire());
    }
}
