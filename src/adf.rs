use serde::Serialize;

use crate::error::Error;

/// Formatting applied to a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Strong,
    Em,
    Code,
}

/// Inline content of paragraphs and headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, mark: Mark) -> Self {
        Inline::Text {
            text: text.into(),
            marks: vec![mark],
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Inline::Text { text, .. } => text,
        }
    }

    pub fn marks(&self) -> &[Mark] {
        match self {
            Inline::Text { marks, .. } => marks,
        }
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks().contains(&mark)
    }
}

/// Heading attributes, serialized under `attrs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// A single list item: its own paragraph, optionally followed by a nested list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "listItem")]
pub struct ListItem {
    pub content: Vec<Node>,
}

impl ListItem {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self {
            content: vec![Node::Paragraph { content: inlines }],
        }
    }

    /// The nested list of this item, if it has one.
    pub fn nested(&self) -> Option<&[ListItem]> {
        match self.content.last() {
            Some(Node::BulletList { content }) => Some(content),
            _ => None,
        }
    }
}

/// Block-level nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph {
        content: Vec<Inline>,
    },
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Inline>,
    },
    BulletList {
        content: Vec<ListItem>,
    },
}

impl Node {
    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Node::Heading {
            attrs: HeadingAttrs { level },
            content,
        }
    }

    /// Concatenated text of all runs below this node.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        push_text(self, &mut out);
        out
    }
}

fn push_text(node: &Node, out: &mut String) {
    match node {
        Node::Paragraph { content } | Node::Heading { content, .. } => {
            for inline in content {
                out.push_str(inline.text());
            }
        }
        Node::BulletList { content } => {
            for item in content {
                for child in &item.content {
                    push_text(child, out);
                }
            }
        }
    }
}

/// Root of a converted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct Document {
    pub version: u32,
    pub content: Vec<Node>,
}

impl Document {
    pub const VERSION: u32 = 1;

    pub fn new(content: Vec<Node>) -> Self {
        Self {
            version: Self::VERSION,
            content,
        }
    }

    pub fn plain_text(&self) -> String {
        self.content.iter().map(Node::plain_text).collect()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
