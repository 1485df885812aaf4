use tracing::{debug, trace};

use crate::adf::{Document, Inline, ListItem, Node};
use crate::classify::{LineClass, classify};
use crate::config::{BlankLines, Config};
use crate::inline::tokenize;
use crate::list::ListBuilder;

/// Convert markdown text into a document in a single forward pass over its lines.
pub fn parse(markdown: &str, config: &Config) -> Document {
    let dialect = config.inline.dialect;
    let mut content = Vec::new();
    let mut lists = ListBuilder::default();
    let mut line_count = 0usize;

    for (index, line) in markdown.split('\n').enumerate() {
        line_count += 1;
        let class = classify(line);
        trace!(line = index + 1, ?class, "classified line");

        match class {
            LineClass::Blank => {
                lists.finish(&mut content);
                if config.blocks.blank_lines == BlankLines::Paragraph {
                    content.push(Node::Paragraph {
                        content: vec![Inline::plain("")],
                    });
                }
            }
            LineClass::Heading { level, text } => {
                lists.finish(&mut content);
                content.push(Node::heading(level, tokenize(text, dialect)));
            }
            LineClass::Bullet { indent, text } => {
                let level = config.blocks.indent_level(indent);
                lists.push(level, ListItem::new(tokenize(text, dialect)), &mut content);
            }
            LineClass::Paragraph(text) => {
                lists.finish(&mut content);
                content.push(Node::Paragraph {
                    content: tokenize(text, dialect),
                });
            }
        }
    }

    lists.finish(&mut content);

    debug!(lines = line_count, nodes = content.len(), "converted markdown");
    Document::new(content)
}
