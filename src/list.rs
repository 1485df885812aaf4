//! List-nesting builder.
//!
//! Keeps a stack of open lists, each tagged with the indent level it was
//! opened at. A list is only turned into a node when it is closed: nested
//! lists attach to the last item of their parent, outermost lists go to the
//! document. Until then the parent's last item cannot change, because new
//! items always land in the list on top of the stack.

use tracing::trace;

use crate::adf::{ListItem, Node};

struct OpenList {
    level: usize,
    items: Vec<ListItem>,
}

#[derive(Default)]
pub struct ListBuilder {
    stack: Vec<OpenList>,
}

impl ListBuilder {
    pub fn is_active(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Add an item at `level`, closing any lists nested deeper than it.
    pub fn push(&mut self, level: usize, item: ListItem, out: &mut Vec<Node>) {
        while self.stack.last().is_some_and(|top| top.level > level) {
            self.close_top(out);
        }

        match self.stack.last_mut() {
            Some(top) if top.level == level => top.items.push(item),
            Some(_) => {
                trace!(level, depth = self.stack.len(), "opening nested list");
                self.stack.push(OpenList {
                    level,
                    items: vec![item],
                });
            }
            None => {
                trace!(level, "opening top-level list");
                self.stack.push(OpenList {
                    level,
                    items: vec![item],
                });
            }
        }
    }

    /// Close every open list.
    pub fn finish(&mut self, out: &mut Vec<Node>) {
        while self.is_active() {
            self.close_top(out);
        }
    }

    fn close_top(&mut self, out: &mut Vec<Node>) {
        let Some(list) = self.stack.pop() else {
            return;
        };
        let node = Node::BulletList {
            content: list.items,
        };

        match self.stack.last_mut().and_then(|parent| parent.items.last_mut()) {
            Some(last_item) => last_item.content.push(node),
            None => out.push(node),
        }
    }
}
