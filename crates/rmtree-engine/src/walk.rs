use rmtree_types::{Item, ParentKey};

use crate::tree::DocumentTree;

/// Deepest level the walker descends to by default
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// One visited item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry<'a> {
    pub item: &'a Item,
    /// 0 for children of the starting key
    pub depth: usize,
    /// Last entry of its sibling list
    pub is_last: bool,
    /// `is_last` of every ancestor, outermost first
    pub ancestors_last: Vec<bool>,
}

struct Frame<'a> {
    siblings: &'a [usize],
    next: usize,
    depth: usize,
    /// Last sibling is still followed by something outside this walk
    continued: bool,
}

/// Pre-order, depth-first iterator over a subtree
///
/// Uses an explicit stack, so malformed or very deep parent chains can
/// neither overflow the call stack nor loop: entries deeper than
/// `max_depth` are never produced and their subtrees are skipped.
pub struct TreeWalker<'a> {
    tree: &'a DocumentTree,
    stack: Vec<Frame<'a>>,
    trail: Vec<bool>,
    max_depth: usize,
    truncated: usize,
}

impl<'a> TreeWalker<'a> {
    pub fn new(tree: &'a DocumentTree, start: &ParentKey) -> Self {
        Self {
            tree,
            stack: vec![Frame {
                siblings: tree.child_indices(start),
                next: 0,
                depth: 0,
                continued: false,
            }],
            trail: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            truncated: 0,
        }
    }

    /// Stop descending below this depth
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Treat the last top-level entry as non-terminal, for listings that
    /// continue after this walk
    pub fn continues_after(mut self, continued: bool) -> Self {
        if let Some(root) = self.stack.first_mut() {
            root.continued = continued;
        }
        self
    }

    /// Number of subtrees skipped because of the depth ceiling
    pub fn truncated(&self) -> usize {
        self.truncated
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = TreeEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            let Some(&index) = frame.siblings.get(frame.next) else {
                if self.stack.pop().is_some_and(|done| done.depth > 0) {
                    self.trail.pop();
                }
                continue;
            };
            frame.next += 1;

            let depth = frame.depth;
            let is_last = frame.next == frame.siblings.len() && !frame.continued;
            let item = self.tree.item(index);
            let entry = TreeEntry {
                item,
                depth,
                is_last,
                ancestors_last: self.trail.clone(),
            };

            let children = self
                .tree
                .child_indices(&ParentKey::Item(item.id().clone()));
            if !children.is_empty() {
                if depth < self.max_depth {
                    self.trail.push(is_last);
                    self.stack.push(Frame {
                        siblings: children,
                        next: 0,
                        depth: depth + 1,
                        continued: false,
                    });
                } else {
                    self.truncated += 1;
                }
            }

            return Some(entry);
        }
    }
}
