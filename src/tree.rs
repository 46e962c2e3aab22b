//! The adaptive radix tree itself: a single optional root plus the
//! recursive insert and iterative search over it.

use tracing::trace;

use crate::node::{Content, Leaf, Node};
use crate::prefix::{MAX_PREFIX_LEN, Prefix};
use crate::stats::TreeStats;

/// An ordered in-memory index from byte-string keys to byte-string values.
///
/// Inner nodes adapt their layout to their child count and collapse shared
/// key-byte runs into compressed prefixes, so both lookup cost and memory
/// track the shape of the keys rather than their raw length.
///
/// Keys are unique: inserting a present key replaces its value and returns
/// the previous one. Keys and values may be any byte sequence, including
/// empty ones and ones with interior `0x00` bytes.
///
/// ```rust
/// use art_index::AdaptiveRadixTree;
///
/// let mut tree = AdaptiveRadixTree::new();
/// assert_eq!(tree.insert("key", "one"), None);
/// assert_eq!(tree.insert("key", "two").as_deref(), Some(b"one".as_slice()));
/// assert_eq!(tree.get("key"), Some(b"two".as_slice()));
/// ```
pub struct AdaptiveRadixTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Default for AdaptiveRadixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptiveRadixTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Associates `key` with `value`. Returns the previous value when the
    /// key was already present.
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Option<Box<[u8]>> {
        let (key, value) = (key.as_ref(), value.as_ref());

        let Some(root) = self.root.as_deref_mut() else {
            self.root = Some(Box::new(Node::new_leaf(key, value)));
            self.len = 1;
            return None;
        };

        let prev = Self::insert_recurse(root, key, value, 0);
        if prev.is_none() {
            self.len += 1;
        }
        prev
    }

    /// Looks up `key`, yielding its value on a hit.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.get_slice(key.as_ref())
    }

    /// Walks the tree and tallies per-layout node counts, leaf count and
    /// height.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        if let Some(root) = self.root.as_deref() {
            Self::stats_recurse(root, &mut stats, 1);
        }
        stats
    }

    fn get_slice(&self, key: &[u8]) -> Option<&[u8]> {
        let mut cur = self.root.as_deref()?;
        let mut depth = 0;
        loop {
            if let Content::Leaf(leaf) = &cur.content {
                return leaf.matches(key).then(|| leaf.value());
            }

            let p = cur.common_prefix_len(key, depth);
            if p != cur.prefix.len() {
                return None;
            }
            depth += cur.prefix.len();

            if depth == key.len() {
                // Key exhausted at this node; only its terminal entry can
                // hold it.
                let t = cur.terminal.as_deref()?;
                return t.matches(key).then(|| t.value());
            }

            cur = cur.seek_child(key[depth])?;
            depth += 1;
        }
    }

    fn insert_recurse(
        node: &mut Node,
        key: &[u8],
        value: &[u8],
        depth: usize,
    ) -> Option<Box<[u8]>> {
        if let Content::Leaf(leaf) = &mut node.content {
            if leaf.matches(key) {
                trace!(depth, "replacing value of existing key");
                return Some(leaf.replace_value(value));
            }

            // Two distinct keys in one slot: hang both off a fresh 4-wide
            // node whose prefix is their remaining common run.
            let old_key = leaf.key();
            let rest_new = &key[depth..];
            let rest_old = &old_key[depth..];
            let limit = rest_new.len().min(rest_old.len());
            let mut lcp = 0;
            while lcp < limit && rest_new[lcp] == rest_old[lcp] {
                lcp += 1;
            }
            let old_edge = old_key.get(depth + lcp).copied();
            trace!(depth, lcp, "leaf diverged, splitting under new inner node");

            let parent_prefix = Prefix::from_slice(&key[depth..depth + lcp]);
            let old_node = std::mem::replace(node, Node::new_inner(parent_prefix));
            match old_edge {
                Some(b) => node.add_child(b, Box::new(old_node)),
                None => {
                    let Content::Leaf(old_leaf) = old_node.content else {
                        unreachable!()
                    };
                    node.set_terminal(old_leaf);
                }
            }
            match key.get(depth + lcp) {
                Some(&b) => node.add_child(b, Box::new(Node::new_leaf(key, value))),
                None => node.set_terminal(Leaf::new(key, value)),
            }
            return None;
        }

        let p = node.common_prefix_len(key, depth);
        if p < node.prefix.len() {
            // The key leaves the compressed path partway through. Split the
            // path: a new node keeps the matched head, the current node
            // keeps the tail minus the byte consumed by its new edge.
            let (old_edge, shortened) = if node.prefix.len() <= MAX_PREFIX_LEN {
                (
                    node.prefix.at(p),
                    Prefix::from_slice(&node.prefix.stored()[p + 1..]),
                )
            } else {
                // Prefix overflows its inline storage; a descendant leaf
                // holds the full run.
                let leaf_key = node.descend_leaf().key();
                (
                    leaf_key[depth + p],
                    Prefix::from_slice(&leaf_key[depth + p + 1..depth + node.prefix.len()]),
                )
            };
            trace!(depth, matched = p, "prefix mismatch, splitting path");

            let parent_prefix = Prefix::from_slice(&key[depth..depth + p]);
            node.prefix = shortened;
            let old_node = std::mem::replace(node, Node::new_inner(parent_prefix));
            node.add_child(old_edge, Box::new(old_node));
            match key.get(depth + p) {
                Some(&b) => node.add_child(b, Box::new(Node::new_leaf(key, value))),
                None => node.set_terminal(Leaf::new(key, value)),
            }
            return None;
        }

        let depth = depth + node.prefix.len();

        if depth == key.len() {
            // Key exhausted at this node; it lives in the terminal slot.
            if let Some(t) = node.terminal.as_deref_mut() {
                debug_assert!(t.matches(key));
                trace!(depth, "replacing value of existing terminal key");
                return Some(t.replace_value(value));
            }
            node.set_terminal(Leaf::new(key, value));
            return None;
        }

        let b = key[depth];
        if let Some(child) = node.seek_child_mut(b) {
            return Self::insert_recurse(child, key, value, depth + 1);
        }

        node.add_child(b, Box::new(Node::new_leaf(key, value)));
        None
    }

    fn stats_recurse(node: &Node, stats: &mut TreeStats, height: usize) {
        if height > stats.max_height {
            stats.max_height = height;
        }
        if node.is_leaf() {
            stats.num_leaves += 1;
            return;
        }

        stats.num_inner_nodes += 1;
        stats.record_inner(node.capacity(), node.num_children());
        if node.terminal.is_some() {
            stats.num_leaves += 1;
            if height + 1 > stats.max_height {
                stats.max_height = height + 1;
            }
        }
        for (_, child) in node.children() {
            Self::stats_recurse(child, stats, height + 1);
        }
    }
}
