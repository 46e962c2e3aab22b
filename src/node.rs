use tracing::debug;

use crate::mapping::NodeMapping;
use crate::mapping::direct_mapping::DirectMapping;
use crate::mapping::indexed_mapping::IndexedMapping;
use crate::mapping::keyed_mapping::KeyedMapping;
use crate::prefix::{MAX_PREFIX_LEN, Prefix};

/// One stored entry: a key and its value, each owned outright.
pub(crate) struct Leaf {
    key: Box<[u8]>,
    value: Box<[u8]>,
}

impl Leaf {
    pub(crate) fn new(key: &[u8], value: &[u8]) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[inline(always)]
    pub(crate) fn key(&self) -> &[u8] {
        &self.key
    }

    #[inline(always)]
    pub(crate) fn value(&self) -> &[u8] {
        &self.value
    }

    /// Strict byte-equality over the full stored key.
    #[inline(always)]
    pub(crate) fn matches(&self, probe: &[u8]) -> bool {
        *self.key == *probe
    }

    pub(crate) fn replace_value(&mut self, value: &[u8]) -> Box<[u8]> {
        std::mem::replace(&mut self.value, value.into())
    }
}

/// The layout a node currently uses. Inner nodes move rightward through the
/// inner variants as children accumulate; a leaf never changes.
pub(crate) enum Content {
    Leaf(Leaf),
    Node4(KeyedMapping<Box<Node>, 4>),
    Node16(Box<KeyedMapping<Box<Node>, 16>>),
    Node48(Box<IndexedMapping<Box<Node>, 48>>),
    Node256(Box<DirectMapping<Box<Node>>>),
}

/// A tree node: the compressed path prefix shared by everything below it,
/// an optional terminal entry for the key that ends exactly here, and the
/// layout-specific payload.
///
/// The terminal slot sits outside the byte-to-child mappings on purpose: a
/// key that is exhausted at this node has no next byte to index with, and
/// borrowing a byte value (say `0x00`) as a sentinel would collide with
/// keys that genuinely contain it. The slot does not count toward capacity
/// and is untouched by growth.
pub(crate) struct Node {
    pub(crate) prefix: Prefix,
    pub(crate) terminal: Option<Box<Leaf>>,
    pub(crate) content: Content,
}

impl Node {
    #[inline]
    pub(crate) fn new_leaf(key: &[u8], value: &[u8]) -> Self {
        Self {
            prefix: Prefix::empty(),
            terminal: None,
            content: Content::Leaf(Leaf::new(key, value)),
        }
    }

    #[inline]
    pub(crate) fn new_inner(prefix: Prefix) -> Self {
        Self {
            prefix,
            terminal: None,
            content: Content::Node4(KeyedMapping::new()),
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(&self.content, Content::Leaf(_))
    }

    pub(crate) fn num_children(&self) -> usize {
        match &self.content {
            Content::Leaf(_) => 0,
            Content::Node4(m) => m.num_children(),
            Content::Node16(m) => m.num_children(),
            Content::Node48(m) => m.num_children(),
            Content::Node256(m) => m.num_children(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match &self.content {
            Content::Leaf(_) => 0,
            Content::Node4(_) => 4,
            Content::Node16(_) => 16,
            Content::Node48(_) => 48,
            Content::Node256(_) => 256,
        }
    }

    /// At capacity for its current layout. A direct-mapped node always has
    /// a slot for any byte, so it never reports full; a leaf has no slots
    /// at all.
    pub(crate) fn is_full(&self) -> bool {
        match &self.content {
            Content::Leaf(_) => true,
            Content::Node4(m) => m.num_children() >= m.width(),
            Content::Node16(m) => m.num_children() >= m.width(),
            Content::Node48(m) => m.num_children() >= m.width(),
            Content::Node256(_) => false,
        }
    }

    pub(crate) fn seek_child(&self, key: u8) -> Option<&Node> {
        match &self.content {
            Content::Leaf(_) => None,
            Content::Node4(m) => m.seek_child(key).map(|n| n.as_ref()),
            Content::Node16(m) => m.seek_child(key).map(|n| n.as_ref()),
            Content::Node48(m) => m.seek_child(key).map(|n| n.as_ref()),
            Content::Node256(m) => m.seek_child(key).map(|n| n.as_ref()),
        }
    }

    pub(crate) fn seek_child_mut(&mut self, key: u8) -> Option<&mut Node> {
        match &mut self.content {
            Content::Leaf(_) => None,
            Content::Node4(m) => m.seek_child_mut(key).map(|n| n.as_mut()),
            Content::Node16(m) => m.seek_child_mut(key).map(|n| n.as_mut()),
            Content::Node48(m) => m.seek_child_mut(key).map(|n| n.as_mut()),
            Content::Node256(m) => m.seek_child_mut(key).map(|n| n.as_mut()),
        }
    }

    /// Places `child` under `key`, promoting the layout first when the
    /// current one is at capacity.
    pub(crate) fn add_child(&mut self, key: u8, child: Box<Node>) {
        if self.is_full() {
            self.grow();
        }

        match &mut self.content {
            Content::Node4(m) => m.add_child(key, child),
            Content::Node16(m) => m.add_child(key, child),
            Content::Node48(m) => m.add_child(key, child),
            Content::Node256(m) => m.add_child(key, child),
            Content::Leaf(_) => unreachable!("leaf nodes have no children"),
        }
    }

    pub(crate) fn set_terminal(&mut self, leaf: Leaf) {
        debug_assert!(!self.is_leaf());
        debug_assert!(self.terminal.is_none());
        self.terminal = Some(Box::new(leaf));
    }

    /// Promotes the payload to the next wider layout, moving every child
    /// over and dropping the old payload. The terminal slot lives on the
    /// envelope and is unaffected.
    pub(crate) fn grow(&mut self) {
        match &mut self.content {
            Content::Node4(m) => {
                self.content = Content::Node16(Box::new(KeyedMapping::from_resized(m)));
                debug!(from = 4, to = 16, "grew node");
            }
            Content::Node16(m) => {
                self.content = Content::Node48(Box::new(IndexedMapping::from_keyed(m)));
                debug!(from = 16, to = 48, "grew node");
            }
            Content::Node48(m) => {
                self.content = Content::Node256(Box::new(DirectMapping::from_indexed(m)));
                debug!(from = 48, to = 256, "grew node");
            }
            Content::Node256(_) => unreachable!("widest layout cannot grow"),
            Content::Leaf(_) => unreachable!("leaf nodes cannot grow"),
        }
    }

    /// Children in the layout's iteration order: insertion order for the
    /// keyed layouts, ascending byte order for the wider two. The terminal
    /// entry is not a mapped child and is not visited.
    pub(crate) fn children(&self) -> Box<dyn Iterator<Item = (u8, &Node)> + '_> {
        match &self.content {
            Content::Leaf(_) => Box::new(std::iter::empty()),
            Content::Node4(m) => Box::new(m.iter().map(|(k, n)| (k, n.as_ref()))),
            Content::Node16(m) => Box::new(m.iter().map(|(k, n)| (k, n.as_ref()))),
            Content::Node48(m) => Box::new(m.iter().map(|(k, n)| (k, n.as_ref()))),
            Content::Node256(m) => Box::new(m.iter().map(|(k, n)| (k, n.as_ref()))),
        }
    }

    /// Some leaf in this subtree. Any one will do: every leaf below a node
    /// carries the node's full compressed prefix at the node's depth, which
    /// is what callers use this for.
    pub(crate) fn descend_leaf(&self) -> &Leaf {
        if let Content::Leaf(leaf) = &self.content {
            return leaf;
        }
        if let Some(t) = &self.terminal {
            return t;
        }
        let (_, child) = self
            .children()
            .next()
            .expect("inner node with no children");
        child.descend_leaf()
    }

    /// Longest match between this node's compressed prefix and `key` read
    /// from `depth`, bounded by both. The inline prefix bytes are compared
    /// directly; if they are exhausted and the true prefix is longer, the
    /// overflow is checked against a descendant leaf, which holds the full
    /// run verbatim.
    pub(crate) fn common_prefix_len(&self, key: &[u8], depth: usize) -> usize {
        let stored = self.prefix.stored();
        let rest = &key[depth..];
        let mut n = 0;
        let limit = stored.len().min(rest.len());
        while n < limit && stored[n] == rest[n] {
            n += 1;
        }

        if n == MAX_PREFIX_LEN && self.prefix.len() > MAX_PREFIX_LEN {
            let full = &self.descend_leaf().key()[depth..];
            let limit = self.prefix.len().min(rest.len());
            while n < limit && full[n] == rest[n] {
                n += 1;
            }
        }

        n
    }
}
