/// Bytes of compressed prefix kept inline on a node. Longer prefixes keep
/// their true length but store only this many leading bytes; the rest is
/// recovered from a descendant leaf when it has to be examined.
pub const MAX_PREFIX_LEN: usize = 16;

/// A run of key bytes shared by every descendant of an inner node, stored
/// once on the node instead of on each edge below it.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Prefix {
    data: [u8; MAX_PREFIX_LEN],
    len: usize,
}

impl Prefix {
    pub(crate) fn empty() -> Self {
        Self {
            data: [0; MAX_PREFIX_LEN],
            len: 0,
        }
    }

    /// Builds a prefix from `src`, keeping the true length even when only
    /// the first [`MAX_PREFIX_LEN`] bytes fit inline.
    pub(crate) fn from_slice(src: &[u8]) -> Self {
        let mut data = [0; MAX_PREFIX_LEN];
        let stored = src.len().min(MAX_PREFIX_LEN);
        data[..stored].copy_from_slice(&src[..stored]);
        Self {
            data,
            len: src.len(),
        }
    }

    /// True length of the prefix, which may exceed what is stored inline.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The inline bytes: the first `min(len, MAX_PREFIX_LEN)` bytes.
    #[inline(always)]
    pub(crate) fn stored(&self) -> &[u8] {
        &self.data[..self.len.min(MAX_PREFIX_LEN)]
    }

    #[inline(always)]
    pub(crate) fn at(&self, pos: usize) -> u8 {
        self.data[pos]
    }
}

impl std::fmt::Debug for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prefix")
            .field("stored", &self.stored())
            .field("len", &self.len)
            .finish()
    }
}
