use crate::mapping::NodeMapping;
use crate::mapping::keyed_mapping::KeyedMapping;

/// Sentinel in the index table marking "no child for this byte".
pub(crate) const EMPTY_SLOT: u8 = 0xFF;

/// A 256-entry byte-to-slot index table in front of a compact child array.
/// Lookup is O(1) through the table; the child array stays at `WIDTH`
/// slots, well below the footprint of a direct-mapped node.
///
/// The index table is the authority for byte-to-child identity: child
/// array positions mean nothing on their own.
pub(crate) struct IndexedMapping<N, const WIDTH: usize> {
    pub(crate) child_index: [u8; 256],
    pub(crate) children: [Option<N>; WIDTH],
    pub(crate) num_children: u8,
}

impl<N, const WIDTH: usize> IndexedMapping<N, WIDTH> {
    pub(crate) fn new() -> Self {
        Self {
            child_index: [EMPTY_SLOT; 256],
            children: [const { None }; WIDTH],
            num_children: 0,
        }
    }

    /// Promotion from a keyed layout, walking its slots in insertion order.
    pub(crate) fn from_keyed<const KM_WIDTH: usize>(
        km: &mut KeyedMapping<N, KM_WIDTH>,
    ) -> Self {
        let mut im = IndexedMapping::new();
        for i in 0..KM_WIDTH {
            if let Some(child) = km.children[i].take() {
                im.add_child(km.keys[i], child);
            }
        }
        km.num_children = 0;
        im
    }

    /// Visits children in ascending byte order by scanning the index table.
    #[inline]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.child_index.iter().enumerate().filter_map(|(b, slot)| {
            if *slot == EMPTY_SLOT {
                return None;
            }
            self.children[*slot as usize].as_ref().map(|n| (b as u8, n))
        })
    }
}

impl<N, const WIDTH: usize> Default for IndexedMapping<N, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, const WIDTH: usize> NodeMapping<N, WIDTH> for IndexedMapping<N, WIDTH> {
    fn add_child(&mut self, key: u8, node: N) {
        debug_assert_eq!(self.child_index[key as usize], EMPTY_SLOT);
        let slot = self
            .children
            .iter()
            .position(|c| c.is_none())
            .expect("indexed mapping is full");
        self.children[slot] = Some(node);
        self.child_index[key as usize] = slot as u8;
        self.num_children += 1;
    }

    #[inline]
    fn seek_child(&self, key: u8) -> Option<&N> {
        let slot = self.child_index[key as usize];
        if slot == EMPTY_SLOT {
            return None;
        }
        self.children[slot as usize].as_ref()
    }

    #[inline]
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        let slot = self.child_index[key as usize];
        if slot == EMPTY_SLOT {
            return None;
        }
        self.children[slot as usize].as_mut()
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.num_children as usize
    }
}
