use crate::mapping::NodeMapping;

/// Maps key bytes to children through two parallel arrays: a key byte at
/// position `i` corresponds to the child at position `i`. Slots fill from
/// low index upward and stay in insertion order; nothing is ever sorted.
/// Occupancy is carried by the child slot itself, so a stale key byte in a
/// vacated or never-filled slot can't produce a phantom match.
///
/// Backs the 4- and 16-wide layouts, where a linear scan is as good as a
/// sorted layout and considerably simpler.
pub(crate) struct KeyedMapping<N, const WIDTH: usize> {
    pub(crate) keys: [u8; WIDTH],
    pub(crate) children: [Option<N>; WIDTH],
    pub(crate) num_children: u8,
}

impl<N, const WIDTH: usize> KeyedMapping<N, WIDTH> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            keys: [0; WIDTH],
            children: [const { None }; WIDTH],
            num_children: 0,
        }
    }

    /// Promotion from the next size down. Occupied pairs are moved over in
    /// slot order, preserving insertion order.
    pub(crate) fn from_resized<const OLD_WIDTH: usize>(
        km: &mut KeyedMapping<N, OLD_WIDTH>,
    ) -> Self {
        debug_assert!(WIDTH > OLD_WIDTH);
        let mut new = KeyedMapping::new();
        let mut cnt = 0;
        for i in 0..OLD_WIDTH {
            if let Some(child) = km.children[i].take() {
                new.keys[cnt] = km.keys[i];
                new.children[cnt] = Some(child);
                cnt += 1;
            }
        }
        new.num_children = km.num_children;
        km.num_children = 0;
        new
    }

    /// Visits occupied slots in slot-index order, which equals insertion
    /// order.
    #[inline]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.keys
            .iter()
            .zip(self.children.iter())
            .filter_map(|(k, c)| c.as_ref().map(|n| (*k, n)))
    }
}

impl<N, const WIDTH: usize> Default for KeyedMapping<N, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, const WIDTH: usize> NodeMapping<N, WIDTH> for KeyedMapping<N, WIDTH> {
    #[inline]
    fn add_child(&mut self, key: u8, node: N) {
        let idx = self
            .children
            .iter()
            .position(|c| c.is_none())
            .expect("keyed mapping is full");
        self.keys[idx] = key;
        self.children[idx] = Some(node);
        self.num_children += 1;
    }

    fn seek_child(&self, key: u8) -> Option<&N> {
        self.keys
            .iter()
            .zip(self.children.iter())
            .find_map(|(k, c)| if *k == key { c.as_ref() } else { None })
    }

    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        self.keys
            .iter()
            .zip(self.children.iter_mut())
            .find_map(|(k, c)| if *k == key { c.as_mut() } else { None })
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.num_children as usize
    }
}
