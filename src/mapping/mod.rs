pub(crate) mod direct_mapping;
pub(crate) mod indexed_mapping;
pub(crate) mod keyed_mapping;

/// Common contract for the per-layout byte-to-child mappings.
///
/// Capacity is part of the type; a mapping never reallocates. Filling past
/// `NUM_CHILDREN` is the caller's bug, handled by promoting the node to the
/// next wider layout before adding.
pub(crate) trait NodeMapping<N, const NUM_CHILDREN: usize> {
    const NUM_CHILDREN: usize = NUM_CHILDREN;

    fn add_child(&mut self, key: u8, node: N);
    fn seek_child(&self, key: u8) -> Option<&N>;
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N>;
    fn num_children(&self) -> usize;
    fn width(&self) -> usize {
        Self::NUM_CHILDREN
    }
}
