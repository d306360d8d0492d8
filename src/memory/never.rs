use super::policy::MemoryPolicy;
use crate::{CoreSeq, Node, NodePtr};
use orx_pinned_vec::PinnedVec;

/// A do-nothing `MemoryPolicy` which would never reclaim the memory of the closed nodes, leaving them as holes in the underlying storage.
///
/// This approach has the advantage that a `Position` is never invalidated due to an automatic memory reorganization.
/// Only erasing its own node, or clearing the sequence, invalidates a position.
///
/// Furthermore, node utilization can still be maximized by manually calling `reclaim_closed_nodes` method.
///
/// Note that the storage is released whenever the sequence becomes empty by an erasure.
/// However, a sequence which is never drained, such as a steady-state queue which keeps pushing
/// to the back and popping from the front, keeps growing its storage until `reclaim_closed_nodes`
/// is called.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl MemoryPolicy for MemoryReclaimNever {
    #[inline(always)]
    fn reclaim_closed_nodes<T, P>(
        _core: &mut CoreSeq<T, P>,
        _tracked: &mut Option<NodePtr<T>>,
    ) -> bool
    where
        P: PinnedVec<Node<T>>,
    {
        false
    }
}
