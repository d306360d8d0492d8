use crate::{CoreSeq, Node, NodePtr};
use orx_pinned_vec::PinnedVec;

/// Policy which determines how the memory of closed nodes will be reclaimed and made useful.
///
/// Two implementors are provided:
/// * [`MemoryReclaimNever`] which never reclaims the holes left by popped or erased; i.e., closed, nodes.
///   This is the default policy since a `Position` is then never invalidated due to memory reorganization.
///   Note that it still allows to reclaim closed nodes manually.
///   Therefore, it fits very well to situations where
///   * removals from the sequence are not substantial, or
///   * having valid positions is crucial.
/// * [`MemoryReclaimOnThreshold::<D>`] reclaims unused holes whenever the utilization of the memory falls below a constant threshold determined by `D`.
///
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
pub trait MemoryPolicy: Clone + Default {
    /// Decides whether or not to reclaim closed nodes right after a node of `core` is closed,
    /// and reclaims them if so.
    ///
    /// Assume that **A** below stands for active nodes and **x** designates a closed node.
    /// If the underlying storage has the following layout at a certain stage:
    /// * `[ x, x, A, x, A, A, A, x, A, x ]`
    ///
    /// the reclaimer first moves the active nodes so that we have:
    /// * `[ A, A, A, A, A, x, x, x, x, x ]`
    ///
    /// and next trims the storage to reclaim memory
    /// * `[ A, A, A, A, A ]`
    ///
    /// The order of the **A**s in the storage is irrelevant; the order of the sequence is defined by the links among nodes.
    ///
    /// When a node is moved, `tracked` is updated to its new location if it was pointing at it.
    ///
    /// Returns whether or not the node storage has been reorganized.
    fn reclaim_closed_nodes<T, P>(
        core: &mut CoreSeq<T, P>,
        tracked: &mut Option<NodePtr<T>>,
    ) -> bool
    where
        P: PinnedVec<Node<T>>;
}
