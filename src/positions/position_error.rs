use core::fmt::{Debug, Display};

/// Error cases of using a position that cannot serve the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// BeforeBegin => The before-begin position does not hold a value.
    /// It can only be used as the anchor of `insert_after` and `erase_after`.
    BeforeBegin,
    /// End => The end position marks the end of the sequence.
    /// It neither holds a value nor has a successor that could be inserted or erased.
    End,
    /// NoSuccessor => `erase_after` is called on a position which is the last of the sequence.
    NoSuccessor,
    /// RemovedNode => Referenced node is erased from the sequence.
    /// A position can only be used while its node still belongs to the sequence.
    RemovedNode,
    /// OutOfBounds => Position does not point to the current nodes of the sequence.
    /// This might be due to either of the following:
    /// * the position is being used with a sequence which is different than the one it was created from,
    /// * the node that the position is pointing to does not belong to the sequence any more due to
    ///   shrinking of the node storage.
    OutOfBounds,
    /// ReorganizedCollection => Nodes of the sequence are cleared or re-organized in order to reclaim memory of closed nodes.
    /// Such a reorganization happens:
    /// * whenever the sequence is cleared or re-assigned by `clone_from`,
    /// * after an erasure if the utilization level drops below a threshold on `MemoryReclaimOnThreshold`,
    /// * only if the `reclaim_closed_nodes()` is manually called when `MemoryReclaimNever` is used.
    ReorganizedCollection,
}

impl Display for PositionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <PositionError as Debug>::fmt(self, f)
    }
}

impl core::error::Error for PositionError {}
