/// Snapshot of how the node storage of a linked sequence is used.
///
/// Every push adds an active node to the storage. Every erasure turns an active node
/// into a closed one, which keeps occupying its slot until the memory policy, or a
/// manual `reclaim_closed_nodes` call, reclaims it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Utilization {
    /// Number of node slots already allocated by the storage.
    pub capacity: usize,
    /// Number of active nodes; equals the length of the sequence.
    pub num_active_nodes: usize,
    /// Number of erased nodes whose slots are not reclaimed yet.
    pub num_closed_nodes: usize,
}

impl Utilization {
    /// Number of occupied slots of the storage, active or closed; never exceeds the `capacity`.
    pub fn num_used_slots(&self) -> usize {
        self.num_active_nodes + self.num_closed_nodes
    }
}
