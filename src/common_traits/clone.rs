use crate::{LinkedSequence, MemoryPolicy, Node};
use orx_pinned_vec::PinnedVec;

impl<T, M, P> Clone for LinkedSequence<T, M, P>
where
    T: Clone,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    /// Creates an independent sequence with clones of the elements in the same order.
    ///
    /// The clone is built from scratch by pushing to the back; it shares no node with `self`.
    fn clone(&self) -> Self {
        let mut clone = Self::default();
        for x in self.iter() {
            clone.push_back(x.clone());
        }
        clone
    }

    /// Replaces the contents of `self` by clones of the elements of `source`.
    ///
    /// A complete copy of the `source` is built first, and is then swapped into `self`;
    /// hence, `self` is untouched if cloning an element panics.
    /// All element positions of `self` created before the call are invalidated.
    fn clone_from(&mut self, source: &Self) {
        let mut clone = source.clone();
        let state = self.memory_state().successor_state();
        self.swap(&mut clone);
        self.set_memory_state(state);
    }
}
