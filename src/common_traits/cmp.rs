use crate::{LinkedSequence, MemoryPolicy, Node};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use orx_pinned_vec::PinnedVec;

impl<T, M, P, M2, P2> PartialEq<LinkedSequence<T, M2, P2>> for LinkedSequence<T, M, P>
where
    T: PartialEq,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
    M2: MemoryPolicy,
    P2: PinnedVec<Node<T>>,
{
    /// Two sequences are equal iff they have the same length and equal elements in the same order.
    fn eq(&self, other: &LinkedSequence<T, M2, P2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, M, P> Eq for LinkedSequence<T, M, P>
where
    T: Eq,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
}

impl<T, M, P> PartialOrd for LinkedSequence<T, M, P>
where
    T: PartialOrd,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    /// Lexicographical comparison of the elements; a proper prefix is less than the longer sequence.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, M, P> Ord for LinkedSequence<T, M, P>
where
    T: Ord,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, M, P> Hash for LinkedSequence<T, M, P>
where
    T: Hash,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for x in self.iter() {
            x.hash(state);
        }
    }
}
