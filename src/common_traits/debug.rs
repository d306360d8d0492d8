use crate::{LinkedSequence, MemoryPolicy, Node};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<T, M, P> Debug for LinkedSequence<T, M, P>
where
    T: Debug,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
