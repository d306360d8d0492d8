use crate::{LinkedSequence, MemoryPolicy, Node};
use orx_pinned_vec::PinnedVec;

impl<T, M, P> FromIterator<T> for LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::default();
        sequence.extend(iter);
        sequence
    }
}

impl<T, M, P> Extend<T> for LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    /// Pushes all elements of `iter` to the back of the sequence, in order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x);
        }
    }
}

impl<'a, T, M, P> Extend<&'a T> for LinkedSequence<T, M, P>
where
    T: Clone + 'a,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x.clone());
        }
    }
}
