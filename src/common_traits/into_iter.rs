use crate::{
    LinkedSequence, MemoryPolicy, MemoryReclaimNever, Node,
    iter::{Iter, IterMut},
};
use core::iter::FusedIterator;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// Consuming iterator over the elements of a linked sequence, from front to back.
pub struct IntoIter<T, M = MemoryReclaimNever, P = SplitVec<Node<T>, Recursive>>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    sequence: LinkedSequence<T, M, P>,
}

impl<T, M, P> Iterator for IntoIter<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.len(), Some(self.sequence.len()))
    }
}

impl<T, M, P> ExactSizeIterator for IntoIter<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
}

impl<T, M, P> FusedIterator for IntoIter<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
}

impl<T, M, P> IntoIterator for LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    type Item = T;
    type IntoIter = IntoIter<T, M, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { sequence: self }
    }
}

impl<'a, T, M, P> IntoIterator for &'a LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, M, P> IntoIterator for &'a mut LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
