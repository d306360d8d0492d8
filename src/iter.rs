use crate::{Node, NodePtr};
use core::{iter::FusedIterator, marker::PhantomData};

/// Iterator over references to the elements of a linked sequence, from front to back.
pub struct Iter<'a, T> {
    current: Option<NodePtr<T>>,
    remaining: usize,
    phantom: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<NodePtr<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            phantom: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.current?;
        // links of a borrowed sequence point at its active nodes
        let node: &'a Node<T> = unsafe { ptr.node() };
        self.current = node.next().copied();
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to the elements of a linked sequence, from front to back.
pub struct IterMut<'a, T> {
    current: Option<NodePtr<T>>,
    remaining: usize,
    phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: Option<NodePtr<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.current?;
        // each node is visited once; hence, returned references never alias
        let node: &'a mut Node<T> = unsafe { ptr.node_mut() };
        self.current = node.next().copied();
        self.remaining -= 1;
        node.data_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
