use crate::NodePtr;
use core::fmt::Debug;

/// Node of the linked sequence.
///
/// A node is **active** while it holds a value and belongs to the chain,
/// and **closed** once its value has been taken out by an erasure.
/// Closed nodes stay in the storage as holes until the memory policy,
/// or a manual call to `reclaim_closed_nodes`, compacts the storage.
pub struct Node<T> {
    data: Option<T>,
    next: Option<NodePtr<T>>,
}

unsafe impl<T: Send> Send for Node<T> {}

unsafe impl<T: Sync> Sync for Node<T> {}

impl<T> Node<T> {
    /// Creates a new active node holding `data` and linked to nothing.
    pub(crate) fn new_free_node(data: T) -> Self {
        Self {
            data: Some(data),
            next: None,
        }
    }

    /// Returns a reference to the value of the node; None if the node is closed.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the link to the successor node; None if this is the last node or the node is closed.
    pub fn next(&self) -> Option<&NodePtr<T>> {
        self.next.as_ref()
    }

    /// Returns true if the node is active, false if it is closed.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the node is closed, false if it is active.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    // mut

    pub(crate) fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub(crate) fn set_next(&mut self, next: Option<NodePtr<T>>) {
        self.next = next;
    }

    /// Closes the node, clears its link and returns its value.
    ///
    /// Returns None if the node was already closed.
    pub(crate) fn close(&mut self) -> Option<T> {
        self.next = None;
        self.data.take()
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("next", &self.next)
            .finish()
    }
}
