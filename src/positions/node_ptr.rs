use crate::Node;
use core::fmt::Debug;

/// A wrapper around a pointer to a node of the sequence.
///
/// The pointer is never dereferenced by the crate before it is validated against
/// the node storage of the sequence it is used with.
pub struct NodePtr<T> {
    ptr: *mut Node<T>,
}

unsafe impl<T: Send> Send for NodePtr<T> {}

unsafe impl<T: Sync> Sync for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for NodePtr<T> {}

impl<T> core::hash::Hash for NodePtr<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<T> Debug for NodePtr<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePtr")
            .field("ptr", &(self.ptr as usize))
            .finish()
    }
}

// Only the pointer is copied, so "T" does not need to be copy itself.
impl<T> Copy for NodePtr<T> {}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> NodePtr<T> {
    /// Creates a new node pointer by wrapping the given `ptr`.
    pub(crate) fn new(ptr: *const Node<T>) -> Self {
        Self {
            ptr: ptr as *mut Node<T>,
        }
    }

    /// Returns the const raw pointer to the node.
    #[inline(always)]
    pub(crate) fn ptr(&self) -> *const Node<T> {
        self.ptr
    }

    /// Returns a reference to the node.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the node storage this pointer is created from
    /// is alive and has not been reorganized since.
    #[inline(always)]
    pub(crate) unsafe fn node<'a>(&self) -> &'a Node<T> {
        unsafe { &*self.ptr }
    }

    /// Returns a mutable reference to the node.
    ///
    /// # Safety
    ///
    /// Same requirements as [`NodePtr::node`]; additionally, no other reference
    /// to the same node may be alive.
    #[inline(always)]
    pub(crate) unsafe fn node_mut<'a>(&self) -> &'a mut Node<T> {
        unsafe { &mut *self.ptr }
    }
}
