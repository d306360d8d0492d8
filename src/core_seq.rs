use crate::{Node, NodePtr, Utilization};
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// Anchor of an insertion or erasure: either the before-begin sentinel or an active node.
pub(crate) enum Anchor<T> {
    Head,
    Node(NodePtr<T>),
}

impl<T> Copy for Anchor<T> {}

impl<T> Clone for Anchor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

/// Core of the linked sequence: the pinned node storage, the sentinel link to the
/// first node, the link to the last node and the number of active nodes.
///
/// All structural changes of the chain go through [`CoreSeq`] so that the head, tail
/// and length are kept consistent in a single place.
pub struct CoreSeq<T, P = SplitVec<Node<T>, Recursive>>
where
    P: PinnedVec<Node<T>>,
{
    nodes: P,
    head: Option<NodePtr<T>>,
    tail: Option<NodePtr<T>>,
    len: usize,
}

impl<T, P> Default for CoreSeq<T, P>
where
    P: PinnedVec<Node<T>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> CoreSeq<T, P>
where
    P: PinnedVec<Node<T>>,
{
    /// Creates a new empty core.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            nodes: P::default(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // get

    /// Returns current node utilization of the storage.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns the number of active nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not there exists any active node.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns the link to the first node.
    #[inline(always)]
    pub(crate) fn head(&self) -> Option<NodePtr<T>> {
        self.head
    }

    /// Returns the link to the last node.
    #[inline(always)]
    pub(crate) fn tail(&self) -> Option<NodePtr<T>> {
        self.tail
    }

    /// Returns whether or not `node_ptr` points into the node storage.
    #[inline(always)]
    pub(crate) fn contains(&self, node_ptr: &NodePtr<T>) -> bool {
        self.nodes.contains_ptr(node_ptr.ptr())
    }

    /// Returns a reference to the node with the given `node_ptr`.
    ///
    /// The pointer must be obtained from this core's links or validated by [`CoreSeq::contains`].
    #[inline(always)]
    pub(crate) fn node(&self, node_ptr: &NodePtr<T>) -> &Node<T> {
        debug_assert!(self.contains(node_ptr));
        unsafe { node_ptr.node() }
    }

    /// Returns a mutable reference to the node with the given `node_ptr`.
    ///
    /// The pointer must be obtained from this core's links or validated by [`CoreSeq::contains`].
    #[inline(always)]
    pub(crate) fn node_mut(&mut self, node_ptr: &NodePtr<T>) -> &mut Node<T> {
        debug_assert!(self.contains(node_ptr));
        unsafe { node_ptr.node_mut() }
    }

    /// Returns the successor link of the `anchor`.
    #[inline(always)]
    pub(crate) fn next_of(&self, anchor: Anchor<T>) -> Option<NodePtr<T>> {
        match anchor {
            Anchor::Head => self.head,
            Anchor::Node(ptr) => self.node(&ptr).next().copied(),
        }
    }

    /// Returns the position of the node with the given `node_ptr` in the storage.
    ///
    /// # Panics
    ///
    /// Panics if the pointer does not belong to the storage.
    fn position_of_unchecked(&self, node_ptr: &NodePtr<T>) -> usize {
        self.nodes
            .index_of_ptr(node_ptr.ptr())
            .expect("Pointer does not belong to the sequence")
    }

    /// Returns the pointer of the node at the given `node_position` of the storage.
    ///
    /// # Panics
    ///
    /// Panics if the `node_position` is out of bounds.
    fn node_ptr_at_pos(&self, node_position: usize) -> NodePtr<T> {
        let ptr = self.nodes.get_ptr(node_position).expect("out-of-bounds");
        NodePtr::new(ptr as *const Node<T>)
    }

    // mut

    /// Pushes a new free node holding `data` to the storage and returns its pointer.
    ///
    /// The node is not linked to the chain yet; see [`CoreSeq::link_after`].
    pub(crate) fn push(&mut self, data: T) -> NodePtr<T> {
        let ptr = self.nodes.push_get_ptr(Node::new_free_node(data));
        self.len += 1;
        NodePtr::new(ptr as *const Node<T>)
    }

    fn set_next_of(&mut self, anchor: Anchor<T>, next: Option<NodePtr<T>>) {
        match anchor {
            Anchor::Head => self.head = next,
            Anchor::Node(ptr) => self.node_mut(&ptr).set_next(next),
        }
    }

    /// Links the free node at `node_ptr` right after the `anchor`.
    ///
    /// The tail is moved to the new node when it becomes the last node of the chain.
    pub(crate) fn link_after(&mut self, anchor: Anchor<T>, node_ptr: NodePtr<T>) {
        let next = self.next_of(anchor);
        self.node_mut(&node_ptr).set_next(next);
        self.set_next_of(anchor, Some(node_ptr));

        if next.is_none() {
            self.tail = Some(node_ptr);
        }
    }

    /// Unlinks the node right after the `anchor`, closes it and returns its value.
    /// Returns None if the `anchor` is the last node of the chain.
    ///
    /// The tail is moved back to the `anchor` when the last node is unlinked.
    pub(crate) fn unlink_after(&mut self, anchor: Anchor<T>) -> Option<T> {
        let removed = self.next_of(anchor)?;
        let next = self.node(&removed).next().copied();
        self.set_next_of(anchor, next);

        if next.is_none() {
            self.tail = match anchor {
                Anchor::Head => None,
                Anchor::Node(ptr) => Some(ptr),
            };
        }

        let data = self.node_mut(&removed).close();
        debug_assert!(data.is_some());
        self.len -= 1;
        data
    }

    /// Drops all nodes.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Moves active nodes to the front of the storage, following the order of the chain,
    /// and truncates the storage so that only active nodes remain.
    ///
    /// If `tracked` points at a node that is moved, it is updated to the new location.
    ///
    /// Returns false if there was no closed node to reclaim; true if the storage is reorganized.
    pub fn reclaim_closed_nodes(&mut self, tracked: &mut Option<NodePtr<T>>) -> bool {
        let len = self.len;
        if self.nodes.len() == len {
            return false;
        }

        let mut vacant = 0;
        let mut prev = Anchor::Head;
        let mut current = self.head;

        while let Some(ptr) = current {
            let occupied = self.position_of_unchecked(&ptr);

            let ptr = match occupied < len {
                true => ptr,
                false => {
                    while self.nodes[vacant].is_active() {
                        vacant += 1;
                    }

                    self.nodes.swap(vacant, occupied);
                    let moved = self.node_ptr_at_pos(vacant);
                    self.set_next_of(prev, Some(moved));

                    if self.tail == Some(ptr) {
                        self.tail = Some(moved);
                    }
                    if *tracked == Some(ptr) {
                        *tracked = Some(moved);
                    }

                    vacant += 1;
                    moved
                }
            };

            current = self.node(&ptr).next().copied();
            prev = Anchor::Node(ptr);
        }

        self.nodes.truncate(len);
        true
    }
}
