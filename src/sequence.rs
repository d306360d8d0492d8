use crate::{
    CoreSeq, MemoryPolicy, MemoryReclaimNever, MemoryState, Node, NodePtr, Position,
    PositionError, Utilization,
    core_seq::Anchor,
    iter::{Iter, IterMut},
    positions::Slot,
};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// `LinkedSequence` is a singly linked, forward iterable sequence with constant time
/// insertion and erasure at the front, and right after any position.
///
/// The sequence has a **before-begin** position which never holds a value. Inserting after
/// it is inserting at the front, and erasing after it is erasing the front; hence, the same
/// two operations [`insert_after`] and [`erase_after`] express every structural change.
///
/// Nodes are stored in a pinned vector, by default `SplitVec<Node<T>, Recursive>`; therefore,
/// they never move while the sequence grows. [`Position`]s are lightweight handles to these
/// nodes which are validated at every use.
///
/// The sequence is defined by the following generic arguments:
/// * `T`: type of the elements.
/// * `M`: memory policy deciding when the holes left by erased nodes are reclaimed, see [`MemoryPolicy`].
///   Default [`MemoryReclaimNever`] never reclaims implicitly so that positions are only invalidated
///   by erasing their own node or clearing the sequence.
/// * `P`: pinned vector storing the nodes.
///
/// # Examples
///
/// ```rust
/// use orx_linked_sequence::*;
///
/// let mut seq = LinkedSequence::from([1, 2, 3]);
/// assert_eq!(seq.len(), 3);
///
/// seq.push_front(0);
/// assert!(seq.iter().eq([0, 1, 2, 3].iter()));
///
/// seq.pop_front();
/// seq.pop_front();
/// assert!(seq.iter().eq([2, 3].iter()));
///
/// let nine = seq.insert_after(seq.before_begin(), 9).unwrap();
/// assert_eq!(seq.get(nine), Ok(&9));
/// assert!(seq.iter().eq([9, 2, 3].iter()));
///
/// let next = seq.erase_after(seq.before_begin()).unwrap();
/// assert_eq!(seq.get(next), Ok(&2));
/// assert!(seq.iter().eq([2, 3].iter()));
///
/// // the position of the erased node is no longer usable
/// assert_eq!(seq.get(nine), Err(PositionError::RemovedNode));
/// ```
///
/// [`insert_after`]: LinkedSequence::insert_after
/// [`erase_after`]: LinkedSequence::erase_after
pub struct LinkedSequence<T, M = MemoryReclaimNever, P = SplitVec<Node<T>, Recursive>>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    core: CoreSeq<T, P>,
    state: MemoryState,
    phantom: PhantomData<M>,
}

impl<T, M, P> Default for LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn default() -> Self {
        Self {
            core: CoreSeq::new(),
            state: MemoryState::default(),
            phantom: PhantomData,
        }
    }
}

impl<T> LinkedSequence<T> {
    /// Creates a new empty sequence with the default memory policy and node storage.
    ///
    /// Sequences with other policies or storages are created by `Default::default()`
    /// or by collecting an iterator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M, P> LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    /// Creates a sequence holding `values` in the same order.
    ///
    /// The values are visited backwards and pushed to the front one by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq: LinkedSequence<_> = LinkedSequence::from_values(vec!['a', 'b', 'c']);
    /// assert!(seq.iter().eq(['a', 'b', 'c'].iter()));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        P: Default,
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut sequence = Self::default();
        for value in values.into_iter().rev() {
            sequence.push_front(value);
        }
        sequence
    }

    // get

    /// Returns the number of elements in the sequence, in constant time.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns whether or not the sequence is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Returns current node utilization of the underlying storage.
    pub fn utilization(&self) -> Utilization {
        self.core.utilization()
    }

    /// Returns the current memory state of the sequence.
    ///
    /// Element positions are bound to the memory state they are created in.
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Returns the before-begin position of the sequence.
    ///
    /// It does not hold a value; calling [`get`] with it returns [`PositionError::BeforeBegin`].
    /// It exists to be passed to [`insert_after`] and [`erase_after`] to mutate the front.
    ///
    /// [`get`]: LinkedSequence::get
    /// [`insert_after`]: LinkedSequence::insert_after
    /// [`erase_after`]: LinkedSequence::erase_after
    #[inline(always)]
    pub fn before_begin(&self) -> Position<T> {
        Position::before_begin()
    }

    /// Returns the position of the first element; the end position if the sequence is empty.
    #[inline(always)]
    pub fn begin(&self) -> Position<T> {
        Position::from_link(self.state, self.core.head())
    }

    /// Returns the end position of the sequence.
    ///
    /// It marks the end of the sequence and never holds a value.
    #[inline(always)]
    pub fn end(&self) -> Position<T> {
        Position::end()
    }

    /// Returns the position of the last element; the end position if the sequence is empty.
    pub fn back_position(&self) -> Position<T> {
        Position::from_link(self.state, self.core.tail())
    }

    /// Returns the position following the given `position`.
    ///
    /// * The position following before-begin is [`begin`].
    /// * The position following the last element is [`end`].
    /// * The position following end is end again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq = LinkedSequence::from([1, 2]);
    ///
    /// let first = seq.next_position(seq.before_begin()).unwrap();
    /// assert_eq!(first, seq.begin());
    ///
    /// let second = seq.next_position(first).unwrap();
    /// assert_eq!(seq.get(second), Ok(&2));
    ///
    /// let end = seq.next_position(second).unwrap();
    /// assert!(end.is_end());
    /// assert_eq!(seq.next_position(end), Ok(seq.end()));
    /// ```
    ///
    /// [`begin`]: LinkedSequence::begin
    /// [`end`]: LinkedSequence::end
    pub fn next_position(&self, position: Position<T>) -> Result<Position<T>, PositionError> {
        match position.slot() {
            Slot::End => Ok(Position::end()),
            _ => {
                let anchor = self.anchor_of(&position)?;
                Ok(Position::from_link(self.state, self.core.next_of(anchor)))
            }
        }
    }

    /// Returns a reference to the element at the given `position`.
    ///
    /// Returns an error if the position does not point at an element of this sequence.
    pub fn get(&self, position: Position<T>) -> Result<&T, PositionError> {
        let ptr = self.element_of(&position)?;
        self.core
            .node(&ptr)
            .data()
            .ok_or(PositionError::RemovedNode)
    }

    /// Returns a mutable reference to the element at the given `position`.
    ///
    /// Returns an error if the position does not point at an element of this sequence.
    pub fn get_mut(&mut self, position: Position<T>) -> Result<&mut T, PositionError> {
        let ptr = self.element_of(&position)?;
        self.core
            .node_mut(&ptr)
            .data_mut()
            .ok_or(PositionError::RemovedNode)
    }

    /// Returns a reference to the first element; None if the sequence is empty.
    pub fn front(&self) -> Option<&T> {
        self.core.head().and_then(|ptr| self.core.node(&ptr).data())
    }

    /// Returns a mutable reference to the first element; None if the sequence is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let ptr = self.core.head()?;
        self.core.node_mut(&ptr).data_mut()
    }

    /// Returns a reference to the last element; None if the sequence is empty.
    ///
    /// The last element is tracked; hence, this is a constant time operation.
    pub fn back(&self) -> Option<&T> {
        self.core.tail().and_then(|ptr| self.core.node(&ptr).data())
    }

    /// Returns a mutable reference to the last element; None if the sequence is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let ptr = self.core.tail()?;
        self.core.node_mut(&ptr).data_mut()
    }

    /// Returns an iterator of references to the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.core.head(), self.len())
    }

    /// Returns an iterator of mutable references to the elements from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.core.head(), self.len())
    }

    // mut

    /// Inserts `value` right after the given `position` and returns the position of the new element.
    ///
    /// The `position` can be the before-begin position, in which case the value becomes the front,
    /// or the position of any element of this sequence.
    /// The operation is constant time and does not invalidate any existing position.
    ///
    /// The new node is linked to the chain only after it is completely constructed;
    /// an error leaves the sequence unchanged.
    ///
    /// # Errors
    ///
    /// * [`PositionError::End`] if `position` is the end position,
    /// * [`PositionError::RemovedNode`], [`PositionError::OutOfBounds`] or
    ///   [`PositionError::ReorganizedCollection`] if `position` is not valid for this sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = LinkedSequence::from([1, 3]);
    ///
    /// let one = seq.begin();
    /// let two = seq.insert_after(one, 2).unwrap();
    /// seq.insert_after(two, 42).unwrap();
    /// seq.insert_after(seq.before_begin(), 0).unwrap();
    /// assert!(seq.iter().eq([0, 1, 2, 42, 3].iter()));
    ///
    /// assert_eq!(seq.insert_after(seq.end(), 7), Err(PositionError::End));
    /// ```
    pub fn insert_after(
        &mut self,
        position: Position<T>,
        value: T,
    ) -> Result<Position<T>, PositionError> {
        let anchor = self.anchor_of(&position)?;
        Ok(self.insert_at_anchor(anchor, value))
    }

    /// Erases the element right after the given `position` and returns the position
    /// of the element that follows the erased one; the end position if the erased
    /// element was the last.
    ///
    /// The operation is constant time, unless the memory policy decides to reclaim closed nodes.
    /// It invalidates only the position of the erased element, unless nodes are reorganized.
    /// Erasing the last remaining element releases the node storage.
    ///
    /// # Errors
    ///
    /// * [`PositionError::End`] if `position` is the end position,
    /// * [`PositionError::NoSuccessor`] if `position` is the last position of the sequence,
    /// * [`PositionError::RemovedNode`], [`PositionError::OutOfBounds`] or
    ///   [`PositionError::ReorganizedCollection`] if `position` is not valid for this sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = LinkedSequence::from([1, 2, 3]);
    ///
    /// let three = seq.erase_after(seq.begin()).unwrap();
    /// assert_eq!(seq.get(three), Ok(&3));
    /// assert!(seq.iter().eq([1, 3].iter()));
    ///
    /// assert_eq!(seq.erase_after(three), Err(PositionError::NoSuccessor));
    ///
    /// let end = seq.erase_after(seq.begin()).unwrap();
    /// assert!(end.is_end());
    /// assert!(seq.iter().eq([1].iter()));
    /// ```
    pub fn erase_after(&mut self, position: Position<T>) -> Result<Position<T>, PositionError> {
        let anchor = self.anchor_of(&position)?;
        let removed = self
            .core
            .next_of(anchor)
            .ok_or(PositionError::NoSuccessor)?;

        let mut next = self.core.node(&removed).next().copied();
        let _ = self.take_after(anchor, &mut next);
        Ok(Position::from_link(self.state, next))
    }

    /// Pushes `value` to the front of the sequence and returns its position.
    ///
    /// Equivalent to `insert_after(before_begin(), value)`.
    pub fn push_front(&mut self, value: T) -> Position<T> {
        self.insert_at_anchor(Anchor::Head, value)
    }

    /// Pushes `value` to the back of the sequence, in constant time, and returns its position.
    pub fn push_back(&mut self, value: T) -> Position<T> {
        let anchor = match self.core.tail() {
            Some(ptr) => Anchor::Node(ptr),
            None => Anchor::Head,
        };
        self.insert_at_anchor(anchor, value)
    }

    /// Removes the front element and returns it; returns None and does nothing if the sequence is empty.
    ///
    /// Popping the last remaining element releases the node storage; hence, a sequence
    /// used as a queue does not keep the holes of its drained elements.
    pub fn pop_front(&mut self) -> Option<T> {
        self.take_after(Anchor::Head, &mut None)
    }

    /// Drops all elements of the sequence.
    ///
    /// All element positions created before clearing are invalidated.
    pub fn clear(&mut self) {
        self.core.clear();
        self.state = self.state.successor_state();
    }

    /// Exchanges the entire contents of this sequence with the `other` in constant time.
    ///
    /// Element positions follow their nodes; i.e., a position obtained from this sequence
    /// before the swap is valid for the `other` sequence after the swap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut a = LinkedSequence::from([1, 2]);
    /// let mut b = LinkedSequence::from([3]);
    /// let two = a.back_position();
    ///
    /// a.swap(&mut b);
    ///
    /// assert!(a.iter().eq([3].iter()));
    /// assert!(b.iter().eq([1, 2].iter()));
    /// assert_eq!(b.get(two), Ok(&2));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Reclaims the holes left by erased nodes, regardless of the memory policy.
    ///
    /// If there exists any closed node, active nodes are moved to the front of the storage
    /// and the storage is truncated; in which case, all element positions created before
    /// the call are invalidated.
    pub fn reclaim_closed_nodes(&mut self) {
        if self.core.reclaim_closed_nodes(&mut None) {
            self.state = self.state.successor_state();
        }
    }

    // helpers

    pub(crate) fn validate_node(
        &self,
        ptr: &NodePtr<T>,
        state: MemoryState,
    ) -> Result<(), PositionError> {
        match state == self.state {
            false => Err(PositionError::ReorganizedCollection),
            true => match self.core.contains(ptr) {
                false => Err(PositionError::OutOfBounds),
                true => match self.core.node(ptr).is_active() {
                    true => Ok(()),
                    false => Err(PositionError::RemovedNode),
                },
            },
        }
    }

    /// Anchor that insertions and erasures after `position` are relative to.
    pub(crate) fn anchor_of(&self, position: &Position<T>) -> Result<Anchor<T>, PositionError> {
        match position.slot() {
            Slot::BeforeBegin => Ok(Anchor::Head),
            Slot::End => Err(PositionError::End),
            Slot::Node { ptr, state } => {
                self.validate_node(ptr, *state)?;
                Ok(Anchor::Node(*ptr))
            }
        }
    }

    /// Node of the element at `position`.
    pub(crate) fn element_of(&self, position: &Position<T>) -> Result<NodePtr<T>, PositionError> {
        match position.slot() {
            Slot::BeforeBegin => Err(PositionError::BeforeBegin),
            Slot::End => Err(PositionError::End),
            Slot::Node { ptr, state } => {
                self.validate_node(ptr, *state)?;
                Ok(*ptr)
            }
        }
    }

    pub(crate) fn set_memory_state(&mut self, state: MemoryState) {
        self.state = state;
    }

    pub(crate) fn core(&self) -> &CoreSeq<T, P> {
        &self.core
    }

    pub(crate) fn insert_at_anchor(&mut self, anchor: Anchor<T>, value: T) -> Position<T> {
        let ptr = self.core.push(value);
        self.core.link_after(anchor, ptr);
        Position::node(self.state, ptr)
    }

    /// Unlinks the element after `anchor` and lets the memory policy reclaim closed nodes.
    ///
    /// Once the last element is taken out, the storage is released regardless of the policy.
    ///
    /// `tracked` is kept pointing at the same node if the nodes are reorganized.
    pub(crate) fn take_after(
        &mut self,
        anchor: Anchor<T>,
        tracked: &mut Option<NodePtr<T>>,
    ) -> Option<T> {
        let data = self.core.unlink_after(anchor)?;

        let reorganized = match self.core.is_empty() {
            true => {
                debug_assert!(tracked.is_none());
                self.core.clear();
                true
            }
            false => M::reclaim_closed_nodes(&mut self.core, tracked),
        };

        if reorganized {
            self.state = self.state.successor_state();
        }

        Some(data)
    }
}

/// Exchanges the entire contents of `lhs` and `rhs` in constant time.
///
/// Equivalent to `lhs.swap(rhs)`.
pub fn swap<T, M, P>(lhs: &mut LinkedSequence<T, M, P>, rhs: &mut LinkedSequence<T, M, P>)
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    lhs.swap(rhs);
}
