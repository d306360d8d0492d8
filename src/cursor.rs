use crate::{
    LinkedSequence, MemoryPolicy, MemoryReclaimNever, Node, Position, PositionError,
    core_seq::Anchor, positions::Slot,
};
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// A read-only view of a position of a linked sequence.
///
/// The cursor borrows the sequence; therefore, its position is always valid.
/// It can be compared with [`CursorMut`], and with other cursors, by position identity.
pub struct Cursor<'a, T, M = MemoryReclaimNever, P = SplitVec<Node<T>, Recursive>>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    sequence: &'a LinkedSequence<T, M, P>,
    position: Position<T>,
}

impl<T, M, P> Clone for Cursor<'_, T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            position: self.position,
        }
    }
}

impl<'a, T, M, P> Cursor<'a, T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    pub(crate) fn new(sequence: &'a LinkedSequence<T, M, P>, position: Position<T>) -> Self {
        debug_assert!(position.is_valid_for(sequence));
        Self { sequence, position }
    }

    /// Returns the position the cursor is at.
    pub fn position(&self) -> Position<T> {
        self.position
    }

    /// Returns true if the cursor is at the end of the sequence.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns a reference to the element at the cursor;
    /// None if the cursor is at the before-begin or end position.
    pub fn current(&self) -> Option<&'a T> {
        let sequence = self.sequence;
        match self.position.slot() {
            Slot::Node { ptr, .. } => sequence.core().node(ptr).data(),
            _ => None,
        }
    }

    /// Returns a reference to the element following the cursor; None if there is none.
    pub fn peek_next(&self) -> Option<&'a T> {
        let sequence = self.sequence;
        let next = sequence.next_position(self.position).ok()?;
        sequence.get(next).ok()
    }

    /// Moves the cursor to the next position; stays at the end if it is already there.
    pub fn move_next(&mut self) {
        if let Ok(next) = self.sequence.next_position(self.position) {
            self.position = next;
        }
    }
}

/// A mutable view of a position of a linked sequence.
///
/// In addition to the capabilities of a [`Cursor`], it allows to mutate the element
/// at the cursor, and to insert or remove elements right after it.
pub struct CursorMut<'a, T, M = MemoryReclaimNever, P = SplitVec<Node<T>, Recursive>>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    sequence: &'a mut LinkedSequence<T, M, P>,
    position: Position<T>,
}

impl<'a, T, M, P> CursorMut<'a, T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    pub(crate) fn new(sequence: &'a mut LinkedSequence<T, M, P>, position: Position<T>) -> Self {
        debug_assert!(position.is_valid_for(sequence));
        Self { sequence, position }
    }

    /// Returns the position the cursor is at.
    pub fn position(&self) -> Position<T> {
        self.position
    }

    /// Returns true if the cursor is at the end of the sequence.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T, M, P> {
        Cursor::new(self.sequence, self.position)
    }

    /// Returns a reference to the element at the cursor;
    /// None if the cursor is at the before-begin or end position.
    pub fn current(&self) -> Option<&T> {
        self.sequence.get(self.position).ok()
    }

    /// Returns a mutable reference to the element at the cursor;
    /// None if the cursor is at the before-begin or end position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.sequence.get_mut(self.position).ok()
    }

    /// Returns a reference to the element following the cursor; None if there is none.
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.sequence.next_position(self.position).ok()?;
        self.sequence.get(next).ok()
    }

    /// Moves the cursor to the next position; stays at the end if it is already there.
    pub fn move_next(&mut self) {
        if let Ok(next) = self.sequence.next_position(self.position) {
            self.position = next;
        }
    }

    /// Inserts `value` right after the cursor and returns its position; the cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::End`] if the cursor is at the end.
    pub fn insert_after(&mut self, value: T) -> Result<Position<T>, PositionError> {
        self.sequence.insert_after(self.position, value)
    }

    /// Removes the element right after the cursor and returns it; the cursor does not move.
    ///
    /// Returns None if there is no element after the cursor.
    pub fn remove_next(&mut self) -> Option<T> {
        let (anchor, mut tracked) = match self.position.slot() {
            Slot::BeforeBegin => (Anchor::Head, None),
            Slot::Node { ptr, .. } => (Anchor::Node(*ptr), Some(*ptr)),
            Slot::End => return None,
        };

        let value = self.sequence.take_after(anchor, &mut tracked)?;

        // the cursor's own node might have been moved by the memory policy
        if let Some(ptr) = tracked {
            self.position = Position::node(self.sequence.memory_state(), ptr);
        }

        Some(value)
    }
}

impl<'b, T, M, P> PartialEq<Cursor<'b, T, M, P>> for Cursor<'_, T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn eq(&self, other: &Cursor<'b, T, M, P>) -> bool {
        self.position == other.position
    }
}

impl<'b, T, M, P> PartialEq<CursorMut<'b, T, M, P>> for Cursor<'_, T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn eq(&self, other: &CursorMut<'b, T, M, P>) -> bool {
        self.position == other.position
    }
}

impl<'b, T, M, P> PartialEq<Cursor<'b, T, M, P>> for CursorMut<'_, T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn eq(&self, other: &Cursor<'b, T, M, P>) -> bool {
        self.position == other.position
    }
}

impl<T, M, P> LinkedSequence<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    /// Returns a read-only cursor at the before-begin position.
    pub fn cursor_before_begin(&self) -> Cursor<'_, T, M, P> {
        Cursor::new(self, self.before_begin())
    }

    /// Returns a read-only cursor at the first element; at the end if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq = LinkedSequence::from(['x', 'y']);
    ///
    /// let mut cursor = seq.cursor_front();
    /// assert_eq!(cursor.current(), Some(&'x'));
    /// assert_eq!(cursor.peek_next(), Some(&'y'));
    ///
    /// cursor.move_next();
    /// cursor.move_next();
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T, M, P> {
        Cursor::new(self, self.begin())
    }

    /// Returns a read-only cursor at the given `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the `position` is not valid for this sequence.
    pub fn cursor_at(&self, position: Position<T>) -> Result<Cursor<'_, T, M, P>, PositionError> {
        self.check_position(&position)?;
        Ok(Cursor::new(self, position))
    }

    /// Returns a mutable cursor at the before-begin position.
    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T, M, P> {
        let position = self.before_begin();
        CursorMut::new(self, position)
    }

    /// Returns a mutable cursor at the first element; at the end if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = LinkedSequence::from([1, 2, 3]);
    ///
    /// let mut cursor = seq.cursor_front_mut();
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 10;
    /// }
    /// assert_eq!(cursor.remove_next(), Some(2));
    /// cursor.insert_after(20).unwrap();
    ///
    /// assert!(seq.iter().eq([10, 20, 3].iter()));
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, M, P> {
        let position = self.begin();
        CursorMut::new(self, position)
    }

    /// Returns a mutable cursor at the given `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the `position` is not valid for this sequence.
    pub fn cursor_at_mut(
        &mut self,
        position: Position<T>,
    ) -> Result<CursorMut<'_, T, M, P>, PositionError> {
        self.check_position(&position)?;
        Ok(CursorMut::new(self, position))
    }

    fn check_position(&self, position: &Position<T>) -> Result<(), PositionError> {
        match position.slot() {
            Slot::BeforeBegin | Slot::End => Ok(()),
            Slot::Node { ptr, state } => self.validate_node(ptr, *state),
        }
    }
}
