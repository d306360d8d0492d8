use super::NodePtr;
use crate::{LinkedSequence, MemoryPolicy, MemoryState, Node};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

/// A position in a linked sequence providing constant time access to its
/// element and constant time insertion and erasure right after it.
///
/// A position is one of:
/// * the **before-begin** position of the sequence, which never holds a value and
///   exists to anchor insertions and erasures at the front of the sequence,
/// * an **element** position pointing at a node of the sequence,
/// * the **end** position, which marks the end of the sequence.
///
/// Positions are lightweight `Copy` handles; they do not borrow the sequence.
/// Every use of an element position is validated against the sequence, so that
/// using a position of an erased node, or of a different sequence, results in a
/// [`PositionError`](crate::PositionError) rather than undefined behavior.
pub struct Position<T> {
    slot: Slot<T>,
}

pub(crate) enum Slot<T> {
    BeforeBegin,
    Node { ptr: NodePtr<T>, state: MemoryState },
    End,
}

impl<T> Copy for Slot<T> {}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.slot, &other.slot) {
            (Slot::BeforeBegin, Slot::BeforeBegin) => true,
            (Slot::End, Slot::End) => true,
            (Slot::Node { ptr: p1, state: s1 }, Slot::Node { ptr: p2, state: s2 }) => {
                p1 == p2 && s1 == s2
            }
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> core::hash::Hash for Position<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match &self.slot {
            Slot::BeforeBegin => 0u8.hash(state),
            Slot::Node { ptr, state: s } => {
                1u8.hash(state);
                ptr.hash(state);
                s.hash(state);
            }
            Slot::End => 2u8.hash(state),
        }
    }
}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.slot {
            Slot::BeforeBegin => f.write_str("Position::BeforeBegin"),
            Slot::End => f.write_str("Position::End"),
            Slot::Node { ptr, state } => f
                .debug_struct("Position")
                .field("ptr", ptr)
                .field("state", state)
                .finish(),
        }
    }
}

impl<T> Position<T> {
    #[inline(always)]
    pub(crate) const fn before_begin() -> Self {
        Self {
            slot: Slot::BeforeBegin,
        }
    }

    #[inline(always)]
    pub(crate) const fn end() -> Self {
        Self { slot: Slot::End }
    }

    #[inline(always)]
    pub(crate) fn node(state: MemoryState, ptr: NodePtr<T>) -> Self {
        Self {
            slot: Slot::Node { ptr, state },
        }
    }

    /// Element position of the node that `link` points to; end position if the link is empty.
    #[inline(always)]
    pub(crate) fn from_link(state: MemoryState, link: Option<NodePtr<T>>) -> Self {
        match link {
            Some(ptr) => Self::node(state, ptr),
            None => Self::end(),
        }
    }

    #[inline(always)]
    pub(crate) fn slot(&self) -> &Slot<T> {
        &self.slot
    }

    /// Returns true if this is the before-begin position of a sequence.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.slot, Slot::BeforeBegin)
    }

    /// Returns true if this is the end position of a sequence.
    pub fn is_end(&self) -> bool {
        matches!(self.slot, Slot::End)
    }

    /// Returns true if this position points at an element; i.e., it is neither
    /// the before-begin nor the end position.
    ///
    /// Note that this does not tell whether the element still belongs to the sequence;
    /// see [`Position::is_valid_for`].
    pub fn is_element(&self) -> bool {
        matches!(self.slot, Slot::Node { .. })
    }

    /// Returns true only if this position can be used with the given `sequence`.
    ///
    /// The before-begin and end positions are valid for every sequence.
    /// An element position is valid iff it satisfies the following conditions:
    ///
    /// * It is created from the given `sequence`.
    /// * The node it points to has not been erased.
    /// * Nodes of the `sequence` have not been cleared or reorganized since the position was created.
    pub fn is_valid_for<M, P>(&self, sequence: &LinkedSequence<T, M, P>) -> bool
    where
        M: MemoryPolicy,
        P: PinnedVec<Node<T>>,
    {
        match &self.slot {
            Slot::BeforeBegin | Slot::End => true,
            Slot::Node { ptr, state } => sequence.validate_node(ptr, *state).is_ok(),
        }
    }
}
