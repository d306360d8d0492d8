#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Positions of the sequence and their errors.
pub mod positions;

mod common_traits;
mod core_seq;
mod cursor;
mod iter;
mod memory;
mod node;
mod sequence;

pub use common_traits::IntoIter;
pub use core_seq::CoreSeq;
pub use cursor::{Cursor, CursorMut};
pub use iter::{Iter, IterMut};
pub use memory::{
    MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, MemoryState, Utilization,
};
pub use node::Node;
pub use positions::{NodePtr, Position, PositionError};
pub use sequence::{LinkedSequence, swap};
