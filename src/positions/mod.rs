mod node_ptr;
mod position;
mod position_error;

pub use node_ptr::NodePtr;
pub use position::Position;
pub(crate) use position::Slot;
pub use position_error::PositionError;
