/// Memory state of a linked sequence.
///
/// The state changes whenever the node storage is cleared or reorganized, which
/// is exactly when element positions created before the change stop being valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    pub(crate) id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self {
            id: self.id.wrapping_add(1),
        }
    }
}
