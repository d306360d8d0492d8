use crate::LinkedSequence;
use alloc::vec::Vec;

impl<T, const N: usize> From<[T; N]> for LinkedSequence<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T> From<Vec<T>> for LinkedSequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}
