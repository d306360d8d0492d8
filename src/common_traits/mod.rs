mod clone;
mod cmp;
mod debug;
mod from;
mod from_iter;
mod into_iter;

pub use into_iter::IntoIter;
