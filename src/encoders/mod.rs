pub mod algorithms;
pub mod buffer;

pub use algorithms::{length, math};
