//! Integer range generation and naive Fibonacci evaluation.

pub mod errors;
pub mod fibonacci;
pub mod range;

pub use errors::SequenceError;
pub use fibonacci::fibonacci;
pub use range::{range, RangeIter, RangeSpec};
