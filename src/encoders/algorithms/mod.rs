pub mod errors;
pub mod length;
pub mod math;

// Re-export error types for public API
pub use errors::{BaseError, BaseNotFoundError, ConvertError, InvalidDigit, find_closest_base};
