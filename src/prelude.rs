//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use basexx::prelude::*;
//!
//! let registry = BaseRegistry::load_default().unwrap();
//! let from = registry.base("dec").unwrap();
//! let to = registry.base("62").unwrap();
//! assert_eq!(convert_str("12345", &from, &to).unwrap(), "3d7");
//! ```

pub use crate::{
    // Bases
    Alnum,
    BASE10,
    BASE16,
    BASE62,
    BASE94,
    BINARY,
    Base,
    // Config
    BaseRegistry,
    // Streaming core
    Buffer,
    ConvertError,
    Dest,
    Source,
    TableBase,
    convert,
    // Whole-string conversion
    convert_bytes,
    convert_str,
    estimate_length,
};
