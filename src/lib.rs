//! Convert digit strings between bases 2 through 256.
//!
//! A [`Base`] maps digit values to single-byte symbols. Digits are read from
//! a [`Source`] into an unbounded integer and written back out to a [`Dest`]
//! in the target base by [`convert`]; [`estimate_length`] sizes the
//! destination beforehand.
//!
//! # Example
//!
//! ```
//! use basexx::{Alnum, BASE10, Buffer, convert, estimate_length};
//!
//! let base20 = Alnum::new(20).unwrap();
//! let mut src = Buffer::new("12345", BASE10);
//! let mut dest = Buffer::new(vec![0u8; estimate_length(10, 20, 5)], base20);
//!
//! convert(&mut dest, &mut src).unwrap();
//! assert_eq!(dest.written(), b"1ah5");
//! ```

mod core;
mod encoders;
pub mod prelude;

pub use crate::core::base::{
    Alnum, BASE2, BASE8, BASE10, BASE12, BASE16, BASE30, BASE30_DIGITS, BASE32, BASE36, BASE50,
    BASE50_DIGITS, BASE62, BASE94, BINARY, Base, Base62, Base94, Binary, TableBase,
};
pub use crate::core::config::{BaseConfig, BaseKind, BaseRegistry, DynBase, Settings};
pub use encoders::algorithms::{
    BaseError, BaseNotFoundError, ConvertError, InvalidDigit, find_closest_base,
};
pub use encoders::buffer::Buffer;
pub use encoders::length::estimate_length;
pub use encoders::math::{
    Dest, Source, convert, convert_bytes, convert_str, decode_int, encode_int,
};
