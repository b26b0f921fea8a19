//! Fixed-capacity digit buffers.
//!
//! A [`Buffer`] pairs a byte slice with a [`Base`]. Read as a [`Source`] it
//! yields digit values front to back; written as a [`Dest`] it fills the
//! slice from the end toward the start, so the result is always the suffix
//! returned by [`Buffer::written`].

use crate::core::base::Base;
use crate::encoders::algorithms::errors::ConvertError;
use crate::encoders::algorithms::math::{Dest, Source};

/// A byte buffer tagged with the base its digits are expressed in.
#[derive(Debug, Clone)]
pub struct Buffer<T, B> {
    buf: T,
    base: B,
    next: usize,
    start: usize,
}

impl<T: AsRef<[u8]>, B: Base> Buffer<T, B> {
    /// Wraps `buf` for reading or writing digits of `base`.
    ///
    /// Nothing is considered written yet; as a destination the whole of
    /// `buf` is available.
    pub fn new(buf: T, base: B) -> Self {
        let start = buf.as_ref().len();
        Buffer {
            buf,
            base,
            next: 0,
            start,
        }
    }

    /// The digits prepended so far.
    pub fn written(&self) -> &[u8] {
        &self.buf.as_ref()[self.start..]
    }

    /// Room left for prepending.
    pub fn remaining(&self) -> usize {
        self.start
    }

    /// The base this buffer's digits are expressed in.
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Unwraps the underlying storage, including any unwritten prefix.
    pub fn into_inner(self) -> T {
        self.buf
    }
}

impl<T: AsRef<[u8]>, B: Base> Source for Buffer<T, B> {
    fn radix(&self) -> u32 {
        self.base.radix()
    }

    fn read_digit(&mut self) -> Result<Option<u32>, ConvertError> {
        let Some(&symbol) = self.buf.as_ref().get(self.next) else {
            return Ok(None);
        };
        let value = self
            .base
            .value_of(symbol)
            .map_err(|e| e.at_position(self.next))?;
        self.next += 1;
        Ok(Some(value))
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>, B: Base> Dest for Buffer<T, B> {
    fn radix(&self) -> u32 {
        self.base.radix()
    }

    fn prepend(&mut self, value: u32) -> Result<(), ConvertError> {
        if self.start == 0 {
            return Err(ConvertError::CapacityExceeded {
                written: self.written().len(),
            });
        }
        let symbol = self.base.digit_of(value)?;
        self.start -= 1;
        self.buf.as_mut()[self.start] = symbol;
        Ok(())
    }
}
