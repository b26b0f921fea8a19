use crate::core::base::Base;
use crate::encoders::buffer::Buffer;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::length::estimate_length;

pub use super::errors::ConvertError;

/// A source of digit values, most significant first.
pub trait Source {
    /// Radix of the digits produced; must be constant and at least 2.
    fn radix(&self) -> u32;

    /// Reads the next digit value, or `None` once the input is exhausted.
    fn read_digit(&mut self) -> Result<Option<u32>, ConvertError>;
}

/// A destination for digit values, written least significant first.
pub trait Dest {
    /// Radix of the digits accepted; must be constant and at least 2.
    fn radix(&self) -> u32;

    /// Writes `value` in front of everything written so far.
    fn prepend(&mut self, value: u32) -> Result<(), ConvertError>;
}

/// Re-expresses the number read from `src` as digits in `dest`.
///
/// All of `src` is consumed before anything is written. Zero is written as a
/// single `0` digit. Returns the number of digits written.
///
/// # Errors
///
/// An invalid source digit aborts before any output. If `dest` fills up,
/// the returned [`ConvertError::CapacityExceeded`] carries the count of
/// digits written before the failure; those digits are not a valid result.
pub fn convert<D, S>(dest: &mut D, src: &mut S) -> Result<usize, ConvertError>
where
    D: Dest + ?Sized,
    S: Source + ?Sized,
{
    log::debug!("converting base {} to base {}", src.radix(), dest.radix());
    let accum = accumulate(src)?;
    let written = emit(accum, dest)?;
    log::debug!("wrote {} base-{} digit(s)", written, dest.radix());
    Ok(written)
}

/// Drains `src` into a single unbounded integer.
fn accumulate<S: Source + ?Sized>(src: &mut S) -> Result<BigUint, ConvertError> {
    let radix = BigUint::from(src.radix());
    let mut accum = BigUint::zero();
    let mut read = 0usize;

    while let Some(digit) = src.read_digit()? {
        accum *= &radix;
        if digit != 0 {
            accum += digit;
        }
        read += 1;
    }

    log::trace!("accumulated {} base-{} digit(s)", read, radix);
    Ok(accum)
}

/// Writes `accum` into `dest` by repeated division.
fn emit<D: Dest + ?Sized>(mut accum: BigUint, dest: &mut D) -> Result<usize, ConvertError> {
    let radix = BigUint::from(dest.radix());
    let mut written = 0;

    while !accum.is_zero() {
        let (quotient, remainder) = accum.div_rem(&radix);
        // remainder < radix <= 256, so it is a single digit
        let digit = remainder.to_u32().unwrap_or_default();
        dest.prepend(digit).map_err(|e| written_so_far(e, written))?;
        written += 1;
        accum = quotient;
    }

    if written == 0 {
        dest.prepend(0).map_err(|e| written_so_far(e, written))?;
        written = 1;
    }

    Ok(written)
}

fn written_so_far(err: ConvertError, written: usize) -> ConvertError {
    match err {
        ConvertError::CapacityExceeded { .. } => ConvertError::CapacityExceeded { written },
        other => other,
    }
}

/// Converts a whole digit string from one base to another.
///
/// The destination is sized with [`estimate_length`], so the only possible
/// failure is an invalid input digit. A leading `-` is dropped when it is not
/// itself a digit of `from`; the sign is not carried into the output. Empty
/// input reads as zero.
pub fn convert_bytes<F, T>(input: &[u8], from: &F, to: &T) -> Result<Vec<u8>, ConvertError>
where
    F: Base + ?Sized,
    T: Base + ?Sized,
{
    let input = strip_sign(input, from);
    let mut src = Buffer::new(input, from);
    let capacity = estimate_length(from.radix(), to.radix(), input.len());
    let mut dest = Buffer::new(vec![0u8; capacity], to);

    convert(&mut dest, &mut src)?;
    Ok(dest.written().to_vec())
}

/// Like [`convert_bytes`], for text in and text out.
///
/// # Errors
///
/// Fails with a [`ConvertError`] on a bad input digit, or with a UTF-8 error
/// if `to` produced bytes that are not text (as [`crate::BINARY`] may).
pub fn convert_str<F, T>(
    input: &str,
    from: &F,
    to: &T,
) -> Result<String, Box<dyn std::error::Error>>
where
    F: Base + ?Sized,
    T: Base + ?Sized,
{
    let bytes = convert_bytes(input.as_bytes(), from, to)?;
    Ok(String::from_utf8(bytes)?)
}

fn strip_sign<'a, B: Base + ?Sized>(input: &'a [u8], base: &B) -> &'a [u8] {
    match input.split_first() {
        Some((b'-', rest)) if base.value_of(b'-').is_err() => rest,
        _ => input,
    }
}

/// Renders an integer in `base`. Negative numbers are rendered as their
/// magnitude, so `-5` and `5` produce the same digits.
pub fn encode_int<N, B>(n: N, base: &B) -> Result<Vec<u8>, ConvertError>
where
    N: Into<BigInt>,
    B: Base + ?Sized,
{
    let n: BigInt = n.into();
    let magnitude = n.magnitude().clone();
    // radix >= 2, so there are never more digits than bits
    let capacity = usize::try_from(magnitude.bits()).unwrap_or(usize::MAX).max(1);
    let mut dest = Buffer::new(vec![0u8; capacity], base);
    emit(magnitude, &mut dest)?;
    Ok(dest.written().to_vec())
}

/// Reads the value of a digit string in `base`.
///
/// Empty input reads as zero.
pub fn decode_int<B: Base + ?Sized>(digits: &[u8], base: &B) -> Result<BigUint, ConvertError> {
    accumulate(&mut Buffer::new(digits, base))
}
