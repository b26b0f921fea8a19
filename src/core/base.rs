use std::fmt;
use std::sync::LazyLock;

use crate::encoders::algorithms::errors::{BaseError, ConvertError};

/// A numeral system: a bijection between digit values `0..radix()` and
/// single-byte symbols.
///
/// Implementations are immutable and can be shared freely across threads.
/// `radix()` must stay constant and lie in `2..=256`.
pub trait Base {
    /// Number of distinct digits.
    fn radix(&self) -> u32;

    /// Encodes a digit value as its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidDigit`] if `value >= radix()`.
    fn digit_of(&self, value: u32) -> Result<u8, ConvertError>;

    /// Decodes a symbol back to its digit value.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidDigit`] if `symbol` is not a digit of this base.
    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError>;
}

impl<B: Base + ?Sized> Base for &B {
    fn radix(&self) -> u32 {
        (**self).radix()
    }

    fn digit_of(&self, value: u32) -> Result<u8, ConvertError> {
        (**self).digit_of(value)
    }

    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError> {
        (**self).value_of(symbol)
    }
}

impl<B: Base + ?Sized> Base for Box<B> {
    fn radix(&self) -> u32 {
        (**self).radix()
    }

    fn digit_of(&self, value: u32) -> Result<u8, ConvertError> {
        (**self).digit_of(value)
    }

    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError> {
        (**self).value_of(symbol)
    }
}

/// Bases 2 through 36 using `0-9` then `a-z`.
///
/// Encoding always produces lower-case letters; decoding accepts either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alnum(u8);

impl Alnum {
    /// Creates an alphanumeric base.
    ///
    /// # Errors
    ///
    /// Returns [`BaseError::AlnumRadix`] unless `2 <= radix <= 36`.
    pub fn new(radix: u32) -> Result<Self, BaseError> {
        if (2..=36).contains(&radix) {
            Ok(Alnum(radix as u8))
        } else {
            Err(BaseError::AlnumRadix(radix))
        }
    }
}

impl Base for Alnum {
    fn radix(&self) -> u32 {
        u32::from(self.0)
    }

    fn digit_of(&self, value: u32) -> Result<u8, ConvertError> {
        match value {
            v if v >= self.radix() => Err(ConvertError::invalid_value(v, self.radix())),
            v if v < 10 => Ok(b'0' + v as u8),
            v => Ok(b'a' + (v - 10) as u8),
        }
    }

    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError> {
        let value = match symbol {
            b'0'..=b'9' => symbol - b'0',
            b'a'..=b'z' => symbol - b'a' + 10,
            b'A'..=b'Z' => symbol - b'A' + 10,
            _ => return Err(ConvertError::invalid_symbol(symbol, self.radix())),
        };
        let value = u32::from(value);
        if value < self.radix() {
            Ok(value)
        } else {
            Err(ConvertError::invalid_symbol(symbol, self.radix()))
        }
    }
}

/// Base 62: `0-9`, then `a-z`, then `A-Z`. Case is significant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Base62;

impl Base for Base62 {
    fn radix(&self) -> u32 {
        62
    }

    fn digit_of(&self, value: u32) -> Result<u8, ConvertError> {
        match value {
            0..=9 => Ok(b'0' + value as u8),
            10..=35 => Ok(b'a' + (value - 10) as u8),
            36..=61 => Ok(b'A' + (value - 36) as u8),
            _ => Err(ConvertError::invalid_value(value, 62)),
        }
    }

    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError> {
        match symbol {
            b'0'..=b'9' => Ok(u32::from(symbol - b'0')),
            b'a'..=b'z' => Ok(u32::from(symbol - b'a') + 10),
            b'A'..=b'Z' => Ok(u32::from(symbol - b'A') + 36),
            _ => Err(ConvertError::invalid_symbol(symbol, 62)),
        }
    }
}

/// Base 94: every printable non-space ASCII byte, `'!'` (33) through `'~'` (126).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Base94;

impl Base for Base94 {
    fn radix(&self) -> u32 {
        94
    }

    fn digit_of(&self, value: u32) -> Result<u8, ConvertError> {
        if value < 94 {
            Ok(value as u8 + b'!')
        } else {
            Err(ConvertError::invalid_value(value, 94))
        }
    }

    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError> {
        match symbol {
            b'!'..=b'~' => Ok(u32::from(symbol - b'!')),
            _ => Err(ConvertError::invalid_symbol(symbol, 94)),
        }
    }
}

/// Base 256: each byte is its own digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Binary;

impl Base for Binary {
    fn radix(&self) -> u32 {
        256
    }

    fn digit_of(&self, value: u32) -> Result<u8, ConvertError> {
        u8::try_from(value).map_err(|_| ConvertError::invalid_value(value, 256))
    }

    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError> {
        Ok(u32::from(symbol))
    }
}

/// A base defined by an explicit, ordered string of distinct digit bytes.
///
/// The inverse lookup covers all 256 byte values so decoding is a single
/// index.
#[derive(Clone, PartialEq, Eq)]
pub struct TableBase {
    digits: Vec<u8>,
    values: [Option<u8>; 256],
}

impl TableBase {
    /// Builds a table base from its digits, in value order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table holds fewer than 2 or more than 256
    /// digits, or if any byte repeats.
    pub fn new(digits: impl AsRef<[u8]>) -> Result<Self, BaseError> {
        let digits = digits.as_ref();
        if !(2..=256).contains(&digits.len()) {
            return Err(BaseError::TableLength(digits.len()));
        }

        let mut values = [None; 256];
        for (position, &symbol) in digits.iter().enumerate() {
            let slot = &mut values[usize::from(symbol)];
            if slot.is_some() {
                return Err(BaseError::DuplicateDigit { symbol, position });
            }
            // position < 256 was checked above
            *slot = Some(position as u8);
        }

        Ok(TableBase {
            digits: digits.to_vec(),
            values,
        })
    }

    /// The digit bytes in value order.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

impl fmt::Debug for TableBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableBase")
            .field("digits", &String::from_utf8_lossy(&self.digits))
            .finish()
    }
}

impl Base for TableBase {
    fn radix(&self) -> u32 {
        self.digits.len() as u32
    }

    fn digit_of(&self, value: u32) -> Result<u8, ConvertError> {
        self.digits
            .get(value as usize)
            .copied()
            .ok_or_else(|| ConvertError::invalid_value(value, self.radix()))
    }

    fn value_of(&self, symbol: u8) -> Result<u32, ConvertError> {
        self.values[usize::from(symbol)]
            .map(u32::from)
            .ok_or_else(|| ConvertError::invalid_symbol(symbol, self.radix()))
    }
}

/// Digits of [`BASE30`]: `0-9` then lower-case consonants without `l`.
pub const BASE30_DIGITS: &str = "0123456789bcdfghjkmnpqrstvwxyz";

/// Digits of [`BASE50`]: [`BASE30_DIGITS`] followed by the same consonants in upper case.
pub const BASE50_DIGITS: &str = "0123456789bcdfghjkmnpqrstvwxyzBCDFGHJKMNPQRSTVWXYZ";

pub const BASE2: Alnum = Alnum(2);
pub const BASE8: Alnum = Alnum(8);
pub const BASE10: Alnum = Alnum(10);
pub const BASE12: Alnum = Alnum(12);
pub const BASE16: Alnum = Alnum(16);
pub const BASE32: Alnum = Alnum(32);
pub const BASE36: Alnum = Alnum(36);
pub const BASE62: Base62 = Base62;
pub const BASE94: Base94 = Base94;
pub const BINARY: Binary = Binary;

/// Vowel-free base 30, for generated codes that should not spell words.
///
/// Differs from `Alnum::new(30)`, which uses `0-9` then `a-t`.
pub static BASE30: LazyLock<TableBase> = LazyLock::new(|| table(BASE30_DIGITS));

/// Vowel-free base 50, additionally excluding upper-case `L`.
pub static BASE50: LazyLock<TableBase> = LazyLock::new(|| table(BASE50_DIGITS));

fn table(digits: &str) -> TableBase {
    match TableBase::new(digits) {
        Ok(base) => base,
        Err(e) => unreachable!("built-in digit table is valid: {e}"),
    }
}
