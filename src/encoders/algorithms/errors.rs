use std::fmt;
use thiserror::Error;

/// Errors that can occur while converting digits between bases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A symbol has no value in its base, or a value is out of range for encoding
    #[error("invalid digit: {0}")]
    InvalidDigit(InvalidDigit),
    /// The destination ran out of room; `written` digits were prepended first
    #[error("destination capacity exceeded after {written} digit(s)")]
    CapacityExceeded { written: usize },
}

/// Detail for [`ConvertError::InvalidDigit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDigit {
    /// A byte that is not a digit of the base.
    Symbol {
        symbol: u8,
        radix: u32,
        position: Option<usize>,
    },
    /// A digit value outside `0..radix`.
    Value { value: u32, radix: u32 },
}

impl ConvertError {
    /// Create an InvalidDigit error for an undecodable symbol
    pub fn invalid_symbol(symbol: u8, radix: u32) -> Self {
        ConvertError::InvalidDigit(InvalidDigit::Symbol {
            symbol,
            radix,
            position: None,
        })
    }

    /// Create an InvalidDigit error for an unencodable value
    pub fn invalid_value(value: u32, radix: u32) -> Self {
        ConvertError::InvalidDigit(InvalidDigit::Value { value, radix })
    }

    /// Attach the byte offset of a bad symbol, leaving other errors untouched.
    pub fn at_position(self, at: usize) -> Self {
        match self {
            ConvertError::InvalidDigit(InvalidDigit::Symbol { symbol, radix, .. }) => {
                ConvertError::InvalidDigit(InvalidDigit::Symbol {
                    symbol,
                    radix,
                    position: Some(at),
                })
            }
            other => other,
        }
    }

    /// Number of digits written before the failure.
    pub fn written(&self) -> usize {
        match self {
            ConvertError::InvalidDigit(_) => 0,
            ConvertError::CapacityExceeded { written } => *written,
        }
    }
}

impl fmt::Display for InvalidDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDigit::Symbol {
                symbol,
                radix,
                position,
            } => {
                if symbol.is_ascii_graphic() {
                    write!(f, "'{}'", *symbol as char)?;
                } else {
                    write!(f, "byte 0x{:02x}", symbol)?;
                }
                write!(f, " is not a base-{} digit", radix)?;
                if let Some(position) = position {
                    write!(f, " (at position {})", position)?;
                }
                Ok(())
            }
            InvalidDigit::Value { value, radix } => {
                write!(f, "value {} is out of range for base {}", value, radix)
            }
        }
    }
}

/// Errors raised while constructing a base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    /// Alphanumeric bases only cover 2 through 36
    #[error("alphanumeric radix must be between 2 and 36, got {0}")]
    AlnumRadix(u32),
    /// Digit tables need between 2 and 256 symbols
    #[error("digit table must hold between 2 and 256 digits, got {0}")]
    TableLength(usize),
    /// The same byte appears twice in a digit table
    #[error("duplicate digit byte 0x{symbol:02x} at position {position}")]
    DuplicateDigit { symbol: u8, position: usize },
    /// Configured digit strings must be one ASCII byte per digit
    #[error("digit {symbol:?} at position {position} is not ASCII")]
    NonAsciiDigit { symbol: char, position: usize },
    /// A config entry is missing a field its kind requires
    #[error("base kind '{kind}' requires '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

/// Error when a base name is not registered
#[derive(Debug)]
pub struct BaseNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl BaseNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m base '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: base '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`basexx --list`\x1b[0m to see all bases"
            )
        } else {
            write!(f, "      run `basexx --list` to see all bases")
        }
    }
}

impl fmt::Display for BaseNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, should_use_color())
    }
}

impl std::error::Error for BaseNotFoundError {}

/// Colors only go to a terminal, and never when `NO_COLOR` is set.
fn should_use_color() -> bool {
    use std::io::IsTerminal;
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Find the closest registered base name by edit distance
///
/// Ties keep the first candidate, so callers pass names in a stable order.
pub fn find_closest_base(name: &str, available: &[String]) -> Option<String> {
    // Short names like "a7" are one edit away from dozens of others
    let threshold = if name.len() < 5 { 1 } else { 2 };
    let target: Vec<char> = name.chars().collect();

    // row[j] is the distance between the prefix seen so far and target[..j]
    let mut row: Vec<usize> = Vec::with_capacity(target.len() + 1);
    let mut best: Option<(usize, &String)> = None;

    for candidate in available {
        row.clear();
        row.extend(0..=target.len());
        for (i, c) in candidate.chars().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, &t) in target.iter().enumerate() {
                let substitute = diagonal + usize::from(c != t);
                diagonal = row[j + 1];
                row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
            }
        }

        let distance = row[target.len()];
        if distance <= threshold && best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, candidate));
        }
    }

    best.map(|(_, candidate)| candidate.clone())
}
