//! When constructing or operating on a `BigInt` goes wrong.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when parsing,
/// shifting, or dividing a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as
    /// possible. All the fallible entry points return `Result<T, Error>`,
    /// and a large error type would be paid for on every call.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// The specific failure behind this error.
    pub fn code(&self) -> ErrorCode {
        self.err.code
    }

    /// Byte offset into the input at which a parse error was detected.
    ///
    /// Zero for non-parse errors.
    pub fn offset(&self) -> usize {
        self.err.offset
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Parse` - malformed decimal or hex input
    /// - `Category::Shift` - negative shift count
    /// - `Category::Domain` - zero divisor or negative exponent
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::MissingDigits
            | ErrorCode::InvalidDigit
            | ErrorCode::MissingHexPrefix => Category::Parse,
            ErrorCode::NegativeShiftCount => Category::Shift,
            ErrorCode::DivisionByZero | ErrorCode::NegativeExponent => Category::Domain,
        }
    }

    /// Returns true if this error came from malformed textual input.
    pub fn is_parse(&self) -> bool {
        self.classify() == Category::Parse
    }

    /// Returns true if this error came from a negative shift count.
    pub fn is_shift(&self) -> bool {
        self.classify() == Category::Shift
    }

    /// Returns true if this error came from an operation applied outside
    /// its domain, such as division by zero.
    pub fn is_domain(&self) -> bool {
        self.classify() == Category::Domain
    }
}

/// Categorizes the cause of a `bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that is not a valid decimal or hex
    /// rendering of an integer.
    Parse,

    /// The error was caused by a negative shift count.
    Shift,

    /// The error was caused by an operation applied outside its domain:
    /// division or modulus by zero, or a negative exponent.
    Domain,
}

/// The specific failures that can occur.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Input was empty, or contained a sign with no digits after it.
    MissingDigits,

    /// A character that is not a digit of the expected base.
    InvalidDigit,

    /// Hex input did not start with `0x` or `-0x`.
    MissingHexPrefix,

    /// Shift count was negative.
    NegativeShiftCount,

    /// Division or modulus by zero.
    DivisionByZero,

    /// `pow` was given a negative exponent.
    NegativeExponent,
}

struct ErrorImpl {
    code: ErrorCode,
    offset: usize,
}

impl Error {
    #[cold]
    pub(crate) fn parse(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset }),
        }
    }

    #[cold]
    pub(crate) fn invalid(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset: 0 }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::MissingDigits => f.write_str("invalid argument: expected at least one digit"),
            ErrorCode::InvalidDigit => f.write_str("invalid argument: invalid digit"),
            ErrorCode::MissingHexPrefix => {
                f.write_str("invalid argument: expected `0x` or `-0x` prefix")
            }
            ErrorCode::NegativeShiftCount => f.write_str("invalid argument: negative shift count"),
            ErrorCode::DivisionByZero => f.write_str("invalid argument: division by zero"),
            ErrorCode::NegativeExponent => f.write_str("invalid argument: negative exponent"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.classify() == Category::Parse {
            write!(f, "{} at offset {}", self.err.code, self.err.offset)
        } else {
            Display::fmt(&self.err.code, f)
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, offset: {})", self.err.code, self.err.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
