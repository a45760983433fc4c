use core::fmt;

/// Construction from text failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input was empty.
    Empty,
    /// A character other than a decimal digit after the optional sign.
    InvalidDigit { character: char, offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty string"),
            ParseError::InvalidDigit { character, offset } => {
                write!(f, "invalid digit {:?} at offset {}", character, offset)
            }
        }
    }
}

/// Any failure this crate produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    Parse(ParseError),
    /// The operation is a declared, permanent gap (division). Callers must
    /// treat this as "unsupported", not as something to retry.
    NotImplemented,
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::Parse(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(error) => write!(f, "parse error: {}", error),
            Error::NotImplemented => f.write_str("operation not implemented"),
        }
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
