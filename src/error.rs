use std::fmt;

/// The sequence kind an [`Error`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16,
    /// Raw code points handed to an encoder.
    CodePoints,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::CodePoints => "code point",
        })
    }
}

/// Why an element was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Reason {
    #[error("continuation byte without a leading byte")]
    UnexpectedContinuation,
    #[error("leading byte announces more than four bytes")]
    InvalidLeadingByte,
    #[error("expected a continuation byte")]
    InvalidContinuation,
    #[error("input ends inside a sequence")]
    Truncated,
    #[error("low surrogate without a preceding high surrogate")]
    UnpairedLowSurrogate,
    #[error("high surrogate not followed by a low surrogate")]
    MissingLowSurrogate,
    #[error("overlong encoding")]
    Overlong,
    #[error("surrogate code point")]
    Surrogate,
    #[error("code point above U+10FFFF")]
    OutOfRange,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input violates the structural rules of its encoding, or holds a code
    /// point the target encoding cannot represent.
    #[error("invalid {encoding} at offset {offset}: {reason}")]
    InvalidEncoding {
        encoding: Encoding,
        offset: usize,
        reason: Reason,
    },
}

impl Error {
    pub(crate) const fn invalid(encoding: Encoding, (offset, reason): (usize, Reason)) -> Self {
        Error::InvalidEncoding {
            encoding,
            offset,
            reason,
        }
    }

    pub const fn encoding(&self) -> Encoding {
        match *self {
            Error::InvalidEncoding { encoding, .. } => encoding,
        }
    }

    /// Index of the rejected element in the input.
    pub const fn offset(&self) -> usize {
        match *self {
            Error::InvalidEncoding { offset, .. } => offset,
        }
    }

    pub const fn reason(&self) -> Reason {
        match *self {
            Error::InvalidEncoding { reason, .. } => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let error = Error::invalid(Encoding::Utf8, (3, Reason::Truncated));
        assert_eq!(
            error.to_string(),
            "invalid UTF-8 at offset 3: input ends inside a sequence"
        );
        let error = Error::invalid(Encoding::CodePoints, (0, Reason::OutOfRange));
        assert_eq!(
            error.to_string(),
            "invalid code point at offset 0: code point above U+10FFFF"
        );
    }

    #[test]
    fn accessors() {
        let error = Error::invalid(Encoding::Utf16, (7, Reason::MissingLowSurrogate));
        assert_eq!(error.encoding(), Encoding::Utf16);
        assert_eq!(error.offset(), 7);
        assert_eq!(error.reason(), Reason::MissingLowSurrogate);
    }
}
