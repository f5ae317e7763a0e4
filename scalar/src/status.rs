//! Well-formedness classification for transcoding results.

use std::fmt;

/// The well-formedness verdict of a single encode or decode operation.
///
/// Malformed input is reported through this tag inside the result record,
/// never through `Err` or a panic. Every variant other than [`Status::Ok`] is
/// local and recoverable: the record says how many bytes were examined, and
/// the caller decides whether to skip, substitute, or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// The sequence is well-formed.
    #[default]
    Ok,

    /// Decoding began on a continuation byte (UTF-8) or a lone low
    /// surrogate (UTF-16) with no valid lead before it.
    UnexpectedContinuation,

    /// A multi-unit lead was seen but a required continuation unit was
    /// missing or malformed.
    TooFewWords,

    /// A UTF-8 sequence encodes a value representable in fewer bytes.
    Overlong,

    /// The assembled or supplied value is above 0x10FFFF or falls in the
    /// surrogate block.
    IllegalCodePoint,
}

impl Status {
    /// Returns `true` if the operation was well-formed.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns `true` for any malformation verdict.
    #[must_use]
    pub const fn is_error(self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "ok",
            Self::UnexpectedContinuation => "unexpected continuation byte",
            Self::TooFewWords => "too few words",
            Self::Overlong => "overlong",
            Self::IllegalCodePoint => "invalid codepoint",
        };
        write!(f, "{name}")
    }
}
