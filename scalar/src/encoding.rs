//! Encoding form and byte order tags.

use std::fmt;
use std::str::FromStr;

/// The Unicode encoding form a transcoding operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// UTF-8: one to four bytes per scalar (legacy extended forms reach
    /// seven for diagnostic round-trips of out-of-range values).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "utf-8"))]
    Utf8,

    /// UTF-16: one or two 16-bit units per scalar.
    #[cfg_attr(feature = "serde", serde(rename = "utf-16"))]
    Utf16,

    /// UTF-32: always one 32-bit unit.
    #[cfg_attr(feature = "serde", serde(rename = "utf-32"))]
    Utf32,
}

impl Encoding {
    /// Width of one code unit in bytes.
    #[must_use]
    pub const fn unit_bytes(self) -> usize {
        match self {
            Self::Utf8 => 1,
            Self::Utf16 => 2,
            Self::Utf32 => 4,
        }
    }

    /// Returns `true` if the form has a meaningful byte order.
    ///
    /// UTF-8 results still record a byte order (conventionally little) so
    /// the record shape is uniform, but the field carries no information.
    #[must_use]
    pub const fn is_byte_order_sensitive(self) -> bool {
        !matches!(self, Self::Utf8)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Utf32 => "utf-32",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "8" => Ok(Self::Utf8),
            "utf-16" | "utf16" | "16" => Ok(Self::Utf16),
            "utf-32" | "utf32" | "32" => Ok(Self::Utf32),
            _ => Err(ParseTagError::UnknownEncoding {
                found: s.to_string(),
            }),
        }
    }
}

/// Byte order of multi-byte code units (UTF-16/32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,

    /// Least significant byte first.
    #[default]
    Little,
}

impl ByteOrder {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Big => "big-endian",
            Self::Little => "little-endian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "be" | "big" | "big-endian" => Ok(Self::Big),
            "le" | "little" | "little-endian" => Ok(Self::Little),
            _ => Err(ParseTagError::UnknownByteOrder {
                found: s.to_string(),
            }),
        }
    }
}

/// Errors from parsing encoding or byte order names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTagError {
    /// The string named no known encoding form.
    UnknownEncoding { found: String },

    /// The string named no known byte order.
    UnknownByteOrder { found: String },
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEncoding { found } => {
                write!(f, "unknown encoding {found:?}, expected utf-8, utf-16, or utf-32")
            }
            Self::UnknownByteOrder { found } => {
                write!(f, "unknown byte order {found:?}, expected be or le")
            }
        }
    }
}

impl std::error::Error for ParseTagError {}
