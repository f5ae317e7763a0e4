//! Scalar value validation and core result types for the utfx codec.
//!
//! This crate provides the shared vocabulary of the codec: the
//! [`is_valid_code_point`] predicate, the [`Encoding`] and [`ByteOrder`] tags,
//! the [`Status`] taxonomy, and the fixed-size [`Transcoding`] record that
//! every encode/decode operation returns.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **No allocation** - Every type here is `Copy` and fixed-size.
//! - **No domain knowledge** - This crate knows nothing about the byte-level
//!   packing rules; it only names things the codec layer needs to talk about.
//! - **Malformation is data** - Ill-formed input is reported through
//!   [`Status`], never through `Err` or a panic.
//!
//! # Example
//!
//! ```
//! use scalar::{is_valid_code_point, Encoding, Status};
//!
//! assert!(is_valid_code_point(0x732B));
//! assert!(!is_valid_code_point(0xD800));
//! assert_eq!(Encoding::Utf16.unit_bytes(), 2);
//! assert!(Status::Ok.is_ok());
//! ```

mod codepoint;
mod encoding;
mod status;
mod transcoding;

pub use codepoint::{
    is_high_surrogate, is_low_surrogate, is_surrogate, is_valid_code_point, HIGH_SURROGATE_MIN,
    LOW_SURROGATE_MIN, MAX_CODE_POINT, SURROGATE_HALF_MASK, SURROGATE_MASK, SURROGATE_MAX,
    SURROGATE_MIN,
};
pub use encoding::{ByteOrder, Encoding, ParseTagError};
pub use status::Status;
pub use transcoding::{Transcoding, MAX_ENCODED_BYTES, WINDOW_BYTES};
