//! Single code point UTF-8/16/32 encoding and decoding for the utfx codec.
//!
//! This is the main codec crate: it packs a code point into any of the three
//! Unicode encoding forms (both byte orders for the 16/32-bit forms) and
//! unpacks the first code point from a byte window, classifying
//! malformations along the way.
//!
//! # Features
//!
//! - Decoding with full error taxonomy: unexpected continuation, truncated
//!   sequence, overlong encoding, illegal code point
//! - Encoding of arbitrary `u32` values with the verdict carried in the
//!   result, so diagnostic tooling can round-trip bad input
//! - Per-form entry points plus a combined dispatcher
//!
//! # Design Principles
//!
//! - **Malformation is data** - Classification lives in the returned record;
//!   nothing panics and nothing is thrown.
//! - **No allocation** - Each call reads its inputs and fills one fixed-size
//!   record.
//! - **Stateless** - Safe to call from any thread with no coordination.
//!
//! # Example
//!
//! ```
//! use codec::{decode_utf8, encode_utf16_be};
//! use scalar::Status;
//!
//! let decoded = decode_utf8(&[0xE7, 0x8C, 0xAB, 0, 0, 0, 0, 0]);
//! assert_eq!(decoded.status, Status::Ok);
//! assert_eq!(decoded.code_point, 0x732B);
//!
//! let encoded = encode_utf16_be(0x10FFFF);
//! assert_eq!(encoded.as_bytes(), &[0xDB, 0xFF, 0xDF, 0xFF]);
//! ```

mod dispatch;
mod utf16;
mod utf32;
mod utf8;

pub use dispatch::{decode, encode};
pub use utf16::{
    decode_utf16, decode_utf16_be, decode_utf16_le, encode_utf16, encode_utf16_be, encode_utf16_le,
};
pub use utf32::{
    decode_utf32, decode_utf32_be, decode_utf32_le, encode_utf32, encode_utf32_be, encode_utf32_le,
};
pub use utf8::{decode_utf8, encode_utf8};

// The shared vocabulary is re-exported so callers need only one crate.
pub use scalar::{
    is_valid_code_point, ByteOrder, Encoding, Status, Transcoding, MAX_CODE_POINT,
    MAX_ENCODED_BYTES, WINDOW_BYTES,
};
