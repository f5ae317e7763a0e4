//! Routing between the per-form codecs by encoding and byte order tags.

use scalar::{ByteOrder, Encoding, Transcoding};

use crate::utf16::{decode_utf16, encode_utf16};
use crate::utf32::{decode_utf32, encode_utf32};
use crate::utf8::{decode_utf8, encode_utf8};

/// Decodes the first code point in `window` for the given form.
///
/// Pure routing; `byte_order` is ignored for UTF-8.
#[must_use]
pub fn decode(window: &[u8], encoding: Encoding, byte_order: ByteOrder) -> Transcoding {
    match encoding {
        Encoding::Utf8 => decode_utf8(window),
        Encoding::Utf16 => decode_utf16(window, byte_order),
        Encoding::Utf32 => decode_utf32(window, byte_order),
    }
}

/// Encodes `code_point` in the given form.
///
/// Pure routing; `byte_order` is ignored for UTF-8.
#[must_use]
pub fn encode(code_point: u32, encoding: Encoding, byte_order: ByteOrder) -> Transcoding {
    match encoding {
        Encoding::Utf8 => encode_utf8(code_point),
        Encoding::Utf16 => encode_utf16(code_point, byte_order),
        Encoding::Utf32 => encode_utf32(code_point, byte_order),
    }
}
