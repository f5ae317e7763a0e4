//! UTF-32 decoding and encoding for one code point.

use scalar::{is_valid_code_point, ByteOrder, Encoding, Status, Transcoding};

/// Decodes one UTF-32 unit from `window` with the given byte order.
///
/// Fixed width: one unit, four bytes. The only malformation a full window
/// can carry is an illegal value; a window shorter than one unit reports
/// truncation with the bytes that were present.
#[must_use]
pub fn decode_utf32(window: &[u8], byte_order: ByteOrder) -> Transcoding {
    let mut out = Transcoding::new(Encoding::Utf32, byte_order);

    let Some(raw) = window.get(..4) else {
        out.status = Status::TooFewWords;
        out.set_truncated(window);
        return out;
    };

    let unit: [u8; 4] = raw.try_into().unwrap();
    out.code_point = match byte_order {
        ByteOrder::Big => u32::from_be_bytes(unit),
        ByteOrder::Little => u32::from_le_bytes(unit),
    };
    if !is_valid_code_point(out.code_point) {
        out.status = Status::IllegalCodePoint;
    }
    out.set_units(1, window);
    out
}

/// Decodes big-endian UTF-32.
#[must_use]
pub fn decode_utf32_be(window: &[u8]) -> Transcoding {
    decode_utf32(window, ByteOrder::Big)
}

/// Decodes little-endian UTF-32.
#[must_use]
pub fn decode_utf32_le(window: &[u8]) -> Transcoding {
    decode_utf32(window, ByteOrder::Little)
}

/// Encodes `code_point` as one UTF-32 unit with the given byte order.
///
/// Not pre-validated: any `u32` writes its four bytes, with the verdict in
/// the status field.
#[must_use]
pub fn encode_utf32(code_point: u32, byte_order: ByteOrder) -> Transcoding {
    let mut out = Transcoding::new(Encoding::Utf32, byte_order);
    out.code_point = code_point;
    if !is_valid_code_point(code_point) {
        out.status = Status::IllegalCodePoint;
    }

    let unit = match byte_order {
        ByteOrder::Big => code_point.to_be_bytes(),
        ByteOrder::Little => code_point.to_le_bytes(),
    };
    out.bytes[..4].copy_from_slice(&unit);
    out.word_count = 1;
    out.byte_count = 4;
    out
}

/// Encodes big-endian UTF-32.
#[must_use]
pub fn encode_utf32_be(code_point: u32) -> Transcoding {
    encode_utf32(code_point, ByteOrder::Big)
}

/// Encodes little-endian UTF-32.
#[must_use]
pub fn encode_utf32_le(code_point: u32) -> Transcoding {
    encode_utf32(code_point, ByteOrder::Little)
}
