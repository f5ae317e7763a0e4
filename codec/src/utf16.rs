//! UTF-16 decoding and encoding for one code point.

use scalar::{
    is_high_surrogate, is_low_surrogate, is_valid_code_point, ByteOrder, Encoding, Status,
    Transcoding, HIGH_SURROGATE_MIN, LOW_SURROGATE_MIN,
};

/// Offset applied when packing a supplementary code point into a pair.
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

/// Reads the `index`-th 16-bit unit from the window, honoring byte order.
fn read_unit(window: &[u8], index: usize, byte_order: ByteOrder) -> Option<u16> {
    let base = index * 2;
    let b0 = *window.get(base)?;
    let b1 = *window.get(base + 1)?;
    Some(match byte_order {
        ByteOrder::Big => u16::from_be_bytes([b0, b1]),
        ByteOrder::Little => u16::from_le_bytes([b0, b1]),
    })
}

/// Decodes the first UTF-16 sequence in `window` with the given byte order.
///
/// A lone low surrogate is an unexpected continuation; a high surrogate
/// followed by anything but a low surrogate is a truncated pair (the second
/// unit is rejected, not consumed). Every non-surrogate unit is a valid BMP
/// code point, so the single-unit path has no illegal outcome.
#[must_use]
pub fn decode_utf16(window: &[u8], byte_order: ByteOrder) -> Transcoding {
    let mut out = Transcoding::new(Encoding::Utf16, byte_order);

    let Some(w0) = read_unit(window, 0, byte_order).map(u32::from) else {
        out.status = Status::TooFewWords;
        out.set_truncated(window);
        return out;
    };

    if is_low_surrogate(w0) {
        out.status = Status::UnexpectedContinuation;
        out.set_units(1, window);
    } else if is_high_surrogate(w0) {
        match read_unit(window, 1, byte_order).map(u32::from) {
            Some(w1) if is_low_surrogate(w1) => {
                out.code_point = ((w0 & 0x3FF) << 10) + (w1 & 0x3FF) + SUPPLEMENTARY_BASE;
                out.set_units(2, window);
            }
            _ => {
                out.status = Status::TooFewWords;
                out.set_units(1, window);
            }
        }
    } else {
        out.code_point = w0;
        out.set_units(1, window);
    }

    out
}

/// Decodes big-endian UTF-16.
#[must_use]
pub fn decode_utf16_be(window: &[u8]) -> Transcoding {
    decode_utf16(window, ByteOrder::Big)
}

/// Decodes little-endian UTF-16.
#[must_use]
pub fn decode_utf16_le(window: &[u8]) -> Transcoding {
    decode_utf16(window, ByteOrder::Little)
}

/// Encodes `code_point` as UTF-16 with the given byte order.
///
/// Not pre-validated: out-of-range input still produces a deterministic
/// pattern (the surrogate split is computed in wrapping 32-bit arithmetic
/// and truncated per unit) with the verdict in the status field.
#[must_use]
pub fn encode_utf16(code_point: u32, byte_order: ByteOrder) -> Transcoding {
    let mut out = Transcoding::new(Encoding::Utf16, byte_order);
    out.code_point = code_point;
    if !is_valid_code_point(code_point) {
        out.status = Status::IllegalCodePoint;
    }

    let mut units = [0_u16; 2];
    let words = if code_point < SUPPLEMENTARY_BASE {
        units[0] = code_point as u16;
        1
    } else {
        let offset = code_point.wrapping_sub(SUPPLEMENTARY_BASE);
        units[0] = HIGH_SURROGATE_MIN.wrapping_add(offset >> 10) as u16;
        units[1] = LOW_SURROGATE_MIN.wrapping_add(offset & 0x3FF) as u16;
        2
    };

    for (i, unit) in units.iter().take(words).enumerate() {
        let [hi, lo] = unit.to_be_bytes();
        match byte_order {
            ByteOrder::Big => {
                out.bytes[i * 2] = hi;
                out.bytes[i * 2 + 1] = lo;
            }
            ByteOrder::Little => {
                out.bytes[i * 2] = lo;
                out.bytes[i * 2 + 1] = hi;
            }
        }
    }

    out.word_count = words as u8;
    out.byte_count = (words * 2) as u8;
    out
}

/// Encodes big-endian UTF-16.
#[must_use]
pub fn encode_utf16_be(code_point: u32) -> Transcoding {
    encode_utf16(code_point, ByteOrder::Big)
}

/// Encodes little-endian UTF-16.
#[must_use]
pub fn encode_utf16_le(code_point: u32) -> Transcoding {
    encode_utf16(code_point, ByteOrder::Little)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_bmp_both_orders() {
        let be = decode_utf16_be(&[0x73, 0x2B, 0, 0, 0, 0, 0, 0]);
        assert_eq!(be.status, Status::Ok);
        assert_eq!(be.code_point, 0x732B);
        assert_eq!(be.word_count, 1);
        assert_eq!(be.byte_count, 2);
        assert_eq!(be.as_bytes(), &[0x73, 0x2B]);

        let le = decode_utf16_le(&[0x2B, 0x73, 0, 0, 0, 0, 0, 0]);
        assert_eq!(le.status, Status::Ok);
        assert_eq!(le.code_point, 0x732B);
        assert_eq!(le.as_bytes(), &[0x2B, 0x73]);
    }

    #[test]
    fn decode_surrogate_pair_be() {
        let out = decode_utf16_be(&[0xDB, 0xFF, 0xDF, 0xFF, 0, 0, 0, 0]);
        assert_eq!(out.status, Status::Ok);
        assert_eq!(out.code_point, 0x10_FFFF);
        assert_eq!(out.word_count, 2);
        assert_eq!(out.byte_count, 4);
        assert_eq!(out.as_bytes(), &[0xDB, 0xFF, 0xDF, 0xFF]);
    }

    #[test]
    fn decode_surrogate_pair_le() {
        let out = decode_utf16_le(&[0xFF, 0xDB, 0xFF, 0xDF, 0, 0, 0, 0]);
        assert_eq!(out.status, Status::Ok);
        assert_eq!(out.code_point, 0x10_FFFF);
        assert_eq!(out.word_count, 2);
    }

    #[test]
    fn decode_first_supplementary() {
        // U+10000 = D800 DC00
        let out = decode_utf16_be(&[0xD8, 0x00, 0xDC, 0x00, 0, 0, 0, 0]);
        assert_eq!(out.status, Status::Ok);
        assert_eq!(out.code_point, 0x1_0000);
    }

    #[test]
    fn decode_lone_low_surrogate() {
        let out = decode_utf16_be(&[0xDC, 0x00, 0, 0, 0, 0, 0, 0]);
        assert_eq!(out.status, Status::UnexpectedContinuation);
        assert_eq!(out.code_point, 0);
        assert_eq!(out.word_count, 1);
        assert_eq!(out.byte_count, 2);
    }

    #[test]
    fn decode_high_surrogate_without_pair() {
        let out = decode_utf16_be(&[0xD8, 0x00, 0, 0, 0, 0, 0, 0]);
        assert_eq!(out.status, Status::TooFewWords);
        assert_eq!(out.word_count, 1);
        assert_eq!(out.byte_count, 2);
        assert_eq!(out.as_bytes(), &[0xD8, 0x00]);
    }

    #[test]
    fn decode_high_surrogate_short_window() {
        let out = decode_utf16_le(&[0x00, 0xD8]);
        assert_eq!(out.status, Status::TooFewWords);
        assert_eq!(out.word_count, 1);
        assert_eq!(out.byte_count, 2);
    }

    #[test]
    fn decode_window_shorter_than_one_unit() {
        let out = decode_utf16_be(&[0xD8]);
        assert_eq!(out.status, Status::TooFewWords);
        assert_eq!(out.word_count, 0);
        assert_eq!(out.byte_count, 1);
        assert_eq!(out.as_bytes(), &[0xD8]);
    }

    #[test]
    fn encode_bmp_both_orders() {
        let be = encode_utf16_be(0x732B);
        assert_eq!(be.status, Status::Ok);
        assert_eq!(be.as_bytes(), &[0x73, 0x2B]);

        let le = encode_utf16_le(0x732B);
        assert_eq!(le.as_bytes(), &[0x2B, 0x73]);
    }

    #[test]
    fn encode_ascii_pads_unit() {
        let be = encode_utf16_be(u32::from(b'A'));
        assert_eq!(be.as_bytes(), &[0x00, b'A']);

        let le = encode_utf16_le(u32::from(b'A'));
        assert_eq!(le.as_bytes(), &[b'A', 0x00]);
    }

    #[test]
    fn encode_max_scalar_pair() {
        let be = encode_utf16_be(0x10_FFFF);
        assert_eq!(be.status, Status::Ok);
        assert_eq!(be.word_count, 2);
        assert_eq!(be.as_bytes(), &[0xDB, 0xFF, 0xDF, 0xFF]);

        let le = encode_utf16_le(0x10_FFFF);
        assert_eq!(le.as_bytes(), &[0xFF, 0xDB, 0xFF, 0xDF]);
    }

    #[test]
    fn encode_surrogate_is_illegal_but_deterministic() {
        let out = encode_utf16_be(0xD800);
        assert_eq!(out.status, Status::IllegalCodePoint);
        assert_eq!(out.word_count, 1);
        assert_eq!(out.as_bytes(), &[0xD8, 0x00]);
    }

    #[test]
    fn encode_above_range_is_illegal_but_deterministic() {
        let out = encode_utf16_be(0x11_0000);
        assert_eq!(out.status, Status::IllegalCodePoint);
        assert_eq!(out.word_count, 2);
        // 0x110000 - 0x10000 = 0x100000; D800 + 0x400 = DC00, DC00 + 0.
        assert_eq!(out.as_bytes(), &[0xDC, 0x00, 0xDC, 0x00]);
    }
}
