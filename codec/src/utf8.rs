//! UTF-8 decoding and encoding for one code point.

use scalar::{is_valid_code_point, ByteOrder, Encoding, Status, Transcoding, MAX_ENCODED_BYTES};

/// Longest lead form the decoder accepts: seven leading ones.
///
/// Legal Unicode stops at four bytes, but the legacy 5/6-byte forms and the
/// 0xFE lead are decoded mechanically so out-of-range values written by the
/// extended encoder round-trip for diagnostics. A 0xFF lead scans the same
/// as 0xFE, matching the original length scan.
const MAX_SEQUENCE_LEN: usize = 7;

/// Forbidden high-bit masks for overlong detection, indexed by sequence
/// length. A fully assembled n-byte value is overlong when none of these
/// bits are set, because it would have fit the (n-1)-byte form's payload
/// budget (the 7/11/16/21/26/31-bit ladder).
const OVERLONG_MASK: [u64; MAX_SEQUENCE_LEN + 1] = [
    0,
    0,
    !0 << 7,  // 2-byte form: values below 0x80 fit one byte
    !0 << 11, // 3-byte form: values below 0x800 fit two
    !0 << 16, // 4-byte form: values below 0x10000 fit three
    !0 << 21,
    !0 << 26,
    !0 << 31,
];

/// Decodes the first UTF-8 sequence in `window`.
///
/// The window is read byte-by-byte; a missing or malformed continuation
/// stops consumption immediately, and the record's bytes hold exactly what
/// was examined. Never reads past what the lead byte calls for.
#[must_use]
pub fn decode_utf8(window: &[u8]) -> Transcoding {
    let mut out = Transcoding::new(Encoding::Utf8, ByteOrder::Little);

    let Some(&lead) = window.first() else {
        out.status = Status::TooFewWords;
        return out;
    };

    match lead >> 6 {
        // ascii
        0b00 | 0b01 => {
            out.code_point = u32::from(lead);
            out.set_units(1, window);
            return out;
        }
        // continuation byte with no lead before it
        0b10 => {
            out.status = Status::UnexpectedContinuation;
            out.set_units(1, window);
            return out;
        }
        _ => {}
    }

    let expected = (lead.leading_ones() as usize).min(MAX_SEQUENCE_LEN);
    // Lead payload: the bits below the run of ones and its terminating zero.
    let mut acc = u64::from(lead) & (0xFF >> (expected + 1));

    for i in 1..expected {
        match window.get(i) {
            Some(&byte) if byte & 0xC0 == 0x80 => {
                acc = (acc << 6) | u64::from(byte & 0x3F);
            }
            _ => {
                out.status = Status::TooFewWords;
                out.set_units(i as u8, window);
                return out;
            }
        }
    }

    // Diagnostic bit pattern; only meaningful when the status ends up Ok.
    out.code_point = (acc & u64::from(u32::MAX)) as u32;

    if acc & OVERLONG_MASK[expected] == 0 {
        out.status = Status::Overlong;
    } else if acc > u64::from(u32::MAX) || !is_valid_code_point(out.code_point) {
        out.status = Status::IllegalCodePoint;
    }

    out.set_units(expected as u8, window);
    out
}

/// Encodes `code_point` as UTF-8.
///
/// The input is not pre-validated: an illegal value still encodes to a
/// deterministic byte pattern (up to the 7-byte legacy form for the full
/// `u32` domain) with the verdict carried in the status field.
#[must_use]
pub fn encode_utf8(code_point: u32) -> Transcoding {
    let mut out = Transcoding::new(Encoding::Utf8, ByteOrder::Little);
    out.code_point = code_point;
    if !is_valid_code_point(code_point) {
        out.status = Status::IllegalCodePoint;
    }

    if code_point < 0x80 {
        out.bytes[0] = code_point as u8;
        out.word_count = 1;
        out.byte_count = 1;
        return out;
    }

    // Peel low six-bit groups into continuation bytes until the remaining
    // high bits fit the shrinking lead header, then stamp the lead prefix.
    let mut staging = [0u8; MAX_ENCODED_BYTES];
    let mut rest = code_point;
    let mut header_bits: u32 = 0x1F;
    let mut count = 0usize;

    loop {
        staging[MAX_ENCODED_BYTES - 1 - count] = 0x80 | (rest & 0x3F) as u8;
        rest >>= 6;
        count += 1;

        if rest & !header_bits == 0 {
            let lead = (0xFF_u32 << (7 - count)) as u8 | (rest & header_bits) as u8;
            staging[MAX_ENCODED_BYTES - 1 - count] = lead;
            count += 1;
            break;
        }
        header_bits >>= 1;
    }

    out.bytes[..count].copy_from_slice(&staging[MAX_ENCODED_BYTES - count..]);
    out.word_count = count as u8;
    out.byte_count = count as u8;
    out
}
