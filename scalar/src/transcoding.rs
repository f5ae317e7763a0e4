//! The fixed-size record produced by every transcoding operation.

use crate::encoding::{ByteOrder, Encoding};
use crate::status::Status;

/// Size of the conventional decode window in bytes.
///
/// Callers hand the decoder a window of up to this many bytes; no form needs
/// more (the longest legacy UTF-8 sequence is seven bytes). Shorter windows
/// are handled safely and report truncation through [`Status::TooFewWords`].
pub const WINDOW_BYTES: usize = 8;

/// Capacity of the raw byte buffer inside [`Transcoding`].
pub const MAX_ENCODED_BYTES: usize = 8;

/// The result of one encode or decode call.
///
/// A record is created fresh by each operation, fully populated before
/// return, and owned solely by the caller. Only the first
/// [`byte_count`](Self::byte_count) entries of [`bytes`](Self::bytes) are
/// meaningful; on malformed decodes they hold exactly the bytes examined
/// before the error was detected, so a caller knows how far to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transcoding {
    /// The decoded or supplied code point. Meaningful only when
    /// [`status`](Self::status) is [`Status::Ok`]; on error decodes it is
    /// zero or the diagnostic bit pattern that was assembled.
    pub code_point: u32,

    /// The encoding form this record was produced for.
    pub encoding: Encoding,

    /// Byte order of the raw form. Conventionally [`ByteOrder::Little`] for
    /// UTF-8, where it carries no information.
    pub byte_order: ByteOrder,

    /// Well-formedness verdict.
    pub status: Status,

    /// Code units consumed or produced (UTF-8: bytes, UTF-16: 16-bit units,
    /// UTF-32: always one).
    pub word_count: u8,

    /// Raw bytes consumed or produced.
    pub byte_count: u8,

    /// The raw encoded form; only `bytes[..byte_count]` is meaningful.
    pub bytes: [u8; MAX_ENCODED_BYTES],
}

impl Transcoding {
    /// Creates an empty record for the given form, status `Ok`.
    #[must_use]
    pub const fn new(encoding: Encoding, byte_order: ByteOrder) -> Self {
        Self {
            code_point: 0,
            encoding,
            byte_order,
            status: Status::Ok,
            word_count: 0,
            byte_count: 0,
            bytes: [0; MAX_ENCODED_BYTES],
        }
    }

    /// The meaningful prefix of the raw byte buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.byte_count as usize]
    }

    /// Returns `true` if the operation was well-formed.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Records `words` code units taken from the front of `window`, keeping
    /// byte and word counts consistent for the record's encoding form.
    ///
    /// The window must hold at least that many units; truncated reads go
    /// through [`set_truncated`](Self::set_truncated) instead.
    pub fn set_units(&mut self, words: u8, window: &[u8]) {
        let take = words as usize * self.encoding.unit_bytes();
        debug_assert!(take <= MAX_ENCODED_BYTES && take <= window.len());
        self.word_count = words;
        self.byte_count = take as u8;
        self.bytes[..take].copy_from_slice(&window[..take]);
    }

    /// Records a read that ended before one complete code unit: zero words,
    /// and whatever bytes the window actually held.
    pub fn set_truncated(&mut self, window: &[u8]) {
        let take = window.len().min(MAX_ENCODED_BYTES);
        self.word_count = 0;
        self.byte_count = take as u8;
        self.bytes[..take].copy_from_slice(&window[..take]);
    }
}

impl Default for Transcoding {
    fn default() -> Self {
        Self::new(Encoding::Utf8, ByteOrder::Little)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty_ok() {
        let record = Transcoding::new(Encoding::Utf16, ByteOrder::Big);
        assert_eq!(record.code_point, 0);
        assert_eq!(record.encoding, Encoding::Utf16);
        assert_eq!(record.byte_order, ByteOrder::Big);
        assert!(record.is_ok());
        assert_eq!(record.word_count, 0);
        assert_eq!(record.byte_count, 0);
        assert!(record.as_bytes().is_empty());
    }

    #[test]
    fn set_units_utf8_counts_bytes() {
        let mut record = Transcoding::new(Encoding::Utf8, ByteOrder::Little);
        record.set_units(3, &[0xE7, 0x8C, 0xAB, 0xFF]);
        assert_eq!(record.word_count, 3);
        assert_eq!(record.byte_count, 3);
        assert_eq!(record.as_bytes(), &[0xE7, 0x8C, 0xAB]);
    }

    #[test]
    fn set_units_utf16_doubles_bytes() {
        let mut record = Transcoding::new(Encoding::Utf16, ByteOrder::Big);
        record.set_units(2, &[0xDB, 0xFF, 0xDF, 0xFF, 0, 0]);
        assert_eq!(record.word_count, 2);
        assert_eq!(record.byte_count, 4);
        assert_eq!(record.as_bytes(), &[0xDB, 0xFF, 0xDF, 0xFF]);
    }

    #[test]
    fn set_truncated_records_partial_window() {
        let mut record = Transcoding::new(Encoding::Utf32, ByteOrder::Little);
        record.set_truncated(&[0xAA, 0xBB]);
        assert_eq!(record.word_count, 0);
        assert_eq!(record.byte_count, 2);
        assert_eq!(record.as_bytes(), &[0xAA, 0xBB]);
    }

    #[test]
    fn record_is_copy() {
        let record = Transcoding::new(Encoding::Utf8, ByteOrder::Little);
        let copied = record; // Copy
        assert_eq!(record, copied);
    }

    #[test]
    fn default_is_utf8_little() {
        let record = Transcoding::default();
        assert_eq!(record.encoding, Encoding::Utf8);
        assert_eq!(record.byte_order, ByteOrder::Little);
    }
}
