//! Inspection and debugging tools for the utfx codec.
//!
//! This crate provides the plumbing behind the `utfx-tools` binary:
//!
//! - Parse a hex byte window or a `U+XXXX` code point from the command line
//! - Run it through the codec and build a structured report
//! - Render the report as JSON or human-readable text
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use std::fmt;

use codec::{decode, encode};
use scalar::{ByteOrder, Encoding, Status, Transcoding, WINDOW_BYTES};
use serde::Serialize;

/// Errors from parsing command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseInputError {
    /// The code point argument was not `U+XXXX`, `0x...`, or decimal.
    InvalidCodePoint { found: String },

    /// A token in the hex window was not a two-digit hex byte.
    InvalidHexByte { found: String },

    /// The hex window held no bytes at all.
    EmptyWindow,

    /// The hex window held more bytes than the decoder's window.
    WindowTooLong { len: usize },
}

impl fmt::Display for ParseInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodePoint { found } => {
                write!(f, "invalid code point {found:?}, expected U+XXXX, 0x..., or decimal")
            }
            Self::InvalidHexByte { found } => {
                write!(f, "invalid hex byte {found:?}")
            }
            Self::EmptyWindow => write!(f, "empty byte window"),
            Self::WindowTooLong { len } => {
                write!(f, "window of {len} bytes exceeds the {WINDOW_BYTES}-byte maximum")
            }
        }
    }
}

impl std::error::Error for ParseInputError {}

/// Parses a code point written as `U+XXXX`, `0x...`, or decimal.
pub fn parse_code_point(input: &str) -> Result<u32, ParseInputError> {
    let trimmed = input.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        trimmed.parse()
    };
    parsed.map_err(|_| ParseInputError::InvalidCodePoint {
        found: input.to_string(),
    })
}

/// Parses a window of hex bytes, either contiguous (`E78CAB`) or separated
/// by spaces or commas (`E7 8C AB`, `0xE7,0x8C`).
pub fn parse_hex_window(input: &str) -> Result<Vec<u8>, ParseInputError> {
    let mut bytes = Vec::with_capacity(WINDOW_BYTES);
    for token in input.split([' ', ',']).filter(|token| !token.is_empty()) {
        let token = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")).unwrap_or(token);
        if token.len() % 2 != 0 {
            return Err(ParseInputError::InvalidHexByte {
                found: token.to_string(),
            });
        }
        for pair in 0..token.len() / 2 {
            let digits = &token[pair * 2..pair * 2 + 2];
            let byte = u8::from_str_radix(digits, 16).map_err(|_| {
                ParseInputError::InvalidHexByte {
                    found: digits.to_string(),
                }
            })?;
            bytes.push(byte);
        }
    }
    if bytes.is_empty() {
        return Err(ParseInputError::EmptyWindow);
    }
    if bytes.len() > WINDOW_BYTES {
        return Err(ParseInputError::WindowTooLong { len: bytes.len() });
    }
    Ok(bytes)
}

/// Decodes a possibly-short window, zero-padded out to the conventional size.
#[must_use]
pub fn decode_window(bytes: &[u8], encoding: Encoding, byte_order: ByteOrder) -> Transcoding {
    let mut window = [0u8; WINDOW_BYTES];
    let take = bytes.len().min(WINDOW_BYTES);
    window[..take].copy_from_slice(&bytes[..take]);
    decode(&window, encoding, byte_order)
}

/// Encodes a code point; thin alias kept so the binary only talks to this crate.
#[must_use]
pub fn encode_code_point(code_point: u32, encoding: Encoding, byte_order: ByteOrder) -> Transcoding {
    encode(code_point, encoding, byte_order)
}

/// A transcoding record flattened for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct TranscodingReport {
    pub status: Status,
    pub code_point: u32,
    pub code_point_display: String,
    pub encoding: Encoding,
    pub byte_order: ByteOrder,
    pub word_count: u8,
    pub byte_count: u8,
    pub bytes: Vec<String>,
}

impl From<&Transcoding> for TranscodingReport {
    fn from(record: &Transcoding) -> Self {
        Self {
            status: record.status,
            code_point: record.code_point,
            code_point_display: format!("U+{:04X}", record.code_point),
            encoding: record.encoding,
            byte_order: record.byte_order,
            word_count: record.word_count,
            byte_count: record.byte_count,
            bytes: record
                .as_bytes()
                .iter()
                .map(|byte| format!("0x{byte:02X}"))
                .collect(),
        }
    }
}

/// Renders a record the way the test harness prints expectations.
#[must_use]
pub fn format_report_pretty(record: &Transcoding) -> String {
    use fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "status: {}", record.status);
    let _ = writeln!(out, "codepoint: U+{:04X}", record.code_point);
    if record.encoding.is_byte_order_sensitive() {
        let _ = writeln!(out, "form: {} {}", record.encoding, record.byte_order);
    } else {
        let _ = writeln!(out, "form: {}", record.encoding);
    }
    let _ = write!(out, "words: {}; bytes:", record.word_count);
    for byte in record.as_bytes() {
        let _ = write!(out, " 0x{byte:02X}");
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_code_point_forms() {
        assert_eq!(parse_code_point("U+732B").unwrap(), 0x732B);
        assert_eq!(parse_code_point("u+41").unwrap(), 0x41);
        assert_eq!(parse_code_point("0x10FFFF").unwrap(), 0x10_FFFF);
        assert_eq!(parse_code_point("65").unwrap(), 65);
    }

    #[test]
    fn parse_code_point_rejects_garbage() {
        let err = parse_code_point("cat").unwrap_err();
        assert!(matches!(err, ParseInputError::InvalidCodePoint { .. }));
        assert!(err.to_string().contains("cat"));
    }

    #[test]
    fn parse_hex_window_contiguous() {
        assert_eq!(parse_hex_window("E78CAB").unwrap(), vec![0xE7, 0x8C, 0xAB]);
    }

    #[test]
    fn parse_hex_window_separated() {
        assert_eq!(
            parse_hex_window("E7 8C AB").unwrap(),
            vec![0xE7, 0x8C, 0xAB]
        );
        assert_eq!(
            parse_hex_window("0xDB,0xFF,0xDF,0xFF").unwrap(),
            vec![0xDB, 0xFF, 0xDF, 0xFF]
        );
    }

    #[test]
    fn parse_hex_window_rejects_bad_input() {
        assert!(matches!(
            parse_hex_window(""),
            Err(ParseInputError::EmptyWindow)
        ));
        assert!(matches!(
            parse_hex_window("E7 8"),
            Err(ParseInputError::InvalidHexByte { .. })
        ));
        assert!(matches!(
            parse_hex_window("ZZ"),
            Err(ParseInputError::InvalidHexByte { .. })
        ));
        assert!(matches!(
            parse_hex_window("00 11 22 33 44 55 66 77 88"),
            Err(ParseInputError::WindowTooLong { len: 9 })
        ));
    }

    #[test]
    fn decode_window_pads_short_input() {
        let record = decode_window(&[0xE7, 0x8C, 0xAB], Encoding::Utf8, ByteOrder::Little);
        assert_eq!(record.status, Status::Ok);
        assert_eq!(record.code_point, 0x732B);
    }

    #[test]
    fn report_flattens_record() {
        let record = encode_code_point(0x732B, Encoding::Utf16, ByteOrder::Big);
        let report = TranscodingReport::from(&record);
        assert_eq!(report.code_point_display, "U+732B");
        assert_eq!(report.word_count, 1);
        assert_eq!(report.bytes, vec!["0x73".to_string(), "0x2B".to_string()]);
    }

    #[test]
    fn report_serializes_to_json() {
        let record = encode_code_point(0x41, Encoding::Utf8, ByteOrder::Little);
        let report = TranscodingReport::from(&record);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"encoding\":\"utf-8\""));
    }

    #[test]
    fn pretty_format_lists_bytes() {
        let record = encode_code_point(0x10_FFFF, Encoding::Utf16, ByteOrder::Big);
        let text = format_report_pretty(&record);
        assert!(text.contains("status: ok"));
        assert!(text.contains("codepoint: U+10FFFF"));
        assert!(text.contains("utf-16 big-endian"));
        assert!(text.contains("0xDB 0xFF 0xDF 0xFF"));
    }
}
