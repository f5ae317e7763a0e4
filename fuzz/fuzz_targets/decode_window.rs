#![no_main]

use codec::decode;
use libfuzzer_sys::fuzz_target;
use scalar::{is_valid_code_point, ByteOrder, Encoding, Status};

fuzz_target!(|data: &[u8]| {
    let forms = [
        (Encoding::Utf8, ByteOrder::Little),
        (Encoding::Utf16, ByteOrder::Big),
        (Encoding::Utf16, ByteOrder::Little),
        (Encoding::Utf32, ByteOrder::Big),
        (Encoding::Utf32, ByteOrder::Little),
    ];

    // Walk the input as a series of (possibly short) windows.
    let mut offset = 0usize;
    while offset < data.len() && offset < 4096 {
        let window = &data[offset..data.len().min(offset + 8)];

        for (encoding, byte_order) in forms {
            let out = decode(window, encoding, byte_order);

            assert!(out.byte_count as usize <= window.len());
            if out.word_count > 0 {
                assert_eq!(
                    out.byte_count as usize,
                    out.word_count as usize * encoding.unit_bytes()
                );
            }
            assert_eq!(out.as_bytes(), &window[..out.byte_count as usize]);
            if out.status == Status::Ok {
                assert!(is_valid_code_point(out.code_point));
            }
        }

        offset += 1;
    }
});
