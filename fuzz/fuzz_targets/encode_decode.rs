#![no_main]

use codec::{decode, encode};
use libfuzzer_sys::fuzz_target;
use scalar::{is_valid_code_point, ByteOrder, Encoding, Status, WINDOW_BYTES};

fuzz_target!(|data: &[u8]| {
    // Use input bytes to drive code point values through every form.
    for chunk in data.chunks_exact(4).take(1024) {
        let code_point = u32::from_le_bytes(chunk.try_into().unwrap());

        for (encoding, byte_order) in [
            (Encoding::Utf8, ByteOrder::Little),
            (Encoding::Utf16, ByteOrder::Big),
            (Encoding::Utf16, ByteOrder::Little),
            (Encoding::Utf32, ByteOrder::Big),
            (Encoding::Utf32, ByteOrder::Little),
        ] {
            let encoded = encode(code_point, encoding, byte_order);

            assert_eq!(
                encoded.status == Status::Ok,
                is_valid_code_point(code_point)
            );
            assert_eq!(
                encoded.byte_count as usize,
                encoded.word_count as usize * encoding.unit_bytes()
            );

            // Valid scalars must survive the round trip bit-exactly.
            if encoded.status == Status::Ok {
                let mut window = [0u8; WINDOW_BYTES];
                window[..encoded.byte_count as usize].copy_from_slice(encoded.as_bytes());
                let decoded = decode(&window, encoding, byte_order);
                assert_eq!(decoded.status, Status::Ok);
                assert_eq!(decoded.code_point, code_point);
                assert_eq!(decoded.as_bytes(), encoded.as_bytes());
            }
        }
    }
});
