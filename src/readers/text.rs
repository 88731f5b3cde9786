use std::borrow::Cow;

use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::warn;

/// Decode an uploaded export, falling back to Windows-1252 when it is not
/// valid UTF-8. Spreadsheet exports from field laptops often carry a
/// single-byte degree sign (0xB0).
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, malformed) = UTF_8.decode(bytes);
    if !malformed {
        return text;
    }

    warn!("input is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(decode_text("0.6341° N".as_bytes()), "0.6341° N");
    }

    #[test]
    fn test_strips_utf8_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFdate,count"), "date,count");
    }

    #[test]
    fn test_windows_1252_degree_sign() {
        assert_eq!(decode_text(b"0.6341\xB0 S"), "0.6341° S");
    }
}
