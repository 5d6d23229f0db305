// SPDX-License-Identifier: Apache-2.0

//! Byte classes shared by the classifier, the decoders and the tree builder.

/// Byte reported for every position at or past the end of content.
pub const SENTINEL: u8 = 0;

/// JSON insignificant whitespace: space, tab, line feed, carriage return.
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes allowed right after a scalar lexeme.
pub const fn is_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b',' | b']' | b'}' | SENTINEL)
}

pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        for byte in [b' ', b'\t', b'\n', b'\r'] {
            assert!(is_whitespace(byte));
        }
        // Form feed and vertical tab are not JSON whitespace
        assert!(!is_whitespace(0x0C));
        assert!(!is_whitespace(0x0B));
        assert!(!is_whitespace(SENTINEL));
    }

    #[test]
    fn test_delimiters() {
        for byte in [b',', b']', b'}', b' ', b'\n', SENTINEL] {
            assert!(is_delimiter(byte), "{byte} should delimit");
        }
        for byte in [b':', b'[', b'{', b'"', b'a', b'0'] {
            assert!(!is_delimiter(byte), "{byte} should not delimit");
        }
    }
}
