use data_encoding::{BASE32, BASE32_NOPAD};

use crate::errors::{Error, Result};

/// Decodes a user-supplied Base32 secret into raw key bytes.
///
/// Entry is case-insensitive and tolerates both padded and unpadded
/// forms. Anything outside the RFC 4648 alphabet, misplaced padding or
/// empty input is a decode error; a partial result is never returned.
pub fn decode_secret(text: &str) -> Result<Vec<u8>> {
    let normalized = text.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err(Error::Decode("secret is empty".to_owned()));
    }

    let encoding = if normalized.contains('=') {
        &BASE32
    } else {
        &BASE32_NOPAD
    };

    encoding
        .decode(normalized.as_bytes())
        .map_err(|err| Error::Decode(err.to_string()))
}

/// Canonical padded Base32 encoding of raw key bytes.
pub fn encode_secret(raw: &[u8]) -> String {
    BASE32.encode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_padded() {
        let raw = b"12345678901234567890";
        let encoded = encode_secret(raw);
        assert_eq!(encoded, "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ");
        assert_eq!(decode_secret(&encoded).unwrap(), raw);
    }

    #[test]
    fn round_trip_arbitrary_bytes() {
        for raw in [&b"hello"[..], &[0u8, 255, 1, 2, 3], &[42u8; 17]] {
            let encoded = encode_secret(raw);
            assert_eq!(decode_secret(&encoded).unwrap(), raw);
            assert_eq!(
                decode_secret(&encoded.to_ascii_lowercase()).unwrap(),
                raw
            );
        }
    }

    #[test]
    fn accepts_unpadded_input() {
        assert_eq!(decode_secret("NBSWY3DP").unwrap(), b"hello");
        assert_eq!(decode_secret("nbswy3dp").unwrap(), b"hello");
        // "hell" encodes with padding; both forms decode.
        assert_eq!(decode_secret("NBSWY3A=").unwrap(), b"hell");
        assert_eq!(decode_secret("NBSWY3A").unwrap(), b"hell");
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for bad in ["NBSW1", "NBSW0", "NBSW8", "NBSW9", "NB SW"] {
            assert!(matches!(decode_secret(bad), Err(Error::Decode(_))));
        }
    }

    #[test]
    fn rejects_empty_and_bad_padding() {
        assert!(matches!(decode_secret(""), Err(Error::Decode(_))));
        assert!(matches!(decode_secret("   "), Err(Error::Decode(_))));
        assert!(matches!(decode_secret("NBSWY3DP="), Err(Error::Decode(_))));
    }
}
