//! Byte-stream decoding
//!
//! Detects gzip input by magic bytes and produces decoded text. Decoding is
//! strict UTF-8: invalid byte sequences fail the whole load rather than
//! being silently replaced.

use std::io::Read;

use flate2::read::MultiGzDecoder;

use crate::error::SvError;

/// Gzip magic sequence: ID1, ID2, and the deflate compression method byte.
const GZIP_MAGIC: [u8; 3] = [0x1F, 0x8B, 0x08];

/// Decode raw input bytes into text.
///
/// If the buffer starts with the gzip magic sequence the full buffer is
/// decompressed first (multi-member aware, so bgzip-style `.vcf.gz` files
/// decode completely). The result is decoded as strict UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> Result<String, SvError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut decoder = MultiGzDecoder::new(bytes);
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| SvError::Encoding {
                msg: format!("gzip decompression failed: {}", e),
            })?;
        into_utf8(decompressed)
    } else {
        into_utf8(bytes.to_vec())
    }
}

fn into_utf8(bytes: Vec<u8>) -> Result<String, SvError> {
    String::from_utf8(bytes).map_err(|e| SvError::Encoding {
        msg: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_plain_text_passthrough() {
        let text = "22\t100\t200\tregionA\n";
        assert_eq!(decode_bytes(text.as_bytes()).unwrap(), text);
    }

    #[test]
    fn test_gzip_detected_and_decompressed() {
        let text = "#CHROM\tPOS\n22\t100\n";
        let compressed = gzip(text.as_bytes());
        assert_eq!(&compressed[..3], &GZIP_MAGIC);
        assert_eq!(decode_bytes(&compressed).unwrap(), text);
    }

    #[test]
    fn test_multi_member_gzip() {
        // bgzip-style files are a concatenation of gzip members
        let mut compressed = gzip(b"first\n");
        compressed.extend(gzip(b"second\n"));
        assert_eq!(decode_bytes(&compressed).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = decode_bytes(&[0x22, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, SvError::Encoding { .. }));
    }

    #[test]
    fn test_invalid_utf8_inside_gzip_is_an_error() {
        let compressed = gzip(&[0xC3, 0x28]);
        let err = decode_bytes(&compressed).unwrap_err();
        assert!(matches!(err, SvError::Encoding { .. }));
    }

    #[test]
    fn test_truncated_gzip_is_an_error() {
        let compressed = gzip(b"some text that compresses");
        let err = decode_bytes(&compressed[..compressed.len() / 2]).unwrap_err();
        assert!(matches!(err, SvError::Encoding { .. }));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_bytes(b"").unwrap(), "");
    }
}
