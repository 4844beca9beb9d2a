//! Image file → base64 payload + media type.
//!
//! The file is rendered as a `data:<mime>;base64,<payload>` envelope and then
//! split back apart, so every encoded image passes the same parser that
//! guards externally produced data URLs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::mime;
use crate::types::{EncodedImage, EncodingError, SelectedImage};

/// Read and encode a picked image file.
pub async fn encode_file(image: &SelectedImage) -> Result<EncodedImage, EncodingError> {
    let path = image.path();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| EncodingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let media_type = mime::from_extension(path)
        .or_else(|| mime::sniff(&bytes))
        .ok_or_else(|| EncodingError::UnknownMediaType(path.to_path_buf()))?;

    let encoded = encode_bytes(&bytes, media_type)?;
    tracing::debug!(
        file = %image.display_name(),
        bytes = bytes.len(),
        media_type = %encoded.media_type,
        "Encoded image"
    );
    Ok(encoded)
}

/// Encode in-memory image bytes with a known media type.
pub fn encode_bytes(bytes: &[u8], media_type: &str) -> Result<EncodedImage, EncodingError> {
    parse_data_url(&to_data_url(bytes, media_type))
}

/// Render bytes as a base64 data URL.
pub fn to_data_url(bytes: &[u8], media_type: &str) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Split a `data:<mime>;base64,<payload>` envelope.
pub fn parse_data_url(data_url: &str) -> Result<EncodedImage, EncodingError> {
    let (meta, payload) = data_url
        .split_once(',')
        .ok_or(EncodingError::MalformedEnvelope("missing ',' separator"))?;

    let meta = meta
        .strip_prefix("data:")
        .ok_or(EncodingError::MalformedEnvelope("missing 'data:' prefix"))?;
    let mut params = meta.split(';');
    let media_type = params.next().unwrap_or("").trim();
    if media_type.is_empty() {
        return Err(EncodingError::MalformedEnvelope("missing media type"));
    }
    if !params.any(|p| p == "base64") {
        return Err(EncodingError::MalformedEnvelope("payload is not base64"));
    }
    if payload.is_empty() {
        return Err(EncodingError::MalformedEnvelope("missing payload"));
    }
    if !mime::is_image(media_type) {
        return Err(EncodingError::UnsupportedMediaType(media_type.to_string()));
    }

    // Reject truncated or corrupted payloads here rather than at the service.
    STANDARD.decode(payload)?;

    Ok(EncodedImage {
        encoded_bytes: payload.to_string(),
        media_type: media_type.to_string(),
    })
}

/// Recover the original file bytes.
pub fn decode(image: &EncodedImage) -> Result<Vec<u8>, EncodingError> {
    Ok(STANDARD.decode(&image.encoded_bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[tokio::test]
    async fn test_encode_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sign.png");
        let mut content = PNG_HEADER.to_vec();
        content.extend((0..=255u8).cycle().take(4096));
        std::fs::write(&path, &content).unwrap();

        let encoded = encode_file(&SelectedImage::new(&path)).await.unwrap();
        assert_eq!(encoded.media_type, "image/png");
        assert_eq!(decode(&encoded).unwrap(), content);
    }

    #[tokio::test]
    async fn test_encode_file_sniffs_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();

        let encoded = encode_file(&SelectedImage::new(&path)).await.unwrap();
        assert_eq!(encoded.media_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_encode_file_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "just text").unwrap();

        let err = encode_file(&SelectedImage::new(&path)).await.unwrap_err();
        assert!(matches!(err, EncodingError::UnsupportedMediaType(m) if m == "text/plain"));
    }

    #[tokio::test]
    async fn test_encode_file_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob");
        std::fs::write(&path, b"no magic here").unwrap();

        let err = encode_file(&SelectedImage::new(&path)).await.unwrap_err();
        assert!(matches!(err, EncodingError::UnknownMediaType(_)));
    }

    #[tokio::test]
    async fn test_encode_file_empty_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        let err = encode_file(&SelectedImage::new(&path)).await.unwrap_err();
        assert!(matches!(err, EncodingError::MalformedEnvelope(_)));
    }

    #[tokio::test]
    async fn test_encode_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_file(&SelectedImage::new(dir.path().join("gone.png")))
            .await
            .unwrap_err();
        assert!(matches!(err, EncodingError::Io { .. }));
    }

    #[test]
    fn test_parse_data_url() {
        let encoded = parse_data_url("data:image/webp;base64,aGVsbG8=").unwrap();
        assert_eq!(encoded.media_type, "image/webp");
        assert_eq!(encoded.encoded_bytes, "aGVsbG8=");
        assert_eq!(decode(&encoded).unwrap(), b"hello");
    }

    #[test]
    fn test_parse_data_url_malformed() {
        for bad in [
            "data:image/png;base64",
            "image/png;base64,aGVsbG8=",
            "data:;base64,aGVsbG8=",
            "data:image/png,aGVsbG8=",
            "data:image/png;base64,",
        ] {
            let err = parse_data_url(bad).unwrap_err();
            assert!(
                matches!(err, EncodingError::MalformedEnvelope(_)),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_data_url_bad_payload() {
        let err = parse_data_url("data:image/png;base64,@@@").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidBase64(_)));
    }

    #[test]
    fn test_to_data_url() {
        assert_eq!(
            to_data_url(b"hello", "image/gif"),
            "data:image/gif;base64,aGVsbG8="
        );
    }
}
