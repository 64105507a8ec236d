use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// a photo pulled out of a `data:` URI
#[derive(Debug, PartialEq)]
pub struct DecodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, PartialEq)]
pub enum ImageCodecError {
    /// the string isn't a base64 data URI
    NotADataUri,
    /// the base64 payload is malformed
    BadEncoding,
}

/// splits a `data:<mime>;base64,<payload>` URI into mime type and raw bytes.
/// Only base64 payloads are accepted, which is all the clients ever produce
pub fn decode_data_uri(uri: &str) -> Result<DecodedImage, ImageCodecError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or(ImageCodecError::NotADataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(ImageCodecError::NotADataUri)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(ImageCodecError::NotADataUri)?;
    let mime = if mime.is_empty() { "image/jpeg" } else { mime };
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|_| ImageCodecError::BadEncoding)?;
    Ok(DecodedImage {
        mime: mime.to_string(),
        bytes,
    })
}

/// the inverse of [`decode_data_uri`], used to inline a stored photo into a
/// detail response
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_uri() {
        // "hello" in base64
        let decoded = decode_data_uri("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!("image/jpeg", decoded.mime);
        assert_eq!(b"hello".to_vec(), decoded.bytes);
    }

    #[test]
    fn decode_without_prefix() {
        assert_eq!(
            Err(ImageCodecError::NotADataUri),
            decode_data_uri("http://somewhere/else.jpg")
        );
    }

    #[test]
    fn decode_without_base64_marker() {
        assert_eq!(
            Err(ImageCodecError::NotADataUri),
            decode_data_uri("data:image/jpeg,rawstuff")
        );
    }

    #[test]
    fn decode_bad_payload() {
        assert_eq!(
            Err(ImageCodecError::BadEncoding),
            decode_data_uri("data:image/jpeg;base64,!!!not base64!!!")
        );
    }

    #[test]
    fn encode_round_trips() {
        let uri = encode_data_uri("image/png", b"pixels");
        let decoded = decode_data_uri(&uri).unwrap();
        assert_eq!("image/png", decoded.mime);
        assert_eq!(b"pixels".to_vec(), decoded.bytes);
    }
}
