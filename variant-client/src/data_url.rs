//! Data-URL image codec
//!
//! Bridges a locally selected file to (a) a previewable data URL held in the
//! editor and (b) the binary form part uploaded at submission time.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::ClientResult;

/// Decoded image ready to attach as a multipart file part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Whether a string holds an encoded image rather than a storage path
pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}

/// Guess the MIME type of a file from its extension
pub fn mime_for_path(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Encode raw bytes as a data URL with the given MIME type
pub fn encode_bytes(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a local file and encode it as a data URL.
///
/// The MIME type comes from the file extension. Callers that require an
/// image gate check the type before calling (the edit flow does, the
/// creation flow deliberately does not).
pub async fn encode_file(path: impl AsRef<Path>) -> ClientResult<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let mime = mime_for_path(path);
    tracing::debug!(
        path = %path.display(),
        mime = %mime,
        size = bytes.len(),
        "Encoded image file"
    );
    Ok(encode_bytes(&bytes, &mime))
}

/// Decode a data URL back into named binary content.
///
/// Returns `None` when the header does not match `data:<mime>;base64,` or
/// the payload is not valid base64. Callers treat that as "no image to
/// attach", never as a hard error.
pub fn decode(data_url: &str, filename: impl Into<String>) -> Option<DecodedImage> {
    let (header, payload) = data_url.split_once(',')?;
    let mime = header.strip_prefix("data:")?.strip_suffix(";base64")?;
    if mime.is_empty() {
        return None;
    }
    let bytes = STANDARD.decode(payload).ok()?;
    Some(DecodedImage {
        filename: filename.into(),
        mime: mime.to_string(),
        bytes,
    })
}
