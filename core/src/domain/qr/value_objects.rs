use base64::{Engine as _, engine::general_purpose};

/// An encoded QR image, ready to embed in JSON or HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl QrImage {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "image/png",
            bytes,
        }
    }

    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Builds `{base_url}/device/{identifier}` with the identifier percent-encoded as a single
/// path segment.
pub fn public_device_url(base_url: &str, identifier: &str) -> String {
    format!(
        "{}/device/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(identifier)
    )
}
