use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    qr::{ports::QrEncoder, value_objects::QrImage},
};

#[derive(Debug, Clone)]
pub struct PngQrEncoder {
    size: u32,
}

impl PngQrEncoder {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl Default for PngQrEncoder {
    fn default() -> Self {
        Self::new(240)
    }
}

impl QrEncoder for PngQrEncoder {
    fn encode(&self, url: &str) -> Result<QrImage, CoreError> {
        let code = QrCode::new(url.as_bytes()).map_err(|e| {
            error!("Failed to encode QR code for {}: {}", url, e);
            CoreError::QrEncoding(e.to_string())
        })?;

        let rendered = code
            .render::<Luma<u8>>()
            .min_dimensions(self.size, self.size)
            .build();

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(rendered)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| {
                error!("Failed to write QR code image: {}", e);
                CoreError::QrEncoding(e.to_string())
            })?;

        Ok(QrImage::png(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::qr::testing::decode_data_url;

    #[test]
    fn test_encode_round_trips_url() {
        let url = "https://assets.example.org/device/PC-001";

        let image = PngQrEncoder::new(160).encode(url).unwrap();

        assert_eq!(image.mime_type, "image/png");
        assert_eq!(&image.bytes[..4], &[0x89, b'P', b'N', b'G']);
        assert_eq!(decode_data_url(&image.to_data_url()), url);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let encoder = PngQrEncoder::default();
        let url = "http://localhost:5173/device/42";

        assert_eq!(encoder.encode(url).unwrap(), encoder.encode(url).unwrap());
    }

    #[test]
    fn test_encode_respects_minimum_size() {
        let image = PngQrEncoder::new(300).encode("http://localhost:5173/device/1").unwrap();
        let decoded = image::load_from_memory(&image.bytes).unwrap();

        assert!(decoded.width() >= 300);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_encode_rejects_oversized_payload() {
        let url = format!("http://localhost:5173/device/{}", "x".repeat(8000));

        let result = PngQrEncoder::default().encode(&url);

        assert!(matches!(result, Err(CoreError::QrEncoding(_))));
    }
}
