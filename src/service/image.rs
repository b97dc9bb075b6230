use std::io::{self, Cursor};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::info;
use crate::config::config::OutputFormat;
use crate::models::conversion::ConversionRequest;
use crate::service::traits::i_service::ImageServiceTrait;

// JPEG 預設品質
pub const JPEG_QUALITY: u8 = 80;

/// Image 服務，以 image crate 解碼 WebP 並編碼為 JPG / PNG
pub struct ImageService;

impl ImageService {
    pub fn new() -> Self {
        ImageService
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageServiceTrait for ImageService {
    fn convert(&self, request: &ConversionRequest) -> io::Result<Vec<u8>> {
        let image = ImageReader::open(&request.source_path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("decode failed: {}", e)))?;
        info!(
            "Decoded {} ({}x{})",
            request.source_path.display(),
            image.width(),
            image.height()
        );
        encode(&image, request.target_format)
    }
}

pub fn encode(image: &DynamicImage, format: OutputFormat) -> io::Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let result = match format {
        // JPEG 不支援透明通道，先轉為 RGB
        OutputFormat::Jpg => DynamicImage::ImageRgb8(image.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)),
        OutputFormat::Png => image.write_to(&mut buffer, ImageFormat::Png),
    };
    result.map_err(|e| io::Error::new(io::ErrorKind::Other, format!("{} encode failed: {}", format, e)))?;
    Ok(buffer.into_inner())
}
