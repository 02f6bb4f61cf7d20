// src/infrastructure/media/image_resizer.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::imaging::{ImageProcessor, ResizedImage},
    uploads::ImageKind,
};
use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat, codecs::jpeg::JpegEncoder, imageops::FilterType};

const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Resizes with the `image` crate and re-encodes as JPEG.
#[derive(Debug, Clone, Copy)]
pub struct ImageCrateProcessor {
    jpeg_quality: u8,
}

impl Default for ImageCrateProcessor {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ImageCrateProcessor {
    pub fn with_quality(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }
}

fn resize_blocking(
    data: &[u8],
    max_width: u32,
    max_height: u32,
    quality: u8,
) -> ApplicationResult<ResizedImage> {
    let decoded = image::load_from_memory(data).map_err(|_| {
        ApplicationError::validation(
            "upload a valid image; the file is either not an image or is corrupted",
        )
    })?;

    let (width, height) = decoded.dimensions();
    let fitted = if width <= max_width && height <= max_height {
        decoded
    } else {
        decoded.resize(max_width, max_height, FilterType::Lanczos3)
    };
    let rgb = DynamicImage::ImageRgb8(fitted.to_rgb8());

    let mut buffer = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, quality))
        .map_err(|err| ApplicationError::infrastructure(format!("encode jpeg: {err}")))?;

    Ok(ResizedImage {
        data: Bytes::from(buffer),
        width: rgb.width(),
        height: rgb.height(),
        kind: ImageKind::Jpeg,
    })
}

#[async_trait]
impl ImageProcessor for ImageCrateProcessor {
    fn sniff(&self, data: &[u8]) -> Option<ImageKind> {
        match image::guess_format(data).ok()? {
            ImageFormat::Jpeg => Some(ImageKind::Jpeg),
            ImageFormat::Png => Some(ImageKind::Png),
            ImageFormat::WebP => Some(ImageKind::Webp),
            _ => None,
        }
    }

    async fn resize_to_fit(
        &self,
        data: Bytes,
        max_width: u32,
        max_height: u32,
    ) -> ApplicationResult<ResizedImage> {
        let quality = self.jpeg_quality;
        tokio::task::spawn_blocking(move || resize_blocking(&data, max_width, max_height, quality))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}
