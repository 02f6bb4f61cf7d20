// src/application/ports/imaging.rs
use crate::application::{ApplicationResult, uploads::ImageKind};
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct ResizedImage {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
    pub kind: ImageKind,
}

#[async_trait]
pub trait ImageProcessor: Send + Sync {
    /// Identify the format from the file signature.
    fn sniff(&self, data: &[u8]) -> Option<ImageKind>;

    /// Decode `data`, shrink it to fit `max_width` x `max_height` keeping the
    /// aspect ratio (never enlarging) and re-encode it.
    /// Undecodable input is reported as a validation error.
    async fn resize_to_fit(
        &self,
        data: Bytes,
        max_width: u32,
        max_height: u32,
    ) -> ApplicationResult<ResizedImage>;
}
