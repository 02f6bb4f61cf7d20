// src/application/uploads.rs
use crate::application::ports::imaging::ImageProcessor;
use bytes::Bytes;
use std::fmt;

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
}

impl ImageKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    /// Check size, extension and declared content type of an image upload.
    /// Returns the kind announced by the extension; the caller still has to
    /// confirm the payload actually decodes.
    pub fn check_image(&self, file: &UploadedFile) -> Result<ImageKind, String> {
        if file.data.is_empty() {
            return Err("the submitted file is empty".into());
        }
        if file.size() > self.max_bytes {
            return Err(format!(
                "file size must not exceed {}",
                human_size(self.max_bytes)
            ));
        }
        let kind = file
            .extension()
            .as_deref()
            .and_then(ImageKind::from_extension)
            .ok_or_else(|| "allowed formats: JPG, PNG, WEBP".to_string())?;
        if let Some(declared) = file.content_type.as_deref() {
            if ImageKind::from_mime(declared).is_none() {
                return Err("invalid file type".into());
            }
        }
        Ok(kind)
    }
}

/// Policy checks followed by a look at the file signature. Returns the sniffed
/// kind, which decides the stored extension.
pub fn inspect_image(
    policy: UploadPolicy,
    processor: &dyn ImageProcessor,
    file: &UploadedFile,
) -> Result<ImageKind, String> {
    policy.check_image(file)?;
    processor.sniff(&file.data).ok_or_else(|| {
        "upload a valid image; the file is either not an image or is corrupted".to_string()
    })
}

fn human_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}
