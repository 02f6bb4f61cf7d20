// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::middleware::rate_limit::RateLimitSettings;
use std::{path::PathBuf, sync::Arc};

/// Where uploaded media lives on disk and the URL prefix it is served under.
#[derive(Debug, Clone)]
pub struct MediaSettings {
    pub root: PathBuf,
    pub url_prefix: String,
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub media: MediaSettings,
    /// Largest accepted upload; request bodies may exceed it slightly to make
    /// room for the other multipart fields.
    pub max_upload_bytes: usize,
    /// CORS origins. Empty or `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitSettings,
}

/// Room left for the text fields of a multipart form next to its file.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Request body limit for a given upload limit; saturates instead of wrapping.
pub const fn request_body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES)
}

impl HttpState {
    pub const fn body_limit(&self) -> usize {
        request_body_limit(self.max_upload_bytes)
    }
}
