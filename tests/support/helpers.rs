// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use catalog_core::application::{
    ports::security::TokenManager,
    services::{Adapters, ApplicationServices, Repositories},
    uploads::UploadPolicy,
};
use catalog_core::infrastructure::{
    media::{ImageCrateProcessor, LocalMediaStorage},
    security::session_store::InMemorySessionRevocationStore,
    util::DefaultSlugGenerator,
};
use catalog_core::presentation::http::{
    middleware::rate_limit::RateLimitSettings,
    routes::build_router_with_rate_limiter,
    state::{HttpState, MediaSettings},
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt as _;

pub const MEDIA_URL: &str = "/media";

/// Router wired to in-memory repositories and a temporary media directory.
/// The fields give tests direct access to what the requests changed.
pub struct TestApp {
    pub router: axum::Router,
    pub users: Arc<mocks::InMemoryUserRepo>,
    pub categories: Arc<mocks::InMemoryCategoryRepo>,
    pub category_images: Arc<mocks::InMemoryCategoryImageRepo>,
    media_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_token_manager(Arc::new(mocks::DummyTokenManager))
    }

    pub fn with_token_manager(token_manager: Arc<dyn TokenManager>) -> Self {
        let media_dir = tempfile::tempdir().expect("create media dir");
        let users = Arc::new(mocks::InMemoryUserRepo::default());
        let category_images = Arc::new(mocks::InMemoryCategoryImageRepo::default());
        let categories = Arc::new(mocks::InMemoryCategoryRepo::with_images(
            category_images.clone(),
        ));

        let repos = Repositories {
            users: users.clone(),
            category_writes: categories.clone(),
            category_reads: categories.clone(),
            category_images: category_images.clone(),
        };
        let adapters = Adapters {
            password_hasher: Arc::new(mocks::PlainPasswordHasher),
            token_manager,
            session_revocation_store: Arc::new(InMemorySessionRevocationStore::new()),
            storage: Arc::new(LocalMediaStorage::new(media_dir.path(), MEDIA_URL)),
            images: Arc::new(ImageCrateProcessor::default()),
            clock: Arc::new(mocks::SteppingClock::default()),
            slugger: Arc::new(DefaultSlugGenerator),
        };
        let policy = UploadPolicy::default();
        let services = Arc::new(ApplicationServices::new(repos, adapters, policy));

        let state = HttpState {
            services,
            media: MediaSettings {
                root: media_dir.path().to_path_buf(),
                url_prefix: MEDIA_URL.into(),
            },
            max_upload_bytes: policy.max_bytes,
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: RateLimitSettings::default(),
        };

        Self {
            router: build_router_with_rate_limiter(state, false),
            users,
            categories,
            category_images,
            media_dir,
        }
    }

    pub fn media_root(&self) -> &Path {
        self.media_dir.path()
    }

    pub fn media_path(&self, relative: &str) -> PathBuf {
        self.media_dir.path().join(relative)
    }

    /// Every stored file, relative to the media root, sorted.
    pub fn stored_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(self.media_dir.path(), self.media_dir.path(), &mut files);
        files.sort();
        files
    }

    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> axum::response::Response {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        payload: &Value,
    ) -> axum::response::Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(payload.to_string())).unwrap())
            .await
    }

    pub async fn register(
        &self,
        form: super::builders::RegistrationForm,
    ) -> axum::response::Response {
        self.send_form("POST", "/api/v1/auth/register", None, form.into_multipart())
            .await
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let resp = self
            .post_json(
                "/api/v1/auth/login",
                None,
                &serde_json::json!({ "username": username, "password": password }),
            )
            .await;
        let body = json_body(resp, StatusCode::OK).await;
        body["token"]["token"]
            .as_str()
            .expect("login returns a token")
            .to_owned()
    }

    pub async fn send_form(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        form: super::builders::MultipartBody,
    ) -> axum::response::Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, form.content_type());
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(form.finish())).unwrap())
            .await
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else if let Ok(relative) = path.strip_prefix(root) {
            out.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}

pub async fn body_bytes(resp: axum::response::Response) -> bytes::Bytes {
    body::to_bytes(resp.into_body(), 16 * 1024 * 1024)
        .await
        .expect("read body")
}

/// Assert the status and decode the JSON body.
pub async fn json_body(resp: axum::response::Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let bytes = body_bytes(resp).await;
    assert_eq!(
        status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&bytes)
    );
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// Messages reported for `field` in a 422 form error body.
pub fn field_errors(body: &Value, field: &str) -> Vec<String> {
    body["fields"][field]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
