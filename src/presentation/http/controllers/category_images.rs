// src/presentation/http/controllers/category_images.rs
use super::default_limit;
use crate::application::{
    commands::category_images::{DeleteCategoryImageCommand, UploadCategoryImageCommand},
    dto::CategoryImageDto,
    queries::category_images::ListCategoryImagesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::CategoryImageListResponse;
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::multipart::MultipartForm;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CategoryImageListParams {
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Case-insensitive substring of the original file name.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// `multipart/form-data` body of the upload endpoint.
#[derive(Debug, ToSchema)]
pub struct CategoryImageForm {
    pub category_id: Option<i64>,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/v1/category-images",
    request_body(content = CategoryImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored.", body = CategoryImageDto),
        (status = 403, description = "Missing `categories:update`.", body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Upload too large.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid image or category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Category images"
)]
pub async fn upload_category_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<CategoryImageDto>)> {
    let mut form = MultipartForm::read(multipart).await?;
    let command = UploadCategoryImageCommand {
        category_id: form.id("category_id", "select an existing category")?,
        image: form.file("image"),
    };

    let image = state
        .services
        .category_image_commands
        .upload_image(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(image)))
}

#[utoipa::path(
    get,
    path = "/api/v1/category-images",
    params(CategoryImageListParams),
    responses(
        (status = 200, description = "One page of uploads, newest first.", body = CategoryImageListResponse),
        (status = 400, description = "Malformed cursor or category id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Category images"
)]
pub async fn list_category_images(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CategoryImageListParams>,
) -> HttpResult<Json<CategoryImageListResponse>> {
    state
        .services
        .category_image_queries
        .list_images(ListCategoryImagesQuery {
            category_id: params.category_id,
            q: params.q,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/category-images/{id}",
    params(("id" = i64, Path, description = "Image id")),
    responses(
        (status = 200, description = "Image deleted."),
        (status = 403, description = "Missing `categories:delete`.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown image.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Category images"
)]
pub async fn delete_category_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .category_image_commands
        .delete_image(&user, DeleteCategoryImageCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
