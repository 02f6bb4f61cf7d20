// src/presentation/http/controllers/categories.rs
use super::default_limit;
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::CategoryDto,
    queries::categories::{GetCategoryByIdQuery, GetCategoryBySlugQuery, ListCategoriesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::CategoryListResponse;
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
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
pub struct CategoryListParams {
    /// Include inactive categories; needs `categories:view:inactive`.
    #[serde(default)]
    pub include_inactive: bool,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
    /// Case-insensitive substring of the name.
    #[serde(default)]
    pub q: Option<String>,
}

/// `multipart/form-data` body of the create and edit endpoints.
#[derive(Debug, ToSchema)]
pub struct CategoryForm {
    /// Required when creating.
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    /// Generated from the name when omitted.
    pub slug: Option<String>,
    /// JPG, PNG or WEBP cover image.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    /// Edit only: remove the current cover image.
    pub clear_image: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CategoryListParams),
    responses(
        (status = 200, description = "One page of categories, newest first.", body = CategoryListResponse),
        (status = 400, description = "Malformed cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Inactive categories requested without permission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<CategoryListParams>,
) -> HttpResult<Json<CategoryListResponse>> {
    state
        .services
        .category_queries
        .list_categories(
            actor.0.as_ref(),
            ListCategoriesQuery {
                include_inactive: params.include_inactive,
                limit: params.limit,
                cursor: params.cursor,
                q: params.q,
            },
        )
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "No visible category with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_id(actor.0.as_ref(), GetCategoryByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/by-slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "No visible category with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_slug(actor.0.as_ref(), GetCategoryBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body(content = CategoryForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing `categories:create`.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or slug already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Upload too large.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid form fields.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let mut form = MultipartForm::read(multipart).await?;
    let command = CreateCategoryCommand {
        name: form.required_text("name"),
        description: form.text("description"),
        is_active: form.flag("is_active")?,
        slug: form.text("slug"),
        image: form.file("image"),
    };

    let category = state
        .services
        .category_commands
        .create_category(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body(content = CategoryForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 403, description = "Missing `categories:update`.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or slug taken, or the category changed concurrently.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid form fields.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<CategoryDto>> {
    let mut form = MultipartForm::read(multipart).await?;
    let command = UpdateCategoryCommand {
        id,
        name: form.text("name"),
        description: form.text("description"),
        is_active: form.flag("is_active")?,
        slug: form.text("slug"),
        image: form.file("image"),
        clear_image: form.flag("clear_image")?.unwrap_or(false),
    };

    state
        .services
        .category_commands
        .update_category(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted."),
        (status = 403, description = "Missing `categories:delete`.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .category_commands
        .delete_category(&user, DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
