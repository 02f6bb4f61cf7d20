//! Concrete page bodies returned by the list endpoints; `CursorPage<T>` itself
//! is generic and has no schema of its own.
use crate::application::dto::{CategoryDto, CategoryImageDto, CursorPage, UserDto};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryDto>,
    /// Pass back as `cursor` to fetch the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoryImageListResponse {
    pub items: Vec<CategoryImageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserListResponse {
    pub items: Vec<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

macro_rules! from_page {
    ($response:ty, $dto:ty) => {
        impl From<CursorPage<$dto>> for $response {
            fn from(page: CursorPage<$dto>) -> Self {
                Self {
                    items: page.items,
                    next_cursor: page.next_cursor,
                    has_more: page.has_more,
                }
            }
        }
    };
}

from_page!(CategoryListResponse, CategoryDto);
from_page!(CategoryImageListResponse, CategoryImageDto);
from_page!(UserListResponse, UserDto);
