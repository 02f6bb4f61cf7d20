use crate::domain::category::CategoryId;
use crate::domain::category_image::entity::{CategoryImage, CategoryImageId, NewCategoryImage};
use crate::domain::cursor::KeysetCursor;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct CategoryImageFilter {
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring of the original file name.
    pub search: Option<String>,
}

#[async_trait]
pub trait CategoryImageRepository: Send + Sync {
    async fn insert(&self, image: NewCategoryImage) -> DomainResult<CategoryImage>;
    async fn find_by_id(&self, id: CategoryImageId) -> DomainResult<Option<CategoryImage>>;
    async fn delete(&self, id: CategoryImageId) -> DomainResult<()>;
    /// Newest upload first.
    async fn list_page(
        &self,
        filter: &CategoryImageFilter,
        limit: u32,
        cursor: Option<KeysetCursor>,
    ) -> DomainResult<(Vec<CategoryImage>, Option<KeysetCursor>)>;
}
