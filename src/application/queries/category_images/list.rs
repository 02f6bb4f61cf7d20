// src/application/queries/category_images/list.rs
use super::CategoryImageQueryService;
use crate::{
    application::{
        dto::{CategoryImageDto, CursorPage},
        error::ApplicationResult,
        queries::paging::{decode_cursor, normalize_limit, normalize_search},
    },
    domain::{category::CategoryId, category_image::CategoryImageFilter},
};

#[derive(Debug, Default)]
pub struct ListCategoryImagesQuery {
    pub category_id: Option<i64>,
    pub q: Option<String>,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl CategoryImageQueryService {
    /// Newest uploads first.
    pub async fn list_images(
        &self,
        query: ListCategoryImagesQuery,
    ) -> ApplicationResult<CursorPage<CategoryImageDto>> {
        let filter = CategoryImageFilter {
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            search: normalize_search(query.q),
        };
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self.image_repo.list_page(&filter, limit, cursor).await?;

        let items = records
            .into_iter()
            .map(|image| CategoryImageDto::from_image(image, self.storage.as_ref()))
            .collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
