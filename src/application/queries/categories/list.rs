// src/application/queries/categories/list.rs
use super::CategoryQueryService;
use crate::application::{
    dto::{AuthenticatedUser, CategoryDto, CursorPage},
    error::{ApplicationError, ApplicationResult},
    queries::paging::{decode_cursor, normalize_limit, normalize_search},
};

#[derive(Debug, Default)]
pub struct ListCategoriesQuery {
    pub include_inactive: bool,
    pub limit: u32,
    pub cursor: Option<String>,
    pub q: Option<String>,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<CursorPage<CategoryDto>> {
        if query.include_inactive {
            let actor = actor.ok_or_else(|| {
                ApplicationError::forbidden("authentication required to list inactive categories")
            })?;
            if !actor.has_capability("categories", "view:inactive") {
                return Err(ApplicationError::forbidden(
                    "missing capability categories:view:inactive",
                ));
            }
        }

        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;
        let search = normalize_search(query.q);

        let (records, next_cursor) = self
            .read_repo
            .list_page(query.include_inactive, limit, cursor, search.as_deref())
            .await?;

        let items = records
            .into_iter()
            .map(|category| CategoryDto::from_category(category, self.storage.as_ref()))
            .collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
