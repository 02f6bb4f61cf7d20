// src/infrastructure/repositories/postgres_category_image.rs
use super::{contains_pattern, map_sqlx};
use crate::domain::category::CategoryId;
use crate::domain::category_image::{
    CategoryImage, CategoryImageFilter, CategoryImageId, CategoryImageRepository,
    NewCategoryImage, OriginalFilename,
};
use crate::domain::cursor::KeysetCursor;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const IMAGE_COLUMNS: &str = "id, category_id, image, original_filename, uploaded_at";

#[derive(Clone)]
pub struct PostgresCategoryImageRepository {
    pool: PgPool,
}

impl PostgresCategoryImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryImageRow {
    id: i64,
    category_id: Option<i64>,
    image: String,
    original_filename: String,
    uploaded_at: DateTime<Utc>,
}

impl TryFrom<CategoryImageRow> for CategoryImage {
    type Error = DomainError;

    fn try_from(row: CategoryImageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryImageId::new(row.id)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            image: row.image,
            original_filename: OriginalFilename::new(row.original_filename),
            uploaded_at: row.uploaded_at,
        })
    }
}

#[async_trait]
impl CategoryImageRepository for PostgresCategoryImageRepository {
    async fn insert(&self, image: NewCategoryImage) -> DomainResult<CategoryImage> {
        let NewCategoryImage {
            category_id,
            image,
            original_filename,
            uploaded_at,
        } = image;

        let row = sqlx::query_as::<_, CategoryImageRow>(&format!(
            "INSERT INTO category_images (category_id, image, original_filename, uploaded_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(category_id.map(i64::from))
        .bind(image)
        .bind(original_filename.into_inner())
        .bind(uploaded_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        CategoryImage::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryImageId) -> DomainResult<Option<CategoryImage>> {
        let row = sqlx::query_as::<_, CategoryImageRow>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM category_images WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CategoryImage::try_from).transpose()
    }

    async fn delete(&self, id: CategoryImageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM category_images WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("image not found".into()));
        }
        Ok(())
    }

    async fn list_page(
        &self,
        filter: &CategoryImageFilter,
        limit: u32,
        cursor: Option<KeysetCursor>,
    ) -> DomainResult<(Vec<CategoryImage>, Option<KeysetCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {IMAGE_COLUMNS} FROM category_images WHERE TRUE"
        ));

        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(term) = filter.search.as_deref() {
            builder.push(" AND original_filename ILIKE ");
            builder.push_bind(contains_pattern(term));
        }

        if let Some(cursor) = cursor {
            builder.push(" AND (uploaded_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }

        builder.push(" ORDER BY uploaded_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<CategoryImageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut images = rows
            .into_iter()
            .map(CategoryImage::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if images.len() > limit as usize {
            images.pop();
            if let Some(last) = images.last() {
                next_cursor = Some(KeysetCursor::new(last.uploaded_at, last.id.into()));
            }
        }

        Ok((images, next_cursor))
    }
}
