// tests/support/mocks/category_repos.rs
use async_trait::async_trait;
use catalog_core::domain::category::{
    Category, CategoryId, CategoryListCursor, CategoryName, CategoryReadRepository,
    CategorySlug, CategoryUpdate, CategoryWriteRepository, NewCategory,
};
use catalog_core::domain::category_image::{
    CategoryImage, CategoryImageFilter, CategoryImageId, CategoryImageRepository,
    NewCategoryImage,
};
use catalog_core::domain::cursor::KeysetCursor;
use catalog_core::domain::errors::{DomainError, DomainResult};
use std::cmp::Reverse;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

/// Keep `limit` items and derive the cursor from the last one when more follow.
pub fn paginate<T>(
    mut items: Vec<T>,
    limit: u32,
    cursor_of: impl Fn(&T) -> KeysetCursor,
) -> (Vec<T>, Option<KeysetCursor>) {
    let limit = limit as usize;
    let has_more = items.len() > limit;
    items.truncate(limit);
    let next = if has_more {
        items.last().map(cursor_of)
    } else {
        None
    };
    (items, next)
}

/// Categories for both the read and the write side, with unique name and
/// slug plus the `updated_at` guard of the SQL implementation.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepo {
    rows: Mutex<Vec<Category>>,
    next_id: Mutex<i64>,
    images: Option<Arc<InMemoryCategoryImageRepo>>,
    fail_next_insert: AtomicBool,
    fail_next_delete: AtomicBool,
    race_next_update: AtomicBool,
}

impl InMemoryCategoryRepo {
    /// Deleting a category clears the link of its description images.
    pub fn with_images(images: Arc<InMemoryCategoryImageRepo>) -> Self {
        Self {
            images: Some(images),
            ..Self::default()
        }
    }

    pub fn all(&self) -> Vec<Category> {
        self.rows.lock().unwrap().clone()
    }

    /// Make the next insert fail as if the database were unreachable.
    pub fn fail_next_insert(&self) {
        self.fail_next_insert.store(true, Ordering::SeqCst);
    }

    pub fn fail_next_delete(&self) {
        self.fail_next_delete.store(true, Ordering::SeqCst);
    }

    /// Let another writer commit between the next update's read and write.
    pub fn race_next_update(&self) {
        self.race_next_update.store(true, Ordering::SeqCst);
    }

    fn ensure_unique(
        rows: &[Category],
        name: &CategoryName,
        slug: &CategorySlug,
        except: Option<CategoryId>,
    ) -> DomainResult<()> {
        let others = rows.iter().filter(|c| Some(c.id) != except);
        for other in others {
            if &other.name == name {
                return Err(DomainError::Conflict(format!(
                    "category '{name}' already exists"
                )));
            }
            if &other.slug == slug {
                return Err(DomainError::Conflict(format!(
                    "slug '{slug}' is already in use"
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        Self::ensure_unique(&rows, &category.name, &category.slug, None)?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = Category {
            id: CategoryId::new(*next_id)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            is_active: category.is_active,
            image: category.image,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        let index = rows
            .iter()
            .position(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if self.race_next_update.swap(false, Ordering::SeqCst) {
            rows[index].updated_at += chrono::Duration::seconds(30);
        }
        if rows[index].updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "category was modified concurrently, please retry".into(),
            ));
        }

        let mut next = rows[index].clone();
        if let Some(name) = update.name {
            next.name = name;
        }
        if let Some(slug) = update.slug {
            next.slug = slug;
        }
        if let Some(description) = update.description {
            next.description = description;
        }
        if let Some(is_active) = update.is_active {
            next.is_active = is_active;
        }
        if let Some(image) = update.image {
            next.image = image;
        }
        next.updated_at = update.updated_at;

        Self::ensure_unique(&rows, &next.name, &next.slug, Some(next.id))?;
        rows[index] = next.clone();
        Ok(next)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        if self.fail_next_delete.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        if let Some(images) = &self.images {
            images.detach_category(id);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepo {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| &c.name == name).cloned())
    }

    async fn list_page(
        &self,
        include_inactive: bool,
        limit: u32,
        cursor: Option<CategoryListCursor>,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Category>, Option<CategoryListCursor>)> {
        let needle = search.map(str::to_lowercase);
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|c| Reverse((c.created_at, i64::from(c.id))));
        let items: Vec<Category> = rows
            .into_iter()
            .filter(|c| include_inactive || c.is_active)
            .filter(|c| {
                needle
                    .as_deref()
                    .is_none_or(|n| c.name.as_str().to_lowercase().contains(n))
            })
            .filter(|c| {
                cursor.is_none_or(|k| (c.created_at, i64::from(c.id)) < (k.created_at, k.id))
            })
            .collect();
        Ok(paginate(items, limit, |c| {
            KeysetCursor::new(c.created_at, c.id.into())
        }))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCategoryImageRepo {
    rows: Mutex<Vec<CategoryImage>>,
    next_id: Mutex<i64>,
}

impl InMemoryCategoryImageRepo {
    pub fn all(&self) -> Vec<CategoryImage> {
        self.rows.lock().unwrap().clone()
    }

    /// `ON DELETE SET NULL` of the `category_id` foreign key.
    fn detach_category(&self, category_id: CategoryId) {
        let mut rows = self.rows.lock().unwrap();
        for row in rows.iter_mut().filter(|i| i.category_id == Some(category_id)) {
            row.category_id = None;
        }
    }
}

#[async_trait]
impl CategoryImageRepository for InMemoryCategoryImageRepo {
    async fn insert(&self, image: NewCategoryImage) -> DomainResult<CategoryImage> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = CategoryImage {
            id: CategoryImageId::new(*next_id)?,
            category_id: image.category_id,
            image: image.image,
            original_filename: image.original_filename,
            uploaded_at: image.uploaded_at,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CategoryImageId) -> DomainResult<Option<CategoryImage>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|i| i.id == id).cloned())
    }

    async fn delete(&self, id: CategoryImageId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.id != id);
        if rows.len() == before {
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
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|i| Reverse((i.uploaded_at, i64::from(i.id))));
        let items: Vec<CategoryImage> = rows
            .into_iter()
            .filter(|i| filter.category_id.is_none_or(|id| i.category_id == Some(id)))
            .filter(|i| {
                needle.as_deref().is_none_or(|n| {
                    i.original_filename.as_str().to_lowercase().contains(n)
                })
            })
            .filter(|i| {
                cursor.is_none_or(|k| (i.uploaded_at, i64::from(i.id)) < (k.created_at, k.id))
            })
            .collect();
        Ok(paginate(items, limit, |i| {
            KeysetCursor::new(i.uploaded_at, i.id.into())
        }))
    }
}
