// src/application/queries/categories/mod.rs
mod get;
mod list;
mod service;

pub use get::{GetCategoryByIdQuery, GetCategoryBySlugQuery};
pub use list::ListCategoriesQuery;
pub use service::CategoryQueryService;
