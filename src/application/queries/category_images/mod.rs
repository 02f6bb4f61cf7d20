// src/application/queries/category_images/mod.rs
mod list;
mod service;

pub use list::ListCategoryImagesQuery;
pub use service::CategoryImageQueryService;
