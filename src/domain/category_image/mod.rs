pub mod entity;
pub mod repository;

pub use entity::{CategoryImage, CategoryImageId, NewCategoryImage, OriginalFilename};
pub use repository::{CategoryImageFilter, CategoryImageRepository};
