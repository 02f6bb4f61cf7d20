// src/application/commands/category_images/mod.rs
mod delete;
mod service;
mod upload;

pub use delete::DeleteCategoryImageCommand;
pub use service::CategoryImageCommandService;
pub use upload::UploadCategoryImageCommand;
