// src/infrastructure/media/mod.rs
pub mod image_resizer;
pub mod local_storage;

pub use image_resizer::ImageCrateProcessor;
pub use local_storage::LocalMediaStorage;
