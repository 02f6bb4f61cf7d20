// src/domain/mod.rs
pub mod category;
pub mod category_image;
pub mod cursor;
pub mod errors;
pub mod user;
