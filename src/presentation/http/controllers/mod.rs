pub mod auth;
pub mod categories;
pub mod category_images;

fn default_limit() -> u32 {
    20
}
