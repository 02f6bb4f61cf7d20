pub mod categories;
pub mod category_images;
pub mod users;

mod capability;
