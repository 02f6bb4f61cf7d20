// src/application/queries/category_images/service.rs
use std::sync::Arc;

use crate::{
    application::ports::storage::MediaStorage, domain::category_image::CategoryImageRepository,
};

pub struct CategoryImageQueryService {
    pub(super) image_repo: Arc<dyn CategoryImageRepository>,
    pub(super) storage: Arc<dyn MediaStorage>,
}

impl CategoryImageQueryService {
    pub fn new(image_repo: Arc<dyn CategoryImageRepository>, storage: Arc<dyn MediaStorage>) -> Self {
        Self {
            image_repo,
            storage,
        }
    }
}
