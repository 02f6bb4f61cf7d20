// src/application/commands/category_images/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{imaging::ImageProcessor, storage::MediaStorage, time::Clock},
        uploads::UploadPolicy,
    },
    domain::{category::CategoryReadRepository, category_image::CategoryImageRepository},
};

/// Images embedded in category descriptions.
pub struct CategoryImageCommandService {
    pub(super) image_repo: Arc<dyn CategoryImageRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) storage: Arc<dyn MediaStorage>,
    pub(super) images: Arc<dyn ImageProcessor>,
    pub(super) upload_policy: UploadPolicy,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryImageCommandService {
    pub fn new(
        image_repo: Arc<dyn CategoryImageRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        storage: Arc<dyn MediaStorage>,
        images: Arc<dyn ImageProcessor>,
        upload_policy: UploadPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            image_repo,
            category_repo,
            storage,
            images,
            upload_policy,
            clock,
        }
    }
}
