// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{imaging::ImageProcessor, storage::MediaStorage, time::Clock},
        uploads::UploadPolicy,
    },
    domain::category::{
        CategoryReadRepository, CategoryWriteRepository, services::CategorySlugService,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_service: Arc<CategorySlugService>,
    pub(super) storage: Arc<dyn MediaStorage>,
    pub(super) images: Arc<dyn ImageProcessor>,
    pub(super) upload_policy: UploadPolicy,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        slug_service: Arc<CategorySlugService>,
        storage: Arc<dyn MediaStorage>,
        images: Arc<dyn ImageProcessor>,
        upload_policy: UploadPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            storage,
            images,
            upload_policy,
            clock,
        }
    }
}
