// src/application/queries/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::storage::MediaStorage, domain::category::CategoryReadRepository,
};

pub struct CategoryQueryService {
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) storage: Arc<dyn MediaStorage>,
}

impl CategoryQueryService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>, storage: Arc<dyn MediaStorage>) -> Self {
        Self { read_repo, storage }
    }
}
