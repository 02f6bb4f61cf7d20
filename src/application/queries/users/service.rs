// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::application::ports::{storage::MediaStorage, time::Clock};
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) storage: Arc<dyn MediaStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            storage,
            clock,
        }
    }
}
