// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::{
    ports::{
        imaging::ImageProcessor,
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        storage::MediaStorage,
        time::Clock,
    },
    uploads::UploadPolicy,
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) session_revocation_store: Arc<dyn SessionRevocationStore>,
    pub(super) storage: Arc<dyn MediaStorage>,
    pub(super) images: Arc<dyn ImageProcessor>,
    pub(super) upload_policy: UploadPolicy,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_revocation_store: Arc<dyn SessionRevocationStore>,
        storage: Arc<dyn MediaStorage>,
        images: Arc<dyn ImageProcessor>,
        upload_policy: UploadPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            session_revocation_store,
            storage,
            images,
            upload_policy,
            clock,
        }
    }
}
