// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            categories::CategoryCommandService, category_images::CategoryImageCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            imaging::ImageProcessor,
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            storage::MediaStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService, category_images::CategoryImageQueryService,
            users::UserQueryService,
        },
        uploads::UploadPolicy,
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository, services::CategorySlugService},
        category_image::CategoryImageRepository,
        user::UserRepository,
    },
};

/// Persistence adapters the services are assembled from.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub category_writes: Arc<dyn CategoryWriteRepository>,
    pub category_reads: Arc<dyn CategoryReadRepository>,
    pub category_images: Arc<dyn CategoryImageRepository>,
}

/// Security, storage and utility adapters.
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub session_revocation_store: Arc<dyn SessionRevocationStore>,
    pub storage: Arc<dyn MediaStorage>,
    pub images: Arc<dyn ImageProcessor>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub category_image_commands: Arc<CategoryImageCommandService>,
    pub category_image_queries: Arc<CategoryImageQueryService>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters, upload_policy: UploadPolicy) -> Self {
        let Adapters {
            password_hasher,
            token_manager,
            session_revocation_store,
            storage,
            images,
            clock,
            slugger,
        } = adapters;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&session_revocation_store),
            Arc::clone(&storage),
            Arc::clone(&images),
            upload_policy,
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&storage),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(CategorySlugService::new(
            Arc::clone(&repos.category_reads),
            slugger,
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.category_writes),
            Arc::clone(&repos.category_reads),
            slug_service,
            Arc::clone(&storage),
            Arc::clone(&images),
            upload_policy,
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&repos.category_reads),
            Arc::clone(&storage),
        ));

        let category_image_commands = Arc::new(CategoryImageCommandService::new(
            Arc::clone(&repos.category_images),
            Arc::clone(&repos.category_reads),
            Arc::clone(&storage),
            images,
            upload_policy,
            clock,
        ));
        let category_image_queries = Arc::new(CategoryImageQueryService::new(
            Arc::clone(&repos.category_images),
            storage,
        ));

        Self {
            user_commands,
            user_queries,
            category_commands,
            category_queries,
            category_image_commands,
            category_image_queries,
            token_manager,
            session_revocation_store,
        }
    }

    /// Verify a bearer token and reject it when its session was revoked.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        self.ensure_session_not_revoked(&user).await?;
        Ok(user)
    }

    async fn ensure_session_not_revoked(&self, user: &AuthenticatedUser) -> ApplicationResult<()> {
        if let Some(session_id) = &user.session_id {
            if self.session_revocation_store.is_revoked(session_id).await? {
                return Err(ApplicationError::unauthorized("session revoked"));
            }
        }
        Ok(())
    }
}
