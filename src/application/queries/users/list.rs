// src/application/queries/users/list.rs
use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, CursorPage, UserDto},
    error::{ApplicationError, ApplicationResult},
    queries::paging::{decode_cursor, normalize_limit},
};

#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

impl UserQueryService {
    pub async fn list_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<CursorPage<UserDto>> {
        if !actor.has_capability("users", "read") {
            return Err(ApplicationError::forbidden("missing capability users:read"));
        }

        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (users, next_cursor) = self.user_repo.list_page(limit, cursor).await?;

        let items = users
            .into_iter()
            .map(|user| UserDto::from_user(user, self.storage.as_ref()))
            .collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
