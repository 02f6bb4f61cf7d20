// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use catalog_core::domain::errors::{DomainError, DomainResult};
use catalog_core::domain::user::{
    Email, NewUser, User, UserId, UserListCursor, UserRepository, Username,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Users kept in a vector, enforcing the same unique keys as the database.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    fail_next_insert: AtomicBool,
}

impl InMemoryUserRepo {
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// Make the next insert fail as if the database were unreachable.
    pub fn fail_next_insert(&self) {
        self.fail_next_insert.store(true, Ordering::SeqCst);
    }

    pub fn deactivate(&self, username: &str) {
        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut().filter(|u| u.username.as_str() == username) {
            user.is_active = false;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict(
                "a user with that username already exists".into(),
            ));
        }
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict(
                "this email address is already registered".into(),
            ));
        }
        let id = users.len() as i64 + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            avatar: new_user.avatar,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<UserListCursor>,
    ) -> DomainResult<(Vec<User>, Option<UserListCursor>)> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by_key(|u| std::cmp::Reverse((u.created_at, i64::from(u.id))));
        let items: Vec<User> = users
            .into_iter()
            .filter(|u| {
                cursor.is_none_or(|c| (u.created_at, i64::from(u.id)) < (c.created_at, c.id))
            })
            .collect();
        Ok(super::paginate(items, limit, |u| {
            UserListCursor::new(u.created_at, u.id.into())
        }))
    }
}
