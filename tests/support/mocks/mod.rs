// tests/support/mocks/mod.rs
pub mod category_repos;
pub mod security;
pub mod time;
pub mod user_repo;

pub use category_repos::{InMemoryCategoryImageRepo, InMemoryCategoryRepo, paginate};
pub use security::{
    ADMIN_TOKEN, DummyTokenManager, EXPIRED_TOKEN, MEMBER_TOKEN, PlainPasswordHasher,
};
pub use time::{SteppingClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
