// src/application/queries/users/mod.rs
mod list;
mod profile;
mod service;

pub use list::ListUsersQuery;
pub use service::UserQueryService;
