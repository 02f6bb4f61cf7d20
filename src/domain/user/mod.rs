// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, NewUserProfile, User};
pub use repository::UserRepository;
pub use value_objects::{
    AvatarSet, AvatarSize, Capability, Email, PasswordHash, PersonName, Role, UserId,
    UserListCursor, Username,
};
