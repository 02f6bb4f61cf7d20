// src/infrastructure/security/mod.rs
pub mod claims;
pub mod password;
pub mod session_store;
pub mod token;
