// src/application/ports/mod.rs
pub mod imaging;
pub mod security;
pub mod session_revocation;
pub mod storage;
pub mod time;
pub mod util;
