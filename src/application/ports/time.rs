// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for timestamps written to categories, uploads and users.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
