// src/application/ports/util.rs

/// Turns free text into a URL-safe, lowercase, hyphen separated string.
/// May return an empty string when nothing usable remains.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
