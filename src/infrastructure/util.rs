// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

/// Transliterating slugifier backed by the `slug` crate.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
