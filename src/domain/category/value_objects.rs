use crate::domain::cursor::KeysetCursor;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_SLUG_LENGTH: usize = 120;

pub type CategoryListCursor = KeysetCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "category id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::Validation(format!(
                "name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase kebab-case identifier, unique across categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LENGTH {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LENGTH} characters"
            )));
        }
        let well_formed = !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits and single hyphens".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional free text. Blank input means "no description".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescription(String);

impl CategoryDescription {
    pub fn from_input(value: Option<String>) -> Option<Self> {
        value
            .map(|raw| raw.trim().to_owned())
            .filter(|text| !text.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_bounded() {
        assert_eq!(CategoryName::new("  Books ").unwrap().as_str(), "Books");
        assert!(CategoryName::new("   ").is_err());
        assert!(CategoryName::new("к".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(CategoryName::new("к".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn slug_must_be_kebab_case() {
        assert!(CategorySlug::new("home-garden-2").is_ok());
        for bad in ["", "Home", "-lead", "trail-", "double--dash", "space here", "ü"] {
            assert!(CategorySlug::new(bad).is_err(), "{bad:?} should be rejected");
        }
        assert!(CategorySlug::new("a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
    }

    #[test]
    fn blank_description_is_absent() {
        assert!(CategoryDescription::from_input(None).is_none());
        assert!(CategoryDescription::from_input(Some("  \n".into())).is_none());
        let description = CategoryDescription::from_input(Some(" fresh fruit ".into())).unwrap();
        assert_eq!(description.as_str(), "fresh fruit");
    }
}
