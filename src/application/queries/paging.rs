// src/application/queries/paging.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{cursor::KeysetCursor, errors::DomainError},
};

pub(super) const DEFAULT_LIMIT: u32 = 20;
pub(super) const MAX_LIMIT: u32 = 100;

pub(super) fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

pub(super) fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<KeysetCursor>> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(value) => match KeysetCursor::decode(value) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
            Err(other) => Err(ApplicationError::from(other)),
        },
        None => Ok(None),
    }
}

/// Blank search terms mean "no filter".
pub(super) fn normalize_search(q: Option<String>) -> Option<String> {
    q.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(normalize_limit(0), DEFAULT_LIMIT);
        assert_eq!(normalize_limit(5), 5);
        assert_eq!(normalize_limit(1_000), MAX_LIMIT);
    }

    #[test]
    fn bad_cursor_is_a_validation_error() {
        assert!(matches!(
            decode_cursor(Some("not-a-cursor")),
            Err(ApplicationError::Validation(_))
        ));
        assert!(decode_cursor(Some("  ")).unwrap().is_none());
    }

    #[test]
    fn blank_search_is_dropped() {
        assert_eq!(normalize_search(Some("  ".into())), None);
        assert_eq!(normalize_search(Some(" tea ".into())).as_deref(), Some("tea"));
    }
}
