//! Alias resolution errors.

use thiserror::Error;

/// Error returned when a format token does not name a known alias.
///
/// `token` is the text as the caller supplied it (trimmed), `alias` is what
/// it became after shorthand substitution. The two differ when a
/// substitution such as `!` → `~` or `color` → `text` applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ANSI escape alias '{}'{}", .alias, from_suffix(.token, .alias))]
pub struct UnknownAliasError {
    pub token: String,
    pub alias: String,
}

impl UnknownAliasError {
    pub(crate) fn new(token: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            alias: alias.into(),
        }
    }
}

fn from_suffix(token: &str, alias: &str) -> String {
    if token == alias {
        String::new()
    } else {
        format!(" (from '{}')", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_alias_display() {
        let err = UnknownAliasError::new("sparkle", "sparkle");
        assert_eq!(err.to_string(), "unknown ANSI escape alias 'sparkle'");
    }

    #[test]
    fn test_unknown_alias_display_after_substitution() {
        let err = UnknownAliasError::new("color/orange", "text/orange");
        let msg = err.to_string();
        assert!(msg.contains("'text/orange'"));
        assert!(msg.contains("(from 'color/orange')"));
    }

    #[test]
    fn test_empty_token_display() {
        let err = UnknownAliasError::new("", "");
        assert_eq!(err.to_string(), "unknown ANSI escape alias ''");
    }
}
