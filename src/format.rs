//! Format specifiers accepted by [`AliasResolver::render`](crate::AliasResolver::render).

use std::borrow::Cow;

use crate::alias::RESET_ALIAS;

/// The aliases to render, either as one delimited string or as a list.
///
/// A delimited string accepts both `,` and `;` as separators
/// (`"bold, text/blue"`). A list is taken as-is: each element is one token,
/// and delimiters inside it are not split.
///
/// Most callers never name this type; anything convertible into it can be
/// passed to `render`:
///
/// ```rust
/// use ansi_alias::ansi_esc;
///
/// let a = ansi_esc("bold,underline", None).unwrap();
/// let b = ansi_esc(["bold", "underline"], None).unwrap();
/// let c = ansi_esc(vec![String::from("bold"), String::from("underline")], None).unwrap();
/// assert_eq!(a, "\x1b[1;4m");
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec<'a> {
    /// A single string of aliases separated by `,` or `;`.
    Delimited(Cow<'a, str>),
    /// An ordered list of individual aliases.
    Tokens(Vec<Cow<'a, str>>),
}

impl<'a> FormatSpec<'a> {
    /// Splits the specifier into raw, untrimmed tokens.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            FormatSpec::Delimited(s) => s.split([',', ';']).collect(),
            FormatSpec::Tokens(tokens) => tokens.iter().map(|t| t.as_ref()).collect(),
        }
    }
}

impl Default for FormatSpec<'_> {
    fn default() -> Self {
        FormatSpec::Delimited(Cow::Borrowed(RESET_ALIAS))
    }
}

impl<'a> From<&'a str> for FormatSpec<'a> {
    fn from(s: &'a str) -> Self {
        FormatSpec::Delimited(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for FormatSpec<'a> {
    fn from(s: &'a String) -> Self {
        FormatSpec::Delimited(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for FormatSpec<'_> {
    fn from(s: String) -> Self {
        FormatSpec::Delimited(Cow::Owned(s))
    }
}

impl<'a> From<&'a [&'a str]> for FormatSpec<'a> {
    fn from(tokens: &'a [&'a str]) -> Self {
        FormatSpec::Tokens(tokens.iter().map(|t| Cow::Borrowed(*t)).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for FormatSpec<'a> {
    fn from(tokens: [&'a str; N]) -> Self {
        FormatSpec::Tokens(tokens.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<Vec<&'a str>> for FormatSpec<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        FormatSpec::Tokens(tokens.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for FormatSpec<'_> {
    fn from(tokens: Vec<String>) -> Self {
        FormatSpec::Tokens(tokens.into_iter().map(Cow::Owned).collect())
    }
}

impl<'a> From<&'a [String]> for FormatSpec<'a> {
    fn from(tokens: &'a [String]) -> Self {
        FormatSpec::Tokens(tokens.iter().map(|t| Cow::Borrowed(t.as_str())).collect())
    }
}
