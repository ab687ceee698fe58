//! Alias resolution and escape sequence rendering.

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::alias::{
    default_alias_table, default_substitution_table, AliasTable, SubstitutionTable,
};
use crate::error::UnknownAliasError;
use crate::format::FormatSpec;

/// Control Sequence Introducer: ESC followed by `[`.
pub const CSI: &str = "\x1b[";

/// Terminates an SGR sequence.
pub const SGR_END: char = 'm';

static GLOBAL_RESOLVER: Lazy<AliasResolver> = Lazy::new(AliasResolver::new);

/// Turns style aliases into ANSI SGR escape sequences.
///
/// A resolver owns an [`AliasTable`] and a [`SubstitutionTable`]. Each token
/// of a format is trimmed, rewritten by the substitution table, then looked
/// up in the alias table. The resulting codes are joined with `;` into a
/// single `ESC[...m` sequence.
///
/// # Example
///
/// ```rust
/// use ansi_alias::AliasResolver;
///
/// let resolver = AliasResolver::new();
///
/// // Open-ended: the caller resets later
/// assert_eq!(resolver.render("bold, text/blue", None).unwrap(), "\x1b[1;34m");
///
/// // Wrapped: a reset follows the text
/// assert_eq!(
///     resolver.render("text/red", Some("hi")).unwrap(),
///     "\x1b[31mhi\x1b[0m"
/// );
/// ```
///
/// The tables can be extended when building a resolver:
///
/// ```rust
/// use ansi_alias::AliasResolver;
///
/// let resolver = AliasResolver::new()
///     .alias("warning", 33)
///     .substitution("caution", "warning");
///
/// assert_eq!(resolver.render("caution", None).unwrap(), "\x1b[33m");
/// ```
#[derive(Debug, Clone)]
pub struct AliasResolver {
    aliases: AliasTable,
    substitutions: SubstitutionTable,
}

impl AliasResolver {
    /// Creates a resolver with the built-in aliases and substitutions.
    pub fn new() -> Self {
        Self::from_tables(default_alias_table(), default_substitution_table())
    }

    /// Creates a resolver with no aliases and no substitutions.
    pub fn empty() -> Self {
        Self::from_tables(AliasTable::new(), SubstitutionTable::new())
    }

    pub fn from_tables(aliases: AliasTable, substitutions: SubstitutionTable) -> Self {
        Self {
            aliases,
            substitutions,
        }
    }

    /// Returns the shared resolver built from the built-in tables.
    pub fn global() -> &'static AliasResolver {
        &GLOBAL_RESOLVER
    }

    /// Adds or overrides an alias, returning the resolver for chaining.
    pub fn alias(mut self, name: impl Into<String>, code: u8) -> Self {
        self.aliases.insert(name, code);
        self
    }

    /// Adds or overrides a substitution, returning the resolver for chaining.
    ///
    /// New substitutions run after the existing ones.
    pub fn substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitutions.insert(from, to);
        self
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn substitutions(&self) -> &SubstitutionTable {
        &self.substitutions
    }

    /// Resolves a single token to its SGR code.
    ///
    /// The token is trimmed and rewritten by the substitution table first.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAliasError`] if the rewritten token is not an alias.
    pub fn resolve(&self, token: &str) -> Result<u8, UnknownAliasError> {
        let token = token.trim();
        let alias = self.substitutions.apply(token);
        match self.aliases.get(&alias) {
            Some(code) => {
                trace!(token, alias = %alias, code, "resolved escape alias");
                Ok(code)
            }
            None => {
                debug!(token, alias = %alias, "unknown escape alias");
                Err(UnknownAliasError::new(token, alias))
            }
        }
    }

    /// Renders a format as an SGR escape sequence.
    ///
    /// With `wrap_around` set to non-empty text, the result is the sequence,
    /// the text, then the reset sequence (the default format rendered by this
    /// same resolver). Otherwise the sequence is returned open-ended.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAliasError`] for the first token that does not
    /// resolve. Empty tokens, such as the one after a trailing comma, never
    /// resolve, and an empty token list is treated as a single empty token.
    pub fn render<'a>(
        &self,
        format: impl Into<FormatSpec<'a>>,
        wrap_around: Option<&str>,
    ) -> Result<String, UnknownAliasError> {
        let format = format.into();
        let tokens = format.tokens();
        if tokens.is_empty() {
            debug!("empty escape format");
            return Err(UnknownAliasError::new("", ""));
        }
        let codes = tokens
            .into_iter()
            .map(|token| self.resolve(token).map(|code| code.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = String::with_capacity(CSI.len() + codes.len() * 3 + 1);
        out.push_str(CSI);
        out.push_str(&codes.join(";"));
        out.push(SGR_END);

        if let Some(text) = wrap_around.filter(|text| !text.is_empty()) {
            out.push_str(text);
            out.push_str(&self.reset()?);
        }
        Ok(out)
    }

    /// Renders the default format (`"reset"`) with no wrap text.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAliasError`] if this resolver has no `reset` alias.
    pub fn reset(&self) -> Result<String, UnknownAliasError> {
        self.render(FormatSpec::default(), None)
    }
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a format with the shared built-in resolver.
///
/// Same contract as [`AliasResolver::render`]. Pass
/// [`FormatSpec::default()`] for the `"reset"` default.
///
/// # Example
///
/// ```rust
/// use ansi_alias::{ansi_esc, FormatSpec};
///
/// assert_eq!(ansi_esc("!bold", None).unwrap(), "\x1b[22m");
/// assert_eq!(ansi_esc(FormatSpec::default(), None).unwrap(), "\x1b[0m");
/// ```
///
/// # Errors
///
/// Returns [`UnknownAliasError`] if any token is not a known alias.
pub fn ansi_esc<'a>(
    format: impl Into<FormatSpec<'a>>,
    wrap_around: Option<&str>,
) -> Result<String, UnknownAliasError> {
    AliasResolver::global().render(format, wrap_around)
}
