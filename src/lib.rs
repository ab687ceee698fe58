//! # ansi-alias
//!
//! ANSI SGR escape sequences from human-friendly style aliases.
//!
//! Instead of remembering that `ESC[34;1m` means bold blue, write
//! `"text/blue, bold"`:
//!
//! ```rust
//! use ansi_alias::ansi_esc;
//!
//! // Open-ended: everything printed afterwards is bold blue
//! let open = ansi_esc("text/blue, bold", None).unwrap();
//! assert_eq!(open, "\x1b[34;1m");
//!
//! // Wrapped: the text is followed by a reset
//! let wrapped = ansi_esc("text/red", Some("error")).unwrap();
//! assert_eq!(wrapped, "\x1b[31merror\x1b[0m");
//! ```
//!
//! ## Aliases
//!
//! Styles are plain names (`bold`, `italic`, `underline`, `blink`,
//! `negative`, `conceal`, `crossed`, `fraktur`, `frame`, `encircle`,
//! `overline`), colors are `text/<color>` and `bg/<color>`, fonts are
//! `font/0` to `font/9`. Most styles have a negation prefixed with `~`
//! (`~bold`, `~underline`).
//!
//! A few shorthands are rewritten before lookup: `!` and `^` for `~`,
//! `color` for `text`, `uline` for `underline`, `double` for `dbl`,
//! `strikethrough` for `crossed`, `pink` for `magenta`, `lightblue` for
//! `cyan` and `gothic` for `fraktur`.
//!
//! ## Errors
//!
//! A token that does not name an alias is an [`UnknownAliasError`]. Nothing
//! is emitted for it; a wrong SGR code would silently garble the terminal.
//!
//! ## Custom tables
//!
//! [`AliasResolver`] owns its tables and can be extended:
//!
//! ```rust
//! use ansi_alias::AliasResolver;
//!
//! let resolver = AliasResolver::new().alias("danger", 31);
//! assert_eq!(resolver.render("danger, bold", None).unwrap(), "\x1b[31;1m");
//! ```

pub mod alias;
mod catalog;
mod error;
mod format;
mod resolver;

pub use alias::{AliasTable, SubstitutionTable};
pub use catalog::{AliasCatalog, CatalogEntry, ALIAS_COLUMN_WIDTH, DEFAULT_SAMPLE_TEXT};
pub use error::UnknownAliasError;
pub use format::FormatSpec;
pub use resolver::{ansi_esc, AliasResolver, CSI, SGR_END};
