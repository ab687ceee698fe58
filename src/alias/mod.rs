//! Alias data for SGR escape sequences.
//!
//! This module provides:
//!
//! - [`AliasTable`]: ordered alias → SGR code mapping
//! - [`SubstitutionTable`]: shorthand rewrites applied before lookup
//! - [`DEFAULT_ALIASES`] / [`DEFAULT_SUBSTITUTIONS`]: the built-in data
//!
//! Negations such as `~bold` are plain table entries. `!bold` and `^bold`
//! reach them through the substitution table.

mod defaults;
mod table;

pub use defaults::{DEFAULT_ALIASES, DEFAULT_SUBSTITUTIONS, RESET_ALIAS};
pub use table::{default_alias_table, default_substitution_table, AliasTable, SubstitutionTable};
