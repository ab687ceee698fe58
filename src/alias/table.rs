//! Ordered alias and substitution tables.

use std::collections::HashMap;

use super::defaults::{DEFAULT_ALIASES, DEFAULT_SUBSTITUTIONS};

/// An ordered mapping from alias name to SGR parameter.
///
/// Iteration follows declaration order. Several aliases may share a code
/// (`"positive"` and `"~negative"` are both 27).
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<(String, u8)>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an alias, returning the code it replaced.
    ///
    /// An existing alias keeps its position in iteration order.
    pub fn insert(&mut self, alias: impl Into<String>, code: u8) -> Option<u8> {
        let alias = alias.into();
        match self.index.get(&alias) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, code)),
            None => {
                self.index.insert(alias.clone(), self.entries.len());
                self.entries.push((alias, code));
                None
            }
        }
    }

    /// Returns the code for an alias.
    pub fn get(&self, alias: &str) -> Option<u8> {
        self.index.get(alias).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.index.contains_key(alias)
    }

    /// Iterates `(alias, code)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.entries.iter().map(|(alias, code)| (alias.as_str(), *code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        let mut table = AliasTable::new();
        for (alias, code) in iter {
            table.insert(alias, code);
        }
        table
    }
}

/// Builds the table of built-in aliases.
pub fn default_alias_table() -> AliasTable {
    DEFAULT_ALIASES.iter().copied().collect()
}

/// An ordered list of literal shorthand replacements.
///
/// [`apply`](Self::apply) runs the entries one after another in declaration
/// order, each replacing every occurrence in the output of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<(String, String)>,
}

impl SubstitutionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a substitution, or replaces the target of an existing one in place.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let (from, to) = (from.into(), to.into());
        match self.entries.iter_mut().find(|(f, _)| *f == from) {
            Some(entry) => entry.1 = to,
            None => self.entries.push((from, to)),
        }
    }

    /// Rewrites a token into its canonical spelling.
    pub fn apply(&self, token: &str) -> String {
        let mut out = token.to_string();
        for (from, to) in &self.entries {
            // Empty patterns would match between every character.
            if !from.is_empty() && out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        out
    }

    /// Iterates `(from, to)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: Into<String>, T: Into<String>> FromIterator<(F, T)> for SubstitutionTable {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        let mut table = SubstitutionTable::new();
        for (from, to) in iter {
            table.insert(from, to);
        }
        table
    }
}

/// Builds the table of built-in shorthand substitutions.
pub fn default_substitution_table() -> SubstitutionTable {
    DEFAULT_SUBSTITUTIONS.iter().copied().collect()
}
