//! Printable catalog of every alias a resolver knows.
//!
//! The catalog lists aliases alphabetically with negations placed right
//! after the alias they negate (`bold`, `~bold`, `~~bold`), and demonstrates
//! each one on a sample sentence:
//!
//! ```text
//!    Escape Alias | Demo Typeset Text
//!  ---------------|-----------------------------------
//!        bg/black | Just after exclaiming how ...
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;

use console::{measure_text_width, pad_str, Alignment};
use serde::Serialize;

use crate::error::UnknownAliasError;
use crate::resolver::{AliasResolver, CSI, SGR_END};

/// Sample sentence used when no text is given.
pub const DEFAULT_SAMPLE_TEXT: &str =
    "Just after exclaiming how delicious it looked, A.B. quickly ate his very sizable piece of cake.";

/// Width of the alias column.
pub const ALIAS_COLUMN_WIDTH: usize = 15;

const HEADER_LABEL: &str = "Escape Alias";
const HEADER_DEMO: &str = "Demo Typeset Text";

/// One alias in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub alias: String,
    pub code: u8,
}

/// A sorted, optionally deduplicated view of a resolver's aliases.
///
/// # Example
///
/// ```rust
/// use ansi_alias::{AliasCatalog, AliasResolver};
///
/// let resolver = AliasResolver::new();
/// let catalog = AliasCatalog::new(&resolver).unique(true).sample("cake");
///
/// let plain = catalog.render(false).unwrap();
/// assert!(plain.contains("           bold | cake\n"));
/// ```
#[derive(Debug, Clone)]
pub struct AliasCatalog<'r> {
    resolver: &'r AliasResolver,
    unique: bool,
    sample: String,
}

impl<'r> AliasCatalog<'r> {
    pub fn new(resolver: &'r AliasResolver) -> Self {
        Self {
            resolver,
            unique: false,
            sample: DEFAULT_SAMPLE_TEXT.to_string(),
        }
    }

    /// Keeps only the first alias, in catalog order, for each SGR code.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Sets the text each alias is demonstrated on.
    pub fn sample(mut self, text: impl Into<String>) -> Self {
        self.sample = text.into();
        self
    }

    /// Returns the entries in catalog order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let mut entries: Vec<CatalogEntry> = self
            .resolver
            .aliases()
            .iter()
            .map(|(alias, code)| CatalogEntry {
                alias: alias.to_string(),
                code,
            })
            .collect();
        entries.sort_by(|a, b| compare_aliases(&a.alias, &b.alias));

        if self.unique {
            let mut seen = HashSet::new();
            entries.retain(|entry| seen.insert(entry.code));
        }
        entries
    }

    /// Renders the header, a rule and one demo line per entry.
    ///
    /// With `colored` false the sample text is printed without escapes,
    /// for terminals or pipes that don't interpret them.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAliasError`] if the resolver cannot render its own
    /// reset alias.
    pub fn render(&self, colored: bool) -> Result<String, UnknownAliasError> {
        let mut out = String::new();
        out.push_str(&format!("{} | {}\n", right_align(HEADER_LABEL), HEADER_DEMO));
        out.push_str(&format!(
            " {}|{}\n",
            "-".repeat(ALIAS_COLUMN_WIDTH),
            "-".repeat(measure_text_width(&self.sample))
        ));

        let reset = if colored {
            self.resolver.reset()?
        } else {
            String::new()
        };

        for entry in self.entries() {
            // Built from the code directly: table aliases are not re-run
            // through the substitution table.
            let demo = if colored {
                format!("{}{}{}{}{}", CSI, entry.code, SGR_END, self.sample, reset)
            } else {
                self.sample.clone()
            };
            out.push_str(&format!("{} | {}\n", right_align(&entry.alias), demo));
        }
        Ok(out)
    }
}

fn right_align(text: &str) -> String {
    pad_str(text, ALIAS_COLUMN_WIDTH, Alignment::Right, None).into_owned()
}

fn strip_negation(alias: &str) -> (&str, usize) {
    let stripped = alias.trim_start_matches('~');
    (stripped, alias.len() - stripped.len())
}

/// Orders aliases by name ignoring case and leading `~`, negations last.
fn compare_aliases(a: &str, b: &str) -> Ordering {
    let (a_name, a_neg) = strip_negation(a);
    let (b_name, b_neg) = strip_negation(b);
    a_name
        .to_lowercase()
        .cmp(&b_name.to_lowercase())
        .then(a_neg.cmp(&b_neg))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.alias.as_str()).collect()
    }

    #[test]
    fn test_negations_follow_their_alias() {
        let resolver = AliasResolver::new();
        let entries = AliasCatalog::new(&resolver).entries();
        let names = names(&entries);

        let bold = names.iter().position(|n| *n == "bold").unwrap();
        assert_eq!(&names[bold..bold + 3], &["bold", "~bold", "~~bold"]);
    }

    #[test]
    fn test_entries_sorted_alphabetically() {
        let resolver = AliasResolver::new();
        let entries = AliasCatalog::new(&resolver).entries();
        let names = names(&entries);

        assert_eq!(names.first(), Some(&"bg/black"));
        assert_eq!(names.last(), Some(&"~underline"));
        assert_eq!(entries.len(), resolver.aliases().len());
    }

    #[test]
    fn test_sort_ignores_case() {
        let resolver = AliasResolver::empty()
            .alias("Zebra", 1)
            .alias("apple", 2)
            .alias("~Apple", 3);
        let entries = AliasCatalog::new(&resolver).entries();
        assert_eq!(names(&entries), vec!["apple", "~Apple", "Zebra"]);
    }

    #[test]
    fn test_unique_keeps_first_per_code() {
        let resolver = AliasResolver::new();
        let entries = AliasCatalog::new(&resolver).unique(true).entries();
        let names = names(&entries);

        // "blink" sorts before "blinkslow", "negative" before "~positive".
        assert!(names.contains(&"blink"));
        assert!(!names.contains(&"blinkslow"));
        assert!(names.contains(&"negative"));
        assert!(!names.contains(&"~positive"));

        let codes: HashSet<u8> = entries.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), entries.len());
    }

    #[test]
    fn test_render_plain_layout() {
        let resolver = AliasResolver::empty().alias("reset", 0).alias("bold", 1);
        let out = AliasCatalog::new(&resolver).sample("cake").render(false).unwrap();
        let expected = concat!(
            "   Escape Alias | Demo Typeset Text\n",
            " ---------------|----\n",
            "           bold | cake\n",
            "          reset | cake\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_colored_wraps_sample() {
        let resolver = AliasResolver::empty().alias("reset", 0).alias("~bold", 22);
        let out = AliasCatalog::new(&resolver).sample("cake").render(true).unwrap();
        assert!(out.contains("          ~bold | \x1b[22mcake\x1b[0m\n"));
        assert!(out.contains("          reset | \x1b[0mcake\x1b[0m\n"));
    }

    #[test]
    fn test_render_colored_skips_substitution() {
        // "doubleblink" would otherwise be rewritten to "dblblink".
        let resolver = AliasResolver::new().alias("doubleblink", 6);
        let out = AliasCatalog::new(&resolver).sample("x").render(true).unwrap();
        assert!(out.contains("    doubleblink | \x1b[6mx\x1b[0m\n"));
    }

    #[test]
    fn test_render_colored_requires_reset() {
        let resolver = AliasResolver::empty().alias("bold", 1);
        assert!(AliasCatalog::new(&resolver).render(true).is_err());
        assert!(AliasCatalog::new(&resolver).render(false).is_ok());
    }

    #[test]
    fn test_entry_serializes() {
        let entry = CatalogEntry {
            alias: "bold".into(),
            code: 1,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"alias":"bold","code":1}"#);
    }
}
