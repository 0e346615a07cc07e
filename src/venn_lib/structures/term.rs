/*!
Terms, the two halves of a statement.

A term is a reference to a category, perhaps negated, perhaps quantified.
- The subject of a statement is always quantified (by `some` or `all`) and never negated.
- The predicate of a statement is never quantified, and is negated by a `not` before the category.

Categories are compared after [normalisation](normalise_category), so `A's`, `a`, and `"A"` all name the same category.
*/

use std::fmt::Display;

/// How a term is quantified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantifier {
    /// A bare reference to a category.
    None,

    /// At least one member of the category.
    Some,

    /// Every member of the category.
    All,
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Some => write!(f, "Some"),
            Self::All => write!(f, "All"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    pub category: String,
    pub negated: bool,
    pub quantifier: Quantifier,
}

impl Term {
    /// A bare, unnegated, reference to `category`.
    pub fn bare(category: &str) -> Self {
        Term {
            category: normalise_category(category),
            negated: false,
            quantifier: Quantifier::None,
        }
    }

    pub fn quantified(quantifier: Quantifier, category: &str) -> Self {
        Term {
            category: normalise_category(category),
            negated: false,
            quantifier,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if self.negated {
            parts.push("not".to_string());
        }
        match self.quantifier {
            Quantifier::None => {}
            q => parts.push(q.to_string()),
        }
        parts.push(display_category(&self.category));

        write!(f, "{}", parts.join(" "))
    }
}

/// The canonical form of a category name.
///
/// Surrounding quotes and a trailing possessive are removed, inner whitespace is collapsed, and the result is upper-cased.
///
/// ```rust
/// # use venn_lib::structures::term::normalise_category;
/// assert_eq!(normalise_category("a's"), "A");
/// assert_eq!(normalise_category("\"Red   apples\""), "RED APPLES");
/// ```
pub fn normalise_category(name: &str) -> String {
    let name = name.trim();
    let name = name
        .strip_prefix('"')
        .and_then(|n| n.strip_suffix('"'))
        .unwrap_or(name);
    let name = name
        .strip_suffix("'s")
        .or_else(|| name.strip_suffix("'S"))
        .or_else(|| name.strip_suffix("’s"))
        .or_else(|| name.strip_suffix("’S"))
        .unwrap_or(name);

    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// A category as written in a statement, quoted if the name holds whitespace.
pub fn display_category(category: &str) -> String {
    match category.contains(char::is_whitespace) {
        true => format!("\"{category}\""),
        false => format!("{category}'s"),
    }
}
