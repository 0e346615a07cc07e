/*!
Statements, a quantified subject joined to a predicate by a copula.

Equality of statements is structural: two statements are the same fact if their terms are equal, regardless of how each was written.
The text a statement was read from is kept for display only.

A statement is well formed when:
- The subject is quantified and not negated.
- The predicate is not quantified.
- The subject and predicate name different categories.

Statements read by the [parser](crate::parse) are always well formed, and a [model](crate::model::Model) only accepts well formed statements, see [validate](Statement::validate).
*/

use std::{fmt::Display, hash::Hash};

use crate::{
    structures::term::{Quantifier, Term},
    types::err::{self},
};

#[derive(Clone, Debug)]
pub struct Statement {
    pub lhs: Term,
    pub rhs: Term,
    text: Option<String>,
}

impl Statement {
    /// A statement built from terms, without source text.
    ///
    /// No check is made on the shape of the terms, see [parse](crate::parse) for a checked constructor.
    pub fn new(lhs: Term, rhs: Term) -> Self {
        Statement {
            lhs,
            rhs,
            text: None,
        }
    }

    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.trim().to_string());
        self
    }

    /// The text the statement was read from, or the canonical form if built directly.
    pub fn text(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self.to_string(),
        }
    }

    pub fn quantifier(&self) -> Quantifier {
        self.lhs.quantifier
    }

    /// Whether `category` is either the subject or predicate of the statement.
    pub fn mentions(&self, category: &str) -> bool {
        self.lhs.category == category || self.rhs.category == category
    }

    pub fn categories(&self) -> [&str; 2] {
        [&self.lhs.category, &self.rhs.category]
    }

    /// Fails with the first way in which the statement is not well formed.
    pub fn validate(&self) -> Result<(), err::GrammarError> {
        if self.lhs.quantifier == Quantifier::None {
            return Err(err::GrammarError::UnquantifiedSubject(self.text()));
        }
        if self.rhs.quantifier != Quantifier::None {
            return Err(err::GrammarError::QuantifiedPredicate(self.text()));
        }
        if self.lhs.negated {
            return Err(err::GrammarError::NegatedSubject(self.text()));
        }
        if self.lhs.category == self.rhs.category {
            return Err(err::GrammarError::SelfReference(self.lhs.category.clone()));
        }
        Ok(())
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.lhs == other.lhs && self.rhs == other.rhs
    }
}

impl Eq for Statement {}

impl Hash for Statement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.lhs.hash(state);
        self.rhs.hash(state);
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} are {}", self.lhs, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed() {
        use err::GrammarError as GE;

        let a = || Term::quantified(Quantifier::All, "A");

        let unquantified = Statement::new(Term::bare("A"), Term::bare("B"));
        assert!(matches!(unquantified.validate(), Err(GE::UnquantifiedSubject(t)) if t == "A's are B's"));

        let quantified = Statement::new(a(), Term::quantified(Quantifier::Some, "B"));
        assert!(matches!(quantified.validate(), Err(GE::QuantifiedPredicate(_))));

        let negated = Statement::new(a().negate(), Term::bare("B"));
        assert!(matches!(negated.validate(), Err(GE::NegatedSubject(_))));

        let reflexive = Statement::new(a(), Term::bare("a's").negate());
        assert_eq!(reflexive.validate(), Err(GE::SelfReference("A".to_string())));

        assert_eq!(Statement::new(a(), Term::bare("B")).validate(), Ok(()));
    }
}
