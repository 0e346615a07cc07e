//! Error types used in the library.
//!
//! - Grammar errors are raised when a clause of text cannot be read as a statement.
//!   These are surfaced verbatim, and the line which raised the error is not added to a model.
//! - Arity errors are raised when a model would hold too few or too many categories to be drawn.
//! - Conflict errors are raised when the premises of a model are jointly unsatisfiable.
//! - State errors are raised when a model is used out of order, e.g. evaluated before being built.
//!
//! Each error is reached through [ErrorKind] by a `From` impl, so `?` lifts any of them out of a model operation.
//  Elsewhere in the library the module is imported as `err::{self}`, and errors are named `err::GrammarError` and so on.

use std::fmt::Display;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Arity(ArityError),
    Conflict(ConflictError),
    Grammar(GrammarError),
    State(StateError),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity(e) => write!(f, "{e}"),
            Self::Conflict(e) => write!(f, "{e}"),
            Self::Grammar(e) => write!(f, "{e}"),
            Self::State(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when a clause of text cannot be decomposed into a statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// No tokens at all, where some clause was required.
    Empty,

    /// A quoted category name was opened but never closed.
    UnterminatedQuote(String),

    /// Neither `is` nor `are` appears in the clause.
    MissingCopula(String),

    /// One side of the copula holds no category.
    MissingTerm(String),

    /// A token was found after the category of a term.
    UnexpectedToken(String),

    /// A keyword was used where a category name was expected.
    ReservedWord(String),

    /// The subject of the statement has neither `some` nor `all`.
    UnquantifiedSubject(String),

    /// The predicate of the statement was given a quantifier.
    QuantifiedPredicate(String),

    /// The subject of the statement was negated.
    NegatedSubject(String),

    /// Both terms name the same category.
    SelfReference(String),

    /// A declaration line held more than one unquoted token.
    MultiWordCategory(String),
}

impl Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Invalid expression: nothing to read"),
            Self::UnterminatedQuote(clause) => {
                write!(f, "Invalid expression \"{clause}\": unterminated quote")
            }
            Self::MissingCopula(clause) => {
                write!(f, "Invalid expression \"{clause}\": no relation found")
            }
            Self::MissingTerm(clause) => {
                write!(f, "Invalid expression \"{clause}\": missing a set name")
            }
            Self::UnexpectedToken(token) => {
                write!(f, "Invalid expression with unrecognizable token \"{token}\"")
            }
            Self::ReservedWord(token) => {
                write!(f, "Invalid expression: \"{token}\" cannot be used as a set name")
            }
            Self::UnquantifiedSubject(clause) => write!(
                f,
                "Invalid expression \"{clause}\": statements must begin with \"all\" or \"some\""
            ),
            Self::QuantifiedPredicate(clause) => write!(
                f,
                "Invalid expression \"{clause}\": \"all\" or \"some\" may only begin a statement"
            ),
            Self::NegatedSubject(clause) => write!(
                f,
                "Invalid expression \"{clause}\": only the predicate of a statement may be negated"
            ),
            Self::SelfReference(name) => {
                write!(f, "Invalid expression with identical set name \"{name}\"")
            }
            Self::MultiWordCategory(line) => write!(
                f,
                "Invalid set name \"{line}\": quote set names of more than one word"
            ),
        }
    }
}

impl From<GrammarError> for ErrorKind {
    fn from(e: GrammarError) -> Self {
        ErrorKind::Grammar(e)
    }
}

/// Errors when a model holds a number of categories which cannot be drawn.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArityError {
    /// Fewer than two categories were declared, with the count given.
    TooFew(usize),

    /// More than three categories would be declared, with the names given.
    TooMany(Vec<String>),
}

impl Display for ArityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFew(count) => write!(
                f,
                "Only two or three sets can be supported but the diagram has {count}"
            ),
            Self::TooMany(names) => write!(
                f,
                "Only two or three sets can be supported but the diagram would have {}",
                names.join(", ")
            ),
        }
    }
}

impl From<ArityError> for ErrorKind {
    fn from(e: ArityError) -> Self {
        ErrorKind::Arity(e)
    }
}

/// Premises which cannot hold together.
///
/// The regions of the witness of some particular statement are all forced empty by some collection of universal statements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConflictError {
    /// The particular statement, as written.
    pub witness: String,

    /// The universal statements, as written, which exclude every region of the witness.
    pub exclusions: Vec<String>,
}

impl Display for ConflictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conflicts between [{}] and ", self.witness)?;
        let exclusions = self
            .exclusions
            .iter()
            .map(|exclusion| format!("[{exclusion}]"))
            .collect::<Vec<_>>();
        write!(f, "{}", exclusions.join(", "))
    }
}

impl From<ConflictError> for ErrorKind {
    fn from(e: ConflictError) -> Self {
        ErrorKind::Conflict(e)
    }
}

/// Errors from use of a model out of order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// An evaluation was requested before constraints were built.
    NotBuilt,

    /// A premise was added after constraints were built.
    AlreadyBuilt,
}

impl Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotBuilt => write!(f, "The diagram must be built before evaluation"),
            Self::AlreadyBuilt => {
                write!(f, "The diagram is built, start a new diagram to add premises")
            }
        }
    }
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
