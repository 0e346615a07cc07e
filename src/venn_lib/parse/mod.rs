/*!
Reading statements and premises from text.

# Grammar

Matching is case-insensitive, and category names of more than one word may be quoted.

```text
clause      := term-left copula term-right
term-left   := ("some"|"all") category
term-right  := ["not"] category
copula      := "is" | "are"
category    := token | '"' token+ '"'
```

A leading `not` is read on either side, though only the predicate may be negated.
So, `not all A's are B's` is read, and then rejected, rather than failing to read.

# Premises

A block of premises is split into lines by the [configured](crate::config::Config::separators) separators.
A line with a copula is a statement, a line without a copula declares a category, and blank lines are skipped.

```rust
# use venn_lib::parse::{parse_line, Line};
assert!(matches!(parse_line("Bears"), Ok(Some(Line::Declaration(_)))));
assert!(matches!(parse_line("All bears are mammals"), Ok(Some(Line::Statement(_)))));
assert!(matches!(parse_line("   "), Ok(None)));
```
*/

pub mod token;

use token::{tokenize, Token, ALL, NEGATION, SOME};

use crate::{
    misc::log::targets::{self},
    structures::{
        statement::Statement,
        term::{normalise_category, Quantifier, Term},
    },
    types::err::{self},
};

/// Reads a statement from a clause.
///
/// ```rust
/// # use venn_lib::parse::parse;
/// # use venn_lib::structures::term::Quantifier;
/// let statement = parse("Some A's are not B's").unwrap();
/// assert_eq!(statement.lhs.quantifier, Quantifier::Some);
/// assert_eq!(statement.lhs.category, "A");
/// assert!(statement.rhs.negated);
/// assert_eq!(statement.rhs.category, "B");
/// ```
pub fn parse(clause: &str) -> Result<Statement, err::GrammarError> {
    let tokens = tokenize(clause)?;
    if tokens.is_empty() {
        return Err(err::GrammarError::Empty);
    }

    let copula = match tokens.iter().position(Token::is_copula) {
        Some(index) => index,
        None => return Err(err::GrammarError::MissingCopula(clause.trim().to_string())),
    };

    let lhs = parse_term(&tokens[..copula], clause)?;
    let rhs = parse_term(&tokens[copula + 1..], clause)?;

    let statement = Statement::new(lhs, rhs).with_text(clause);
    statement.validate()?;
    log::trace!(target: targets::PARSER, "Read \"{}\" as {statement}", clause.trim());
    Ok(statement)
}

/// Reads one side of a clause as a term.
fn parse_term(group: &[Token], clause: &str) -> Result<Term, err::GrammarError> {
    let missing = || err::GrammarError::MissingTerm(clause.trim().to_string());

    let mut tokens = group.iter().peekable();

    let negated = match tokens.peek() {
        Some(token) if token.is_keyword(NEGATION) => {
            tokens.next();
            true
        }
        _ => false,
    };

    let quantifier = match tokens.peek() {
        Some(token) if token.is_keyword(SOME) => Quantifier::Some,
        Some(token) if token.is_keyword(ALL) => Quantifier::All,
        Some(_) => Quantifier::None,
        None => return Err(missing()),
    };
    if quantifier != Quantifier::None {
        tokens.next();
    }

    let category = tokens.next().ok_or_else(missing)?;
    if let Some(extra) = tokens.next() {
        return Err(err::GrammarError::UnexpectedToken(extra.text.clone()));
    }

    let category = category_name(category)?;
    if category.is_empty() {
        return Err(missing());
    }

    Ok(Term {
        category,
        negated,
        quantifier,
    })
}

/// The normalised category named by a token.
fn category_name(token: &Token) -> Result<String, err::GrammarError> {
    if token.is_reserved() {
        return Err(err::GrammarError::ReservedWord(token.text.clone()));
    }
    Ok(normalise_category(&token.text))
}

/// A non-blank line of premises.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// A bare category name.
    Declaration(String),

    /// A statement relating two categories.
    Statement(Statement),
}

/// Reads a line of premises, with `None` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<Line>, err::GrammarError> {
    let tokens = tokenize(line)?;

    match tokens.as_slice() {
        [] => Ok(None),

        tokens if tokens.iter().any(Token::is_copula) => Ok(Some(Line::Statement(parse(line)?))),

        [token] => {
            let category = category_name(token)?;
            match category.is_empty() {
                true => Err(err::GrammarError::Empty),
                false => {
                    log::trace!(target: targets::PARSER, "Read \"{}\" as a declaration of {category}", line.trim());
                    Ok(Some(Line::Declaration(category)))
                }
            }
        }

        _ => Err(err::GrammarError::MultiWordCategory(line.trim().to_string())),
    }
}

/// Splits a block of premises into numbered lines, counting from one.
///
/// A separator inside a quoted category name does not split the line.
pub fn split_premises<'a>(
    premises: &'a str,
    separators: &'a [char],
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let mut lines = Vec::default();
    let mut start = 0;
    let mut in_quote = false;

    for (index, character) in premises.char_indices() {
        match character {
            '"' => in_quote = !in_quote,

            c if !in_quote && separators.contains(&c) => {
                lines.push(&premises[start..index]);
                start = index + c.len_utf8();
            }

            _ => {}
        }
    }
    lines.push(&premises[start..]);

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
}
