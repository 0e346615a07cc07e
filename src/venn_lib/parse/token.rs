use crate::types::err::{self};

/// A whitespace separated piece of a clause.
///
/// Quoted stretches of text are kept within a single token, so `"red apples"` is one token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token as written.
    pub text: String,

    /// Whether some part of the token was quoted.
    pub quoted: bool,
}

impl Token {
    /// Whether the token is, ignoring case, the unquoted keyword `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case(word)
    }

    pub fn is_copula(&self) -> bool {
        COPULAS.iter().any(|copula| self.is_keyword(copula))
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED.iter().any(|word| self.is_keyword(word))
    }
}

pub const COPULAS: [&str; 2] = ["is", "are"];
pub const NEGATION: &str = "not";
pub const SOME: &str = "some";
pub const ALL: &str = "all";

const RESERVED: [&str; 5] = ["is", "are", NEGATION, SOME, ALL];

/// Splits a clause into tokens.
///
/// ```rust
/// # use venn_lib::parse::token::tokenize;
/// let tokens = tokenize("All \"red apples\" are fruit").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].text, "\"red apples\"");
/// ```
pub fn tokenize(clause: &str) -> Result<Vec<Token>, err::GrammarError> {
    let mut tokens = Vec::default();
    let mut buffer = String::default();
    let mut quoted = false;
    let mut in_quote = false;

    for character in clause.chars() {
        match character {
            '"' => {
                in_quote = !in_quote;
                quoted = true;
                buffer.push(character);
            }

            c if c.is_whitespace() && !in_quote => {
                if !buffer.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut buffer),
                        quoted,
                    });
                }
                quoted = false;
            }

            c => buffer.push(c),
        }
    }

    if in_quote {
        return Err(err::GrammarError::UnterminatedQuote(clause.trim().to_string()));
    }

    if !buffer.is_empty() {
        tokens.push(Token {
            text: buffer,
            quoted,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace() {
        let tokens = tokenize("  Some   A's\tare B's ").unwrap();
        let texts = tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["Some", "A's", "are", "B's"]);
        assert!(tokens.iter().all(|t| !t.quoted));
    }

    #[test]
    fn quotes() {
        let tokens = tokenize("Some \"big dogs\" are \"is\"").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[1].quoted);
        assert!(!tokens[3].is_copula());
        assert!(tokens[2].is_copula());
    }

    #[test]
    fn unterminated() {
        assert!(matches!(
            tokenize("Some \"big dogs are cats"),
            Err(err::GrammarError::UnterminatedQuote(_))
        ));
    }
}
