/*!
Adding categories and statements to a model.

Each addition is checked before the model is touched, so a failed addition leaves the model as it was.
*/

use std::collections::BTreeSet;

use crate::{
    config::{defaults::MAX_CATEGORIES, Config},
    misc::log::targets::{self},
    model::{Model, ModelState},
    parse::{parse_line, split_premises, Line},
    structures::{statement::Statement, term::normalise_category},
    types::err::{self, ErrorKind},
};

impl Model {
    /// A model built from a block of premises, with constraints built.
    ///
    /// ```rust
    /// # use venn_lib::config::Config;
    /// # use venn_lib::model::Model;
    /// let model = Model::from_premises(Config::default(), "All A's are B's; All B's are C's").unwrap();
    /// let evaluation = model.evaluate_str("All A's are C's").unwrap();
    /// assert!(evaluation.is_valid());
    /// ```
    pub fn from_premises(config: Config, premises: &str) -> Result<Self, ErrorKind> {
        let mut model = Model::from_config(config);
        model.read_premises(premises)?;
        model.build_constraints()?;
        Ok(model)
    }

    /// Declares a category.
    ///
    /// Returns true if the category was not already declared.
    pub fn declare_category(&mut self, name: &str) -> Result<bool, ErrorKind> {
        self.accumulating()?;

        let category = normalise_category(name);
        if category.is_empty() {
            return Err(ErrorKind::from(err::GrammarError::Empty));
        }

        self.check_arity([category.as_str()])?;

        let fresh = self.categories.insert(category);
        if fresh {
            log::debug!(target: targets::INGEST, "Declared {}", name.trim());
        }
        Ok(fresh)
    }

    /// Adds a statement, and declares any category the statement mentions.
    ///
    /// Fails if the statement is not [well formed](Statement::validate).
    /// Returns true if an equal statement was not already present.
    pub fn add_statement(&mut self, statement: Statement) -> Result<bool, ErrorKind> {
        self.accumulating()?;
        statement.validate()?;
        self.check_arity(statement.categories())?;

        for category in statement.categories() {
            self.categories.insert(category.to_string());
        }

        match self.statements.contains(&statement) {
            true => Ok(false),
            false => {
                log::debug!(target: targets::INGEST, "Added {statement}");
                self.statements.push(statement);
                Ok(true)
            }
        }
    }

    /// Reads a single line of premises, see [parse_line].
    pub fn add_line(&mut self, line: &str) -> Result<(), ErrorKind> {
        match parse_line(line)? {
            None => Ok(()),
            Some(Line::Declaration(category)) => self.declare_category(&category).map(|_| ()),
            Some(Line::Statement(statement)) => self.add_statement(statement).map(|_| ()),
        }
    }

    /// Reads a block of premises, line by line.
    ///
    /// Reading stops at the first line which fails.
    /// Lines before the failing line remain part of the model, and the failing line has no effect.
    ///
    /// Returns the count of non-blank lines read.
    pub fn read_premises(&mut self, premises: &str) -> Result<usize, ErrorKind> {
        let separators = self.config.separators.clone();
        let mut count = 0;

        for (number, line) in split_premises(premises, &separators) {
            if line.trim().is_empty() {
                continue;
            }

            if let Err(e) = self.add_line(line) {
                log::warn!(target: targets::INGEST, "Line {number} \"{}\": {e}", line.trim());
                return Err(e);
            }
            count += 1;
        }

        log::info!(
            target: targets::INGEST,
            "Read {count} lines, {} categories and {} statements",
            self.categories.len(),
            self.statements.len()
        );
        Ok(count)
    }

    fn accumulating(&self) -> Result<(), ErrorKind> {
        match self.state {
            ModelState::Accumulating => Ok(()),
            ModelState::Built => Err(ErrorKind::from(err::StateError::AlreadyBuilt)),
        }
    }

    /// Fails if adding `categories` would take the model beyond the most categories a diagram may have.
    fn check_arity<'a>(
        &self,
        categories: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), err::ArityError> {
        let mut combined: BTreeSet<String> = self.categories.clone();
        combined.extend(categories.into_iter().map(str::to_string));

        match combined.len() > MAX_CATEGORIES {
            true => Err(err::ArityError::TooMany(combined.into_iter().collect())),
            false => Ok(()),
        }
    }
}
