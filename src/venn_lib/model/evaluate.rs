/*!
Evaluation of a statement against the constraints of a model.

# Definite areas

An area (a set of regions) is *definite* if some region of the area is certainly inhabited.
The only source of certainty is a witness: a group of regions at least one of which is inhabited.
So, an area is definite exactly when, after discarding forced empty regions from a witness, the witness is non-empty and lies inside the area.

Witnesses are taken from the witness groups of the model and, when evaluating a universal statement with [existential import](crate::config::Config::existential_import), from the circle of the subject of the statement.

# Verdicts

For a particular statement:
- If every supporting region is forced empty, the statement has no true witness.
- If the unexcluded supporting regions are definite, the statement is true.
- Otherwise, the statement may be true.

For a universal statement:
- If the unexcluded supporting regions are definite, the statement is true.
- If the unexcluded counterexample regions are definite, the statement is false.
- If some supporting region is not excluded, the statement may be true.
- Otherwise, the statement may be false.
*/

use std::collections::BTreeSet;

use crate::{
    config::ConflictCheck,
    misc::log::targets::{self},
    model::{Model, ModelState},
    parse::parse,
    reports::{Evaluation, Verdict},
    structures::{
        region::Region,
        statement::Statement,
        term::{Quantifier, Term},
    },
    types::err::{self, ErrorKind},
};

impl Model {
    /// Whether some region of `target` is certainly inhabited, given the constraints of the model and the `subject` of the statement under evaluation.
    pub fn is_definite(&self, target: &BTreeSet<Region>, subject: &Term) -> bool {
        let mut candidates: Vec<Vec<Region>> = self.witness_groups.keys().cloned().collect();

        if subject.quantifier == Quantifier::All && self.config.existential_import {
            if let Some(regions) = &self.regions {
                candidates.push(regions.circle(&subject.category));
            }
        }

        candidates.iter().any(|candidate| {
            let mut reduced = candidate
                .iter()
                .filter(|region| !self.is_forced_empty(region))
                .peekable();

            reduced.peek().is_some() && reduced.all(|region| target.contains(region))
        })
    }

    /// Evaluates a statement against the model.
    ///
    /// A statement which names a category the model does not have is given the verdict [UnknownCategory](Verdict::UnknownCategory), rather than an error.
    pub fn evaluate(&self, statement: &Statement) -> Result<Evaluation, ErrorKind> {
        if self.state != ModelState::Built {
            return Err(ErrorKind::from(err::StateError::NotBuilt));
        }

        if self.config.conflict_check == ConflictCheck::Deferred {
            if let Some(conflict) = self.conflicts.first() {
                return Err(ErrorKind::from(conflict.clone()));
            }
        }

        let unknown = statement
            .categories()
            .into_iter()
            .filter(|category| !self.categories.contains(*category))
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            log::info!(target: targets::EVALUATION, "Unknown categories in {statement}: {unknown:?}");
            let mut evaluation =
                Evaluation::new(statement.clone(), Verdict::UnknownCategory, Vec::default());
            evaluation.reason = format!("{} {}", evaluation.reason, unknown.join(", "));
            return Ok(evaluation);
        }

        let Some(classification) = self.classify(statement) else {
            return Err(ErrorKind::from(err::StateError::NotBuilt));
        };

        let valid_support = classification
            .support
            .iter()
            .filter(|region| !self.is_forced_empty(region))
            .copied()
            .collect::<BTreeSet<_>>();
        let valid_against = classification
            .against
            .iter()
            .filter(|region| !self.is_forced_empty(region))
            .copied()
            .collect::<BTreeSet<_>>();

        let verdict = match statement.quantifier() {
            Quantifier::Some => {
                if valid_support.is_empty() {
                    Verdict::NoTrueWitness
                } else if self.is_definite(&valid_support, &statement.lhs) {
                    Verdict::True
                } else {
                    Verdict::MaybeTrue
                }
            }

            Quantifier::All => {
                if self.is_definite(&valid_support, &statement.lhs) {
                    Verdict::True
                } else if self.is_definite(&valid_against, &statement.lhs) {
                    Verdict::False
                } else if !valid_support.is_empty() {
                    Verdict::MaybeTrue
                } else {
                    Verdict::MaybeFalse
                }
            }

            Quantifier::None => {
                let error = err::GrammarError::UnquantifiedSubject(statement.text());
                return Err(ErrorKind::from(error));
            }
        };

        let marked = match verdict {
            Verdict::NoTrueWitness => classification.support,
            Verdict::True | Verdict::MaybeTrue => valid_support.into_iter().collect(),
            Verdict::False | Verdict::MaybeFalse => classification.against.into_iter().collect(),
            Verdict::UnknownCategory => Vec::default(),
        };

        log::debug!(target: targets::EVALUATION, "{statement}: {verdict}");
        Ok(Evaluation::new(statement.clone(), verdict, marked))
    }

    /// Reads a statement from `conclusion` and evaluates it, see [evaluate](Model::evaluate).
    pub fn evaluate_str(&self, conclusion: &str) -> Result<Evaluation, ErrorKind> {
        let statement = parse(conclusion)?;
        self.evaluate(&statement)
    }
}
