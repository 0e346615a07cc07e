/*!
Classification of regions against a statement, and the constraints derived from the statements of a model.

For a statement with subject A and predicate B, only regions inside the circle of A are considered:

| Statement            | Support    | Against    |
|----------------------|------------|------------|
| Some A's are B's     | (AB, ABC)  | {}         |
| Some A's are not B's | (A, AC)    | {}         |
| All A's are B's      | (AB, ABC)  | {A, AC}    |
| All A's are not B's  | (A, AC)    | {AB, ABC}  |

For a particular statement, one of the supporting regions must be inhabited.
For a universal statement, every region against the statement must be empty.
*/

use std::collections::BTreeSet;

use crate::{
    config::ConflictCheck,
    misc::log::targets::{self},
    model::{Model, ModelState},
    structures::{
        region::{Region, RegionMap},
        statement::Statement,
        term::Quantifier,
    },
    types::err::{self, ErrorKind},
};

/// The regions which support, and which refute, a statement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Regions which would make the statement true, in region order.
    pub support: Vec<Region>,

    /// Regions which are counterexamples to a universal statement.
    pub against: BTreeSet<Region>,
}

/// Classifies the regions of `regions` against `statement`.
///
/// Returns `None` if either category of the statement is not a category of the regions.
pub fn classify(statement: &Statement, regions: &RegionMap) -> Option<Classification> {
    let subject = regions.position(&statement.lhs.category)?;
    let predicate = regions.position(&statement.rhs.category)?;
    let negated = statement.rhs.negated;

    let mut classification = Classification::default();

    for region in regions.regions() {
        if !region.contains(subject) {
            continue;
        }
        let complies = negated ^ region.contains(predicate);

        match statement.lhs.quantifier {
            Quantifier::Some => {
                if complies {
                    classification.support.push(region);
                }
            }

            Quantifier::All => match complies {
                true => classification.support.push(region),
                false => {
                    classification.against.insert(region);
                }
            },

            Quantifier::None => {}
        }
    }

    classification.support.sort();
    Some(classification)
}

impl Model {
    /// Classifies the regions of the model against `statement`, see [classify].
    pub fn classify(&self, statement: &Statement) -> Option<Classification> {
        classify(statement, self.regions.as_ref()?)
    }

    /// Builds the regions, forced empty regions, and witness groups of the model from its categories and statements.
    ///
    /// On failure the model remains unbuilt, and further premises may be added.
    pub fn build_constraints(&mut self) -> Result<(), ErrorKind> {
        if self.state == ModelState::Built {
            return Err(ErrorKind::from(err::StateError::AlreadyBuilt));
        }

        self.forced_empty.clear();
        self.witness_groups.clear();
        self.conflicts.clear();
        self.regions = None;

        let regions = RegionMap::new(&self.categories)?;

        for statement in &self.statements {
            let Some(classification) = classify(statement, &regions) else {
                log::error!(target: targets::CONSTRAINTS, "Unclassified statement: {statement}");
                continue;
            };

            match statement.quantifier() {
                Quantifier::Some => {
                    log::trace!(target: targets::CONSTRAINTS, "Witness {:?} from {statement}", classification.support);
                    self.witness_groups
                        .entry(classification.support)
                        .or_default()
                        .push(statement.clone());
                }

                Quantifier::All => {
                    for region in classification.against {
                        log::trace!(target: targets::CONSTRAINTS, "{} forced empty by {statement}", regions.id(region));
                        self.forced_empty
                            .entry(region)
                            .or_default()
                            .push(statement.clone());
                    }
                }

                Quantifier::None => {
                    log::error!(target: targets::CONSTRAINTS, "Unquantified statement: {statement}");
                }
            }
        }

        self.conflicts = self.find_conflicts();
        self.regions = Some(regions);

        log::info!(
            target: targets::CONSTRAINTS,
            "{} forced empty regions, {} witness groups, {} conflicts",
            self.forced_empty.len(),
            self.witness_groups.len(),
            self.conflicts.len()
        );

        if self.config.conflict_check == ConflictCheck::Eager {
            if let Some(conflict) = self.conflicts.first() {
                let conflict = conflict.clone();
                self.forced_empty.clear();
                self.witness_groups.clear();
                self.regions = None;
                return Err(ErrorKind::from(conflict));
            }
        }

        self.state = ModelState::Built;
        Ok(())
    }

    /// Witness groups every region of which is forced empty.
    fn find_conflicts(&self) -> Vec<err::ConflictError> {
        let mut conflicts = Vec::default();

        for (group, witnesses) in &self.witness_groups {
            if !group.iter().all(|region| self.is_forced_empty(region)) {
                continue;
            }

            let mut exclusions: Vec<String> = Vec::default();
            for region in group {
                for statement in self.forced_empty.get(region).into_iter().flatten() {
                    let text = statement.text();
                    if !exclusions.contains(&text) {
                        exclusions.push(text);
                    }
                }
            }

            for witness in witnesses {
                let conflict = err::ConflictError {
                    witness: witness.text(),
                    exclusions: exclusions.clone(),
                };
                log::warn!(target: targets::CONSTRAINTS, "{conflict}");
                conflicts.push(conflict);
            }
        }

        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn ids(regions: &RegionMap, set: impl IntoIterator<Item = Region>) -> Vec<String> {
        set.into_iter().map(|r| regions.id(r)).collect()
    }

    #[test]
    fn classification_table() {
        let regions = RegionMap::new(["A", "B", "C"]).unwrap();

        let some = classify(&parse("Some A's are B's").unwrap(), &regions).unwrap();
        assert_eq!(ids(&regions, some.support), vec!["AB", "ABC"]);
        assert!(some.against.is_empty());

        let some_not = classify(&parse("Some A's are not B's").unwrap(), &regions).unwrap();
        assert_eq!(ids(&regions, some_not.support), vec!["A", "AC"]);
        assert!(some_not.against.is_empty());

        let all = classify(&parse("All A's are B's").unwrap(), &regions).unwrap();
        assert_eq!(ids(&regions, all.support), vec!["AB", "ABC"]);
        assert_eq!(ids(&regions, all.against), vec!["A", "AC"]);

        let all_not = classify(&parse("All A's are not B's").unwrap(), &regions).unwrap();
        assert_eq!(ids(&regions, all_not.support), vec!["A", "AC"]);
        assert_eq!(ids(&regions, all_not.against), vec!["AB", "ABC"]);
    }

    #[test]
    fn unknown_category() {
        let regions = RegionMap::new(["A", "B"]).unwrap();
        assert_eq!(classify(&parse("Some A's are Z's").unwrap(), &regions), None);
    }

    #[test]
    fn shared_witness_group() {
        let mut model = Model::default();
        assert!(model.add_statement(parse("Some A's are B's").unwrap()).is_ok());
        assert!(model.add_statement(parse("Some B's are A's").unwrap()).is_ok());
        assert!(model.build_constraints().is_ok());

        assert_eq!(model.witness_groups().len(), 1);
        let justifications = model.witness_groups().values().next().unwrap();
        assert_eq!(justifications.len(), 2);
    }

    #[test]
    fn accumulated_exclusions() {
        let mut model = Model::default();
        assert!(model.add_statement(parse("All A's are B's").unwrap()).is_ok());
        assert!(model.add_statement(parse("All A's are C's").unwrap()).is_ok());
        assert!(model.build_constraints().is_ok());

        let regions = model.regions().unwrap();
        let a_only = regions.regions()[0];
        assert_eq!(regions.id(a_only), "A");
        assert_eq!(model.forced_empty().get(&a_only).map(Vec::len), Some(2));
    }
}
