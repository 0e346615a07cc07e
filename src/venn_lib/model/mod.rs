/*!
The model of a collection of premises.

A model is built in two phases:
- First, categories and statements accumulate, either [programatically](Model::add_statement) or by [reading premises](Model::read_premises).
- Second, [constraints are built](Model::build_constraints), once, from the final collection of categories and statements.

After constraints are built the model may be [evaluated](Model::evaluate) against any number of statements, but no further premises may be added.
For a new collection of premises a new model is made.

# Constraints

Two structures are derived from the statements of a model:
- The *forced empty* regions, each with the universal statements which exclude the region.
- The *witness groups*, each a collection of regions at least one of which is inhabited, with the particular statements which assert this.

For example, with categories A, B, and C:

| Statement        | Witness group | Forced empty |
|------------------|---------------|--------------|
| Some A's are B's | (AB, ABC)     |              |
| Some A's are not B's | (A, AC)   |              |
| All A's are B's  |               | A, AC        |
| All A's are not B's |            | AB, ABC      |

Both structures are recomputed in full whenever constraints are built.
*/

mod builder;
mod constraints;
mod evaluate;

pub use constraints::{classify, Classification};

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use crate::{
    config::Config,
    structures::{
        region::{Region, RegionMap},
        statement::Statement,
        term::normalise_category,
    },
    types::err::{self},
};

/// The phase of a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelState {
    /// Premises may be added, evaluation is not possible.
    Accumulating,

    /// Constraints are built, premises may not be added.
    Built,
}

pub struct Model {
    config: Config,

    /// Every category of the model.
    categories: BTreeSet<String>,

    /// Every distinct statement of the model, in order of addition.
    statements: Vec<Statement>,

    regions: Option<RegionMap>,

    /// Regions excluded by some universal statement, with each excluding statement.
    forced_empty: BTreeMap<Region, Vec<Statement>>,

    /// Groups of regions at least one of which is inhabited, with each asserting statement.
    witness_groups: BTreeMap<Vec<Region>, Vec<Statement>>,

    conflicts: Vec<err::ConflictError>,

    state: ModelState,
}

impl Default for Model {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Model {
    pub fn from_config(config: Config) -> Self {
        Model {
            config,
            categories: BTreeSet::default(),
            statements: Vec::default(),
            regions: None,
            forced_empty: BTreeMap::default(),
            witness_groups: BTreeMap::default(),
            conflicts: Vec::default(),
            state: ModelState::Accumulating,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    /// The categories of the model, sorted by name.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The regions of the model, present once constraints are built.
    pub fn regions(&self) -> Option<&RegionMap> {
        self.regions.as_ref()
    }

    pub fn forced_empty(&self) -> &BTreeMap<Region, Vec<Statement>> {
        &self.forced_empty
    }

    pub fn witness_groups(&self) -> &BTreeMap<Vec<Region>, Vec<Statement>> {
        &self.witness_groups
    }

    /// Conflicts found when constraints were last built.
    pub fn conflicts(&self) -> &[err::ConflictError] {
        &self.conflicts
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains(&normalise_category(name))
    }

    pub fn contains_statement(&self, statement: &Statement) -> bool {
        self.statements.contains(statement)
    }

    /// Whether the model has neither categories nor statements.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.statements.is_empty()
    }

    pub fn is_forced_empty(&self, region: &Region) -> bool {
        self.forced_empty.contains_key(region)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for category in &self.categories {
            let mentions = self
                .statements
                .iter()
                .filter(|statement| statement.mentions(category))
                .map(|statement| format!("<{statement}>"))
                .collect::<Vec<_>>();
            writeln!(f, "{category} {{{}}}", mentions.join(", "))?;
        }
        Ok(())
    }
}
