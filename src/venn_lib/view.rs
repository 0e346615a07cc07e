/*!
A snapshot of a model, for a renderer.

Regions are given by id, and statements by the text they were read from.
The snapshot is one-directional: a renderer reads a view, and nothing is returned to the model.
*/

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{model::Model, reports::Evaluation, structures::region::RegionMap};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiagramView {
    /// The categories of the diagram, in position order.
    pub categories: Vec<String>,

    /// Region id to region label.
    pub regions: BTreeMap<String, String>,

    /// Region id to the texts of the statements which exclude the region.
    pub forced_empty: BTreeMap<String, Vec<String>>,

    pub witness_groups: Vec<WitnessView>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evaluations: Vec<EvaluationView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WitnessView {
    /// Ids of the regions of the group, in region order.
    pub regions: Vec<String>,

    pub statements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EvaluationView {
    pub statement: String,
    pub verdict: String,
    pub possible: bool,
    pub certain: bool,
    pub valid: bool,
    pub reason: String,
    pub color: String,
    pub pattern: String,

    /// Ids of the regions to shade.
    pub marked: Vec<String>,
}

impl DiagramView {
    /// A view of `model`, empty of regions if constraints have not been built.
    pub fn from_model(model: &Model) -> Self {
        let Some(regions) = model.regions() else {
            return DiagramView {
                categories: model.categories().map(str::to_string).collect(),
                ..Default::default()
            };
        };

        let forced_empty = model
            .forced_empty()
            .iter()
            .map(|(region, statements)| {
                let texts = statements.iter().map(|s| s.text()).collect();
                (regions.id(*region), texts)
            })
            .collect();

        let witness_groups = model
            .witness_groups()
            .iter()
            .map(|(group, statements)| WitnessView {
                regions: group.iter().map(|region| regions.id(*region)).collect(),
                statements: statements.iter().map(|s| s.text()).collect(),
            })
            .collect();

        DiagramView {
            categories: regions.categories().to_vec(),
            regions: regions.label_map(),
            forced_empty,
            witness_groups,
            evaluations: Vec::default(),
        }
    }

    /// Adds an evaluation to the view, with marked regions named through the regions of `model`.
    pub fn push_evaluation(&mut self, model: &Model, evaluation: &Evaluation) {
        let marked = match model.regions() {
            Some(regions) => marked_ids(regions, evaluation),
            None => Vec::default(),
        };

        self.evaluations.push(EvaluationView {
            statement: evaluation.statement.text(),
            verdict: evaluation.verdict.to_string(),
            possible: evaluation.possible(),
            certain: evaluation.certain(),
            valid: evaluation.is_valid(),
            reason: evaluation.reason.clone(),
            color: evaluation.color().to_string(),
            pattern: evaluation.pattern().to_string(),
            marked,
        });
    }
}

fn marked_ids(regions: &RegionMap, evaluation: &Evaluation) -> Vec<String> {
    evaluation
        .marked
        .iter()
        .map(|region| regions.id(*region))
        .collect()
}
