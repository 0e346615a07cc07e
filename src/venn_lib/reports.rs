/*!
Reports from evaluating a statement against a model.

Each [Verdict] is paired with fixed [details](VerdictDetails): whether the statement could be true, whether the verdict holds of necessity, a reason, and hints for a renderer.
The pairing is a static table, see [Verdict::details].

| Verdict         | Possible | Certain | Colour | Hatch |
|-----------------|----------|---------|--------|-------|
| TRUE            | yes      | yes     | green  | `///` |
| MAYBE TRUE      | yes      | no      | green  | `..`  |
| NO TRUE WITNESS | no       | yes     | red    | `xxx` |
| FALSE           | no       | yes     | red    | `xxx` |
| MAYBE FALSE     | no       | no      | red    | `+`   |
| UNKNOWN         | no       | yes     |        |       |
*/

use std::fmt::Display;

use crate::structures::{region::Region, statement::Statement};

/// The classification of a statement against a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The statement holds in every diagram of the premises.
    True,

    /// Some region which would make the statement true is not excluded, though it may be empty.
    MaybeTrue,

    /// Every region which would make the statement true is excluded.
    NoTrueWitness,

    /// Some region which refutes the statement is inhabited.
    False,

    /// No region which would make the statement true is available, though no refutation is certain.
    MaybeFalse,

    /// The statement names a category the model does not have.
    UnknownCategory,
}

/// The fixed details of a verdict.
#[derive(Debug, PartialEq, Eq)]
pub struct VerdictDetails {
    /// Whether the statement could be true.
    pub validity: bool,

    /// Whether the verdict holds of necessity.
    pub must_hold: bool,

    pub reason: &'static str,

    /// Colour hint for shading marked regions.
    pub color: &'static str,

    /// Hatch hint for shading marked regions.
    pub pattern: &'static str,
}

const TRUE: VerdictDetails = VerdictDetails {
    validity: true,
    must_hold: true,
    reason: "This is a TRUE statement. The green shadow in the diagram shows all valid areas.",
    color: "green",
    pattern: "///",
};

const MAYBE_TRUE: VerdictDetails = VerdictDetails {
    validity: true,
    must_hold: false,
    reason: "This statement may be TRUE but not necessarily TRUE. The green shadow in the diagram shows areas which satisfy the statement, but they may be empty.",
    color: "green",
    pattern: "..",
};

const NO_TRUE_WITNESS: VerdictDetails = VerdictDetails {
    validity: false,
    must_hold: true,
    reason: "This is a FALSE statement. The red shadow in the diagram shows all areas which fit the statement, but they are all empty.",
    color: "red",
    pattern: "xxx",
};

const FALSE: VerdictDetails = VerdictDetails {
    validity: false,
    must_hold: true,
    reason: "This is a FALSE statement. The red shadow in the diagram shows all areas which refute the statement.",
    color: "red",
    pattern: "xxx",
};

const MAYBE_FALSE: VerdictDetails = VerdictDetails {
    validity: false,
    must_hold: false,
    reason: "This statement may be FALSE but not necessarily FALSE. The red shadow in the diagram shows all areas which refute the statement, but they may be empty.",
    color: "red",
    pattern: "+",
};

const UNKNOWN_CATEGORY: VerdictDetails = VerdictDetails {
    validity: false,
    must_hold: true,
    reason: "Set name(s) not found:",
    color: "",
    pattern: "",
};

impl Verdict {
    pub fn details(&self) -> &'static VerdictDetails {
        match self {
            Self::True => &TRUE,
            Self::MaybeTrue => &MAYBE_TRUE,
            Self::NoTrueWitness => &NO_TRUE_WITNESS,
            Self::False => &FALSE,
            Self::MaybeFalse => &MAYBE_FALSE,
            Self::UnknownCategory => &UNKNOWN_CATEGORY,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "TRUE"),
            Self::MaybeTrue => write!(f, "MAYBE TRUE"),
            Self::NoTrueWitness => write!(f, "NO TRUE WITNESS"),
            Self::False => write!(f, "FALSE"),
            Self::MaybeFalse => write!(f, "MAYBE FALSE"),
            Self::UnknownCategory => write!(f, "UNKNOWN"),
        }
    }
}

/// The result of evaluating a statement.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub statement: Statement,

    pub verdict: Verdict,

    /// The regions a renderer should shade, in region order.
    pub marked: Vec<Region>,

    pub reason: String,
}

impl Evaluation {
    pub(crate) fn new(statement: Statement, verdict: Verdict, marked: Vec<Region>) -> Self {
        Evaluation {
            statement,
            verdict,
            marked,
            reason: verdict.details().reason.to_string(),
        }
    }

    /// Whether the statement could be true.
    pub fn possible(&self) -> bool {
        self.verdict.details().validity
    }

    /// Whether the verdict holds of necessity.
    pub fn certain(&self) -> bool {
        self.verdict.details().must_hold
    }

    /// Whether the statement follows from the premises.
    pub fn is_valid(&self) -> bool {
        self.possible() && self.certain()
    }

    pub fn color(&self) -> &'static str {
        self.verdict.details().color
    }

    pub fn pattern(&self) -> &'static str {
        self.verdict.details().pattern
    }
}
