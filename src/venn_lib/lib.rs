//! A library for checking the validity of categorical syllogisms over two or three categories, using the regions of a Venn diagram as a model.
//!
//! Statements take the form "All/Some A's are (not) B's".
//! Given some premises, the library determines whether a conclusion is true, false, or possibly either, and names the regions of the diagram which make it so.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [model](crate::model::Model).
//!
//! - Text is read as [statements](crate::structures::statement) by the [parser](crate::parse).
//! - Statements accumulate in a model, together with the categories they mention.
//! - Once all premises are added, [constraints are built](crate::model::Model::build_constraints): the [regions](crate::structures::region) of the diagram, the regions forced empty by universal statements, and the groups of regions witnessed by particular statements.
//! - A built model is [evaluated](crate::model::Model::evaluate) against conclusions, each resulting in a [verdict](crate::reports::Verdict).
//!
//! For drawing, a [view](crate::view::DiagramView) of a model may be taken.
//!
//! # Examples
//!
//! + A valid syllogism (Barbara).
//!
//! ```rust
//! # use venn_lib::config::Config;
//! # use venn_lib::model::Model;
//! # use venn_lib::reports::Verdict;
//! let mut model = Model::from_config(Config::default());
//! assert!(model.read_premises("All A's are B's\nAll B's are C's").is_ok());
//! assert!(model.build_constraints().is_ok());
//!
//! let evaluation = model.evaluate_str("All A's are C's").unwrap();
//! assert_eq!(evaluation.verdict, Verdict::True);
//! ```
//!
//! + An invalid syllogism, where the conclusion may hold but need not.
//!
//! ```rust
//! # use venn_lib::config::Config;
//! # use venn_lib::model::Model;
//! # use venn_lib::reports::Verdict;
//! let model = Model::from_premises(Config::default(), "Some A's are B's; Some B's are C's").unwrap();
//!
//! let evaluation = model.evaluate_str("Some A's are C's").unwrap();
//! assert_eq!(evaluation.verdict, Verdict::MaybeTrue);
//! assert!(evaluation.possible() && !evaluation.certain());
//! ```
//!
//! # Existential import
//!
//! Following classical syllogistic logic, when evaluating a universal statement the subject of the statement is assumed to be inhabited.
//! So, given "All A's are not B's", the conclusion "All A's are B's" is false rather than vacuously true.
//! This may be [configured](crate::config::Config::existential_import).
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log], and no log implementation is provided by the library.

pub mod config;
pub mod model;
pub mod parse;
pub mod reports;
pub mod structures;
pub mod types;
pub mod view;

pub mod misc;
