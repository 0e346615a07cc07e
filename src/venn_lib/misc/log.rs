/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, with a target from [targets] so output may be narrowed to the relevant part of the library.

Note, no log implementation is provided.
The binary installs [log4rs](https://docs.rs/log4rs) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse) clauses.
    pub const PARSER: &str = "parser";

    /// Logs related to [regions](crate::structures::region).
    pub const REGIONS: &str = "regions";

    /// Logs related to [building constraints](crate::model::Model::build_constraints).
    pub const CONSTRAINTS: &str = "constraints";

    /// Logs related to [evaluation](crate::model::Model::evaluate).
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to reading premises into a [model](crate::model).
    pub const INGEST: &str = "ingest";
}
