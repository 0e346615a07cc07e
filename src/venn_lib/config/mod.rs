/*!
Configuration of a model.

All configuration for a model is contained within [Config], and defaults are kept in [defaults].
*/
pub mod defaults;

use std::str::FromStr;

/// The primary configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Assume every category named as the subject of a universal statement is inhabited.
    pub existential_import: bool,

    /// When to report premises which cannot hold together.
    pub conflict_check: ConflictCheck,

    /// Characters which separate premises in a block of text.
    pub separators: Vec<char>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            existential_import: EXISTENTIAL_IMPORT,
            conflict_check: CONFLICT_CHECK,
            separators: SEPARATORS.to_vec(),
        }
    }
}

/// When conflicting premises are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictCheck {
    /// Building constraints fails.
    Eager,

    /// Building constraints succeeds, each evaluation fails.
    Deferred,

    /// Conflicts are recorded but never fail.
    Off,
}

impl std::fmt::Display for ConflictCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eager => write!(f, "eager"),
            Self::Deferred => write!(f, "deferred"),
            Self::Off => write!(f, "off"),
        }
    }
}

impl FromStr for ConflictCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eager" => Ok(Self::Eager),
            "deferred" => Ok(Self::Deferred),
            "off" => Ok(Self::Off),
            _ => Err(format!("Unknown conflict check \"{s}\"")),
        }
    }
}
