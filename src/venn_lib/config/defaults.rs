use crate::config::{self};

pub const EXISTENTIAL_IMPORT: bool = true;
pub const CONFLICT_CHECK: config::ConflictCheck = config::ConflictCheck::Eager;
pub const SEPARATORS: &[char] = &['\n', ';'];

/// Most categories a diagram may be drawn with.
pub const MAX_CATEGORIES: usize = 3;

/// Fewest categories a diagram may be drawn with.
pub const MIN_CATEGORIES: usize = 2;
