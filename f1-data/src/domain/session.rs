//! Race weekend session type.

use serde::Serialize;

/// One of the five fixed session kinds of a race weekend.
///
/// Sessions do not vary by season, so both fields borrow from
/// process-constant tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Session {
    /// Short code, e.g. "FP1" or "Q".
    pub abbr: &'static str,
    /// Long form, e.g. "FREE PRACTICE 1".
    pub name: &'static str,
}

impl Session {
    pub const fn new(abbr: &'static str, name: &'static str) -> Self {
        Self { abbr, name }
    }
}
