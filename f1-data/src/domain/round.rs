//! Race round type.

use serde::Serialize;

/// One race event within a season.
///
/// `round_number` is the event's 1-based position in that season's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Round {
    pub round_number: u32,
    pub round_name: String,
}

impl Round {
    pub fn new(round_number: u32, round_name: impl Into<String>) -> Self {
        Self {
            round_number,
            round_name: round_name.into(),
        }
    }
}
