//! Session table.

use crate::domain::Session;

/// The five sessions of a race weekend, in weekend order.
pub const SESSIONS: [Session; 5] = [
    Session::new("FP1", "FREE PRACTICE 1"),
    Session::new("FP2", "FREE PRACTICE 2"),
    Session::new("FP3", "FREE PRACTICE 3"),
    Session::new("Q", "QUALIFYING"),
    Session::new("R", "RACE"),
];

/// Short code for a session name, ignoring case.
pub fn session_abbr(name: &str) -> Option<&'static str> {
    let name = name.trim().to_uppercase();
    SESSIONS
        .iter()
        .find(|session| session.name == name)
        .map(|session| session.abbr)
}
