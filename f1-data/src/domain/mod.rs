//! Domain types for Formula 1 reference data.
//!
//! These are plain value objects. They carry no knowledge of where their
//! data came from, so the remote API and the static snapshot tables produce
//! identical types.

mod driver;
mod round;
mod session;
mod team;

pub use driver::Driver;
pub use round::Round;
pub use session::Session;
pub use team::Team;
