//! Formula 1 season reference data.
//!
//! Answers "who drove, which rounds, which sessions" for a season. Data comes
//! from the Ergast API when it is reachable and from a static single-season
//! snapshot when it is not.

pub mod domain;
pub mod ergast;
pub mod resolver;
pub mod tables;

pub use resolver::{Resolver, ResolverConfig, ResolverError, current_year};
