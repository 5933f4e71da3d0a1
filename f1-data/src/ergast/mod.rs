//! Ergast API client.
//!
//! The Ergast API serves historical Formula 1 data as JSON wrapped in an
//! `MRData` envelope. We use three endpoints:
//! - `/{year}.json` for the season calendar
//! - `/{year}/drivers.json` for the season's drivers
//! - `/{year}/constructors/{team}/drivers.json` for one team's drivers
//!
//! All failures (transport, timeout, bad status, unexpected body) surface as
//! a single `ErgastError`; callers never see partial lists.

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{ErgastClient, ErgastConfig};
pub use convert::{ConversionError, parse_drivers, parse_rounds};
pub use error::ErgastError;
pub use mock::MockErgastClient;
pub use source::ErgastSource;
pub use types::{DriverDto, DriversResponse, RaceDto, RacesResponse};

pub(crate) use convert::parse_round_number;
