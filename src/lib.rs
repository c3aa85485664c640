//! Fleet-tracking reference utilities.
//!
//! Two independent components with no shared state:
//!
//! - [`logstate::LogState`] — a per-asset duty-log snapshot with a compact
//!   single-line `key=value` text encoding, as persisted in a single storage
//!   column.
//! - [`country::CountryRegistry`] — an immutable country-code table with
//!   per-country subdivision (state/province) name resolution.
//!
//! The `trackx` binary wraps both in a small inspection CLI.

pub mod cli;
pub mod config;
pub mod country;
pub mod geopoint;
pub mod logstate;

pub use country::{CountryEntry, CountryRegistry, SubdivisionResolver};
pub use geopoint::GeoPoint;
pub use logstate::{LogState, TrackedEvent};
