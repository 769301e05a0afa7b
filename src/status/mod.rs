//! Status catalog and occupancy status derivation.

pub mod catalog;
pub mod date;
pub mod derive;

pub use catalog::{display_value, StatusCode, StatusInfo, FREE_COLOR, FREE_LABEL};
pub use date::{format_short_date, format_short_date_str, parse_date};
pub use derive::{derive_occupant_status, derive_status};
