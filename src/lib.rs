//! # Parking Dash
//!
//! A terminal-based dashboard for hotel parkings: hotels, their parkings and
//! the spots of each parking, with occupancy status.
//!
//! ## Features
//!
//! - Load a JSON snapshot of hotels, parkings, spots, statuses and types
//! - Derive a guest's occupancy status from check-in/check-out dates
//! - Filter spots by parking, status, type and free text
//! - Navigate hotel → parkings → spots
//! - Guest slot board per parking
//! - Export the filtered spot list to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use parking_dash::filter::{filter_spots, SpotFilter};
//! use parking_dash::source::load_snapshot;
//!
//! let snapshot = load_snapshot("parkings.json").expect("Failed to load");
//! let filter = SpotFilter { parking_id: Some(10), ..SpotFilter::default() };
//! let spots = filter_spots(&snapshot.spots, &snapshot.parkings, &filter);
//! println!("Spots in parking 10: {}", spots.len());
//! ```

pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod resolve;
pub mod slots;
pub mod source;
pub mod stats;
pub mod status;
pub mod store;
pub mod ui;
