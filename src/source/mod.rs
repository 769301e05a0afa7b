//! Data access for the dashboard.
//!
//! A source hands out complete collections; there is no paging and no
//! partial result.

pub mod json;

pub use crate::error::LoadError;
pub use json::{load_snapshot, JsonSnapshot};

use crate::model::{Hotel, Parking, Snapshot, Spot, StatusRef, TypeRef};

pub trait DataSource {
    fn list_hotels(&self) -> Result<Vec<Hotel>, LoadError>;
    fn list_parkings(&self) -> Result<Vec<Parking>, LoadError>;
    fn list_spots(&self) -> Result<Vec<Spot>, LoadError>;
    fn list_statuses(&self) -> Result<Vec<StatusRef>, LoadError>;
    fn list_types(&self) -> Result<Vec<TypeRef>, LoadError>;

    /// Fetches every collection. Fails as a whole if any list fails.
    fn snapshot(&self) -> Result<Snapshot, LoadError> {
        Ok(Snapshot {
            hotels: self.list_hotels()?,
            parkings: self.list_parkings()?,
            spots: self.list_spots()?,
            statuses: self.list_statuses()?,
            types: self.list_types()?,
            ..Snapshot::default()
        })
    }
}
