pub mod hotel;
pub mod occupant;
pub mod parking;
pub mod snapshot;
pub mod spot;

pub use hotel::{Hotel, HotelStats};
pub use occupant::{Guest, Occupant, SlotPlace};
pub use parking::Parking;
pub use snapshot::Snapshot;
pub use spot::{Dimensions, Equipment, Pricing, Spot, StatusRef, TypeRef};

/// Entity addressable by a numeric id.
pub trait Identified {
    fn id(&self) -> u64;
}

/// Entity that can be shown by name and referenced as a parent.
pub trait Named: Identified {
    /// Kind label used in fallback labels such as `"Parking #12"`.
    const KIND: &'static str;

    fn name(&self) -> &str;
}
