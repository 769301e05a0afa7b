use super::{Guest, Hotel, Occupant, Parking, SlotPlace, Spot, StatusRef, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully materialized copy of every collection the dashboard works on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub parkings: Vec<Parking>,
    #[serde(default)]
    pub spots: Vec<Spot>,
    #[serde(default)]
    pub statuses: Vec<StatusRef>,
    #[serde(default)]
    pub types: Vec<TypeRef>,
    #[serde(default)]
    pub guests: Vec<Guest>,
    /// Slot board places per parking name.
    #[serde(default)]
    pub places: BTreeMap<String, Vec<SlotPlace>>,
    /// Slot board occupants per parking name, then slot key.
    #[serde(default)]
    pub occupants: BTreeMap<String, BTreeMap<String, Occupant>>,
}
