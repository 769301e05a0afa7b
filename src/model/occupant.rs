use crate::status::StatusCode;
use serde::{Deserialize, Serialize};

/// Whoever currently holds a slot on the guest slot board.
///
/// Dates are kept as entered; they are parsed on demand when the status is
/// derived or the slot is displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
    #[serde(default)]
    pub car_make: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub status: Option<StatusCode>,
}

/// Hotel guest record used to pre-fill an occupant from a room number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub room_number: u32,
    pub name: String,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
}

/// A physical place on the slot board, e.g. `"9 PMR"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPlace {
    pub number: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl SlotPlace {
    /// Board key of the place: the leading number without its suffix.
    #[must_use]
    pub fn key(&self) -> &str {
        self.number.split_whitespace().next().unwrap_or("")
    }
}
