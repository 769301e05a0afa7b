//! Guest slot board: who holds which numbered slot of each parking.

use crate::model::{Guest, Occupant, SlotPlace};
use crate::status::StatusCode;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Occupants per parking name, then per slot key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotBoard {
    parkings: BTreeMap<String, BTreeMap<String, Occupant>>,
}

/// A place of the board as it should be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<'a> {
    pub number: &'a str,
    pub kind: &'a str,
    /// `None` for an empty slot.
    pub status: Option<StatusCode>,
    pub occupant: Option<&'a Occupant>,
}

impl SlotView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

impl SlotBoard {
    #[must_use]
    pub fn new(parkings: BTreeMap<String, BTreeMap<String, Occupant>>) -> Self {
        Self { parkings }
    }

    /// Puts `occupant` on the slot, replacing any previous holder.
    pub fn assign(&mut self, parking: &str, slot: &str, occupant: Occupant) {
        info!(parking, slot, name = %occupant.name, "slot assigned");
        self.parkings
            .entry(parking.to_string())
            .or_default()
            .insert(slot.to_string(), occupant);
    }

    /// Frees the slot. Returns whether it was occupied.
    pub fn free(&mut self, parking: &str, slot: &str) -> bool {
        let freed = self
            .parkings
            .get_mut(parking)
            .and_then(|slots| slots.remove(slot))
            .is_some();
        if freed {
            info!(parking, slot, "slot freed");
        } else {
            debug!(parking, slot, "slot already free");
        }
        freed
    }

    #[must_use]
    pub fn occupant(&self, parking: &str, slot: &str) -> Option<&Occupant> {
        self.parkings.get(parking).and_then(|slots| slots.get(slot))
    }

    #[must_use]
    pub fn occupied_count(&self, parking: &str) -> usize {
        self.parkings.get(parking).map_or(0, BTreeMap::len)
    }

    /// Lays the occupants of `parking` over its physical places.
    #[must_use]
    pub fn slots_for<'a>(&'a self, parking: &str, places: &'a [SlotPlace]) -> Vec<SlotView<'a>> {
        places
            .iter()
            .map(|place| {
                let occupant = self.occupant(parking, place.key());
                SlotView {
                    number: &place.number,
                    kind: &place.kind,
                    status: occupant.map(|o| o.status.unwrap_or(StatusCode::UnknownOccupation)),
                    occupant,
                }
            })
            .collect()
    }
}

/// Guest staying in `room`, if the input is a room number we know.
#[must_use]
pub fn find_guest<'g>(guests: &'g [Guest], room: &str) -> Option<&'g Guest> {
    let room: u32 = room.trim().parse().ok()?;
    guests.iter().find(|g| g.room_number == room)
}
