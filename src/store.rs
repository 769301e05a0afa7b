//! Application state: cached collections, active filters and reload
//! bookkeeping.
//!
//! Collections are replaced wholesale on reload. Acknowledged create, update
//! and delete operations splice the cached lists in place.

use crate::error::LoadError;
use crate::filter::{filter_hotels, filter_parkings, filter_spots, Listing, ParkingFilter, SpotFilter};
use crate::model::{Hotel, Identified, Parking, Snapshot, Spot, StatusRef, TypeRef};
use crate::slots::SlotBoard;
use tracing::{info, warn};

/// Tag of a reload request. Only the latest one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug)]
pub enum ReloadOutcome {
    Applied,
    /// A newer reload was started since; the result was discarded.
    Stale,
    /// The fetch failed; the previous collections are kept.
    Failed(LoadError),
}

#[derive(Debug, Default)]
pub struct Store {
    data: Option<Snapshot>,
    board: SlotBoard,
    generation: u64,
    pub spot_filter: SpotFilter,
    pub parking_filter: ParkingFilter,
    pub hotel_search: Option<String>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let mut store = Self::new();
        let generation = store.begin_reload();
        store.apply_reload(generation, Ok(snapshot));
        store
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn board(&self) -> &SlotBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut SlotBoard {
        &mut self.board
    }

    /// Starts a reload; responses tagged with older generations become stale.
    pub fn begin_reload(&mut self) -> Generation {
        self.generation += 1;
        Generation(self.generation)
    }

    pub fn apply_reload(
        &mut self,
        generation: Generation,
        result: Result<Snapshot, LoadError>,
    ) -> ReloadOutcome {
        if generation.0 != self.generation {
            warn!(
                generation = generation.0,
                latest = self.generation,
                "discarding stale reload"
            );
            return ReloadOutcome::Stale;
        }

        match result {
            Ok(mut snapshot) => {
                self.board = SlotBoard::new(std::mem::take(&mut snapshot.occupants));
                info!(
                    generation = generation.0,
                    spots = snapshot.spots.len(),
                    "reload applied"
                );
                self.data = Some(snapshot);
                ReloadOutcome::Applied
            }
            Err(err) => {
                warn!(generation = generation.0, error = %err, "reload failed");
                ReloadOutcome::Failed(err)
            }
        }
    }

    #[must_use]
    pub fn hotels(&self) -> &[Hotel] {
        self.data.as_ref().map(|d| d.hotels.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn parkings(&self) -> &[Parking] {
        self.data.as_ref().map(|d| d.parkings.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        self.data.as_ref().map(|d| d.spots.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn visible_hotels(&self) -> Listing<'_, Hotel> {
        match &self.data {
            None => Listing::Loading,
            Some(d) => Listing::from_items(filter_hotels(&d.hotels, self.hotel_search.as_deref())),
        }
    }

    #[must_use]
    pub fn visible_parkings(&self) -> Listing<'_, Parking> {
        match &self.data {
            None => Listing::Loading,
            Some(d) => Listing::from_items(filter_parkings(&d.parkings, &self.parking_filter)),
        }
    }

    #[must_use]
    pub fn visible_spots(&self) -> Listing<'_, Spot> {
        match &self.data {
            None => Listing::Loading,
            Some(d) => Listing::from_items(filter_spots(&d.spots, &d.parkings, &self.spot_filter)),
        }
    }

    /// The status catalog, in source order.
    #[must_use]
    pub fn visible_statuses(&self) -> Listing<'_, StatusRef> {
        match &self.data {
            None => Listing::Loading,
            Some(d) => Listing::from_items(d.statuses.iter().collect()),
        }
    }

    #[must_use]
    pub fn visible_types(&self) -> Listing<'_, TypeRef> {
        match &self.data {
            None => Listing::Loading,
            Some(d) => Listing::from_items(d.types.iter().collect()),
        }
    }

    /// Navigates from a hotel to its parkings.
    pub fn show_parkings_of_hotel(&mut self, hotel_id: u64) {
        self.parking_filter = ParkingFilter {
            hotel_id: Some(hotel_id),
            free_text: None,
        };
    }

    /// Navigates from a parking to its spots; other spot filters are kept.
    pub fn show_spots_of_parking(&mut self, parking_id: u64) {
        self.spot_filter.parking_id = Some(parking_id);
    }

    pub fn upsert_hotel(&mut self, hotel: Hotel) {
        if let Some(d) = self.data.as_mut() {
            upsert(&mut d.hotels, hotel);
        }
    }

    pub fn remove_hotel(&mut self, id: u64) -> bool {
        self.data.as_mut().is_some_and(|d| remove(&mut d.hotels, id))
    }

    pub fn upsert_parking(&mut self, parking: Parking) {
        if let Some(d) = self.data.as_mut() {
            upsert(&mut d.parkings, parking);
        }
    }

    pub fn remove_parking(&mut self, id: u64) -> bool {
        self.data.as_mut().is_some_and(|d| remove(&mut d.parkings, id))
    }

    pub fn upsert_spot(&mut self, spot: Spot) {
        if let Some(d) = self.data.as_mut() {
            upsert(&mut d.spots, spot);
        }
    }

    pub fn remove_spot(&mut self, id: u64) -> bool {
        self.data.as_mut().is_some_and(|d| remove(&mut d.spots, id))
    }
}

/// Replaces the item with the same id, or appends it.
fn upsert<E: Identified>(items: &mut Vec<E>, item: E) {
    match items.iter().position(|existing| existing.id() == item.id()) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

fn remove<E: Identified>(items: &mut Vec<E>, id: u64) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
