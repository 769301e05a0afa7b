//! Resolution of parent references against loaded collections.
//!
//! Nothing here fetches data: parents that are not loaded resolve to a
//! fallback label so every row stays renderable.

use crate::model::{Hotel, HotelStats, Identified, Named, Parking, Spot};
use crate::status::display_value;
use serde::Serialize;
use std::collections::HashMap;

/// Indexes a collection by id. Later duplicates win.
#[must_use]
pub fn index_by_id<E: Identified>(items: &[E]) -> HashMap<u64, &E> {
    items.iter().map(|item| (item.id(), item)).collect()
}

/// Display name of the parent `parent_id`, or `"<kind> #<id>"` when it is
/// not in `parents`.
#[must_use]
pub fn resolve_parent_name<E: Named>(
    parent_id: u64,
    parents: &HashMap<u64, &E>,
    kind_label: &str,
) -> String {
    parents.get(&parent_id).map_or_else(
        || format!("{kind_label} #{parent_id}"),
        |parent| parent.name().to_string(),
    )
}

/// [`resolve_parent_name`] using the entity's own kind label.
#[must_use]
pub fn parent_name<E: Named>(parent_id: u64, parents: &HashMap<u64, &E>) -> String {
    resolve_parent_name(parent_id, parents, E::KIND)
}

/// Counts, for every hotel, its parkings and the spots of those parkings.
#[must_use]
pub fn enrich_hotel_stats(hotels: &[Hotel], parkings: &[Parking], spots: &[Spot]) -> Vec<HotelStats> {
    let mut spots_per_parking: HashMap<u64, usize> = HashMap::new();
    for spot in spots {
        *spots_per_parking.entry(spot.parking_id).or_insert(0) += 1;
    }

    hotels
        .iter()
        .map(|hotel| {
            let own: Vec<&Parking> = parkings.iter().filter(|p| p.hotel_id == hotel.id).collect();
            let spot_count = own
                .iter()
                .map(|p| spots_per_parking.get(&p.id).copied().unwrap_or(0))
                .sum();

            HotelStats {
                hotel: hotel.clone(),
                parking_count: own.len(),
                spot_count,
            }
        })
        .collect()
}

/// A spot flattened for display and export, with its parking resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotRow {
    pub id: u64,
    pub number: u32,
    pub parking: String,
    pub floor: String,
    pub section: String,
    pub types: String,
    pub statuses: String,
}

#[must_use]
pub fn spot_rows(spots: &[&Spot], parkings: &[Parking]) -> Vec<SpotRow> {
    let index = index_by_id(parkings);
    spots.iter().map(|spot| spot_row(spot, &index)).collect()
}

#[must_use]
pub fn spot_row(spot: &Spot, parkings: &HashMap<u64, &Parking>) -> SpotRow {
    let types = if spot.types.is_empty() {
        "Standard".to_string()
    } else {
        spot.types
            .iter()
            .map(|t| t.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let statuses = if spot.statuses.is_empty() {
        crate::status::FREE_LABEL.to_string()
    } else {
        spot.statuses
            .iter()
            .map(|s| display_value(&s.value))
            .collect::<Vec<_>>()
            .join(", ")
    };

    SpotRow {
        id: spot.id,
        number: spot.number,
        parking: parent_name(spot.parking_id, parkings),
        floor: spot.floor.map_or_else(|| "-".to_string(), |f| f.to_string()),
        section: spot
            .section
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "-".to_string()),
        types,
        statuses,
    }
}
