use super::{Criteria, TextQuery};
use crate::model::{Parking, Spot};
use crate::resolve::index_by_id;
use std::collections::HashMap;

/// Active filter fields of the spots view. `None` means the field is off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotFilter {
    pub parking_id: Option<u64>,
    pub status_id: Option<u64>,
    pub type_id: Option<u64>,
    pub free_text: Option<String>,
}

impl SpotFilter {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.parking_id.is_some()
            || self.status_id.is_some()
            || self.type_id.is_some()
            || TextQuery::parse(self.free_text.as_deref()).is_some()
    }
}

/// A spot without any status is free.
#[must_use]
pub fn is_free(spot: &Spot) -> bool {
    spot.statuses.is_empty()
}

/// Narrows `spots` to those matching every active field of `filter`.
///
/// `parkings` is only consulted by the free-text field, which also matches
/// the name of the spot's parking.
#[must_use]
pub fn filter_spots<'s>(spots: &'s [Spot], parkings: &[Parking], filter: &SpotFilter) -> Vec<&'s Spot> {
    let query = TextQuery::parse(filter.free_text.as_deref());
    let parking_names: HashMap<u64, &Parking> = if query.is_some() {
        index_by_id(parkings)
    } else {
        HashMap::new()
    };

    Criteria::new()
        .when(filter.parking_id, |spot: &Spot, id| spot.parking_id == *id)
        .when(filter.status_id, |spot: &Spot, id| {
            !is_free(spot) && spot.statuses.iter().any(|s| s.id == *id)
        })
        .when(filter.type_id, |spot: &Spot, id| {
            spot.types.iter().any(|t| t.id == *id)
        })
        .when(query, move |spot: &Spot, q| {
            let parking_name = parking_names.get(&spot.parking_id).map(|p| p.name.as_str());
            spot_matches_text(spot, parking_name, q)
        })
        .apply(spots)
}

fn spot_matches_text(spot: &Spot, parking_name: Option<&str>, query: &TextQuery) -> bool {
    query.found_in(&spot.number.to_string())
        || spot.floor.is_some_and(|f| query.found_in(&f.to_string()))
        || query.found_in_opt(spot.section.as_deref())
        || spot.statuses.iter().any(|s| query.found_in(&s.value))
        || spot.types.iter().any(|t| query.found_in(&t.value))
        || query.found_in_opt(parking_name)
}
