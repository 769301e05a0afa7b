//! Dashboard summary figures.

use crate::filter::is_free;
use crate::model::{Hotel, Parking, Spot, StatusRef};
use crate::status::{display_value, FREE_COLOR, FREE_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub hotel_count: usize,
    pub parking_count: usize,
    pub spot_count: usize,
    pub free_count: usize,
    /// Spots with a guest present (already in or arriving today).
    pub occupied_count: usize,
    /// `occupied_count` as a rounded percentage of all spots.
    pub occupancy_rate: u8,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(hotels: &[Hotel], parkings: &[Parking], spots: &[Spot]) -> Self {
        let occupied_count = spots
            .iter()
            .filter(|spot| {
                spot.statuses
                    .iter()
                    .any(|s| s.code().is_some_and(|c| c.is_guest_presence()))
            })
            .count();

        let occupancy_rate = if spots.is_empty() {
            0
        } else {
            ((occupied_count as f64 / spots.len() as f64) * 100.0).round() as u8
        };

        Self {
            hotel_count: hotels.len(),
            parking_count: parkings.len(),
            spot_count: spots.len(),
            free_count: spots.iter().filter(|s| is_free(s)).count(),
            occupied_count,
            occupancy_rate,
        }
    }
}

/// One bar of the status distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusShare {
    pub label: String,
    pub color: String,
    pub count: usize,
}

/// Spots per catalog status, in catalog order, followed by a "Libre" bar
/// for spots without status when there are any.
///
/// Statuses carried by a spot but absent from `statuses` are not counted.
#[must_use]
pub fn status_distribution(statuses: &[StatusRef], spots: &[Spot]) -> Vec<StatusShare> {
    let mut shares: Vec<StatusShare> = Vec::with_capacity(statuses.len() + 1);
    for (i, status) in statuses.iter().enumerate() {
        if statuses[..i].iter().any(|s| s.value == status.value) {
            continue;
        }
        let count = spots
            .iter()
            .filter(|spot| spot.statuses.iter().any(|s| s.value == status.value))
            .count();
        shares.push(StatusShare {
            label: display_value(&status.value),
            color: status.color.clone(),
            count,
        });
    }

    let free = spots.iter().filter(|s| is_free(s)).count();
    if free > 0 {
        shares.push(StatusShare {
            label: FREE_LABEL.to_string(),
            color: FREE_COLOR.to_string(),
            count: free,
        });
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn status(id: u64, value: &str, color: &str) -> StatusRef {
        StatusRef {
            color: color.into(),
            ..StatusRef::new(id, value)
        }
    }

    #[test]
    fn occupancy_counts_guest_presence_only() {
        let spots = vec![
            Spot::new(1, 10, 1).with_statuses(vec![StatusRef::new(1, "already_in")]),
            Spot::new(2, 10, 2).with_statuses(vec![StatusRef::new(2, "arrival_today")]),
            Spot::new(3, 10, 3).with_statuses(vec![StatusRef::new(3, "personnel")]),
            Spot::new(4, 10, 4),
            Spot::new(5, 10, 5),
            Spot::new(6, 10, 6),
        ];
        let stats = DashboardStats::compute(&[Hotel::new(1, "H")], &[Parking::new(10, 1, "P")], &spots);

        assert_eq!(
            stats,
            DashboardStats {
                hotel_count: 1,
                parking_count: 1,
                spot_count: 6,
                free_count: 3,
                occupied_count: 2,
                occupancy_rate: 33,
            }
        );
    }

    #[test]
    fn empty_estate_has_zero_rate() {
        assert_eq!(DashboardStats::compute(&[], &[], &[]).occupancy_rate, 0);
    }

    #[test]
    fn distribution_follows_catalog_then_free() {
        let catalog = vec![
            status(1, "already_in", "#D9A384"),
            status(2, "late_checkout", "#FF9900"),
        ];
        let spots = vec![
            Spot::new(1, 10, 1).with_statuses(vec![catalog[0].clone(), catalog[1].clone()]),
            Spot::new(2, 10, 2).with_statuses(vec![catalog[0].clone()]),
            Spot::new(3, 10, 3).with_statuses(vec![StatusRef::new(9, "mystery")]),
            Spot::new(4, 10, 4),
        ];

        let shares = status_distribution(&catalog, &spots);
        let summary: Vec<(&str, usize)> =
            shares.iter().map(|s| (s.label.as_str(), s.count)).collect();
        assert_eq!(
            summary,
            vec![("already in", 2), ("late checkout", 1), ("Libre", 1)]
        );
        assert_eq!(shares[2].color, FREE_COLOR);
    }

    #[test]
    fn no_free_bar_when_everything_is_taken() {
        let catalog = vec![status(1, "personnel", "#F4CCCC")];
        let spots = vec![Spot::new(1, 10, 1).with_statuses(catalog.clone())];
        assert_eq!(status_distribution(&catalog, &spots).len(), 1);
    }
}
