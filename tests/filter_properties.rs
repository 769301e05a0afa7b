use chrono::{Days, NaiveDate};
use parking_dash::filter::{filter_spots, SpotFilter};
use parking_dash::model::{Hotel, Parking, Spot, StatusRef, TypeRef};
use parking_dash::resolve::{enrich_hotel_stats, index_by_id, resolve_parent_name};
use parking_dash::status::{derive_status, StatusCode};
use proptest::prelude::*;
use std::collections::HashSet;

const STATUS_VALUES: [&str; 4] = ["already_in", "arrival_today", "late_checkout", "personnel"];
const TYPE_VALUES: [&str; 3] = ["standard", "PMR", "electrique"];

fn parkings() -> Vec<Parking> {
    vec![
        Parking::new(1, 1, "Cour"),
        Parking::new(2, 1, "Sous-sol"),
        Parking::new(3, 2, "Rue"),
    ]
}

fn spot_strategy() -> impl Strategy<Value = Spot> {
    (
        1u64..=4,
        0u32..40,
        proptest::option::of(-2i32..3),
        proptest::sample::subsequence(vec![1usize, 2, 3, 4], 0..=2),
        proptest::sample::subsequence(vec![1usize, 2, 3], 0..=2),
    )
        .prop_map(|(parking_id, number, floor, statuses, types)| {
            let mut spot = Spot::new(0, parking_id, number)
                .with_statuses(
                    statuses
                        .into_iter()
                        .map(|id| StatusRef::new(id as u64, STATUS_VALUES[id - 1]))
                        .collect(),
                )
                .with_types(
                    types
                        .into_iter()
                        .map(|id| TypeRef::new(id as u64, TYPE_VALUES[id - 1]))
                        .collect(),
                );
            spot.floor = floor;
            spot
        })
}

fn spots_strategy() -> impl Strategy<Value = Vec<Spot>> {
    proptest::collection::vec(spot_strategy(), 0..30).prop_map(|mut spots| {
        for (i, spot) in spots.iter_mut().enumerate() {
            spot.id = i as u64 + 1;
        }
        spots
    })
}

fn filter_strategy() -> impl Strategy<Value = SpotFilter> {
    (
        proptest::option::of(1u64..=4),
        proptest::option::of(1u64..=5),
        proptest::option::of(1u64..=4),
        proptest::option::of(proptest::sample::select(vec![
            "1", "cour", "RUE", "pmr", "in", "  ", "", "-1",
        ])),
    )
        .prop_map(|(parking_id, status_id, type_id, text)| SpotFilter {
            parking_id,
            status_id,
            type_id,
            free_text: text.map(str::to_string),
        })
}

fn ids(spots: &[&Spot]) -> Vec<u64> {
    spots.iter().map(|s| s.id).collect()
}

proptest! {
    #[test]
    fn result_is_an_ordered_subset(spots in spots_strategy(), filter in filter_strategy()) {
        let parkings = parkings();
        let result = ids(&filter_spots(&spots, &parkings, &filter));

        let mut source = spots.iter().map(|s| s.id);
        for id in &result {
            prop_assert!(source.any(|candidate| candidate == *id));
        }
    }

    #[test]
    fn every_result_satisfies_each_field(spots in spots_strategy(), filter in filter_strategy()) {
        let parkings = parkings();
        for spot in filter_spots(&spots, &parkings, &filter) {
            if let Some(parking_id) = filter.parking_id {
                prop_assert_eq!(spot.parking_id, parking_id);
            }
            if let Some(status_id) = filter.status_id {
                prop_assert!(spot.statuses.iter().any(|s| s.id == status_id));
            }
            if let Some(type_id) = filter.type_id {
                prop_assert!(spot.types.iter().any(|t| t.id == type_id));
            }
        }
    }

    #[test]
    fn fields_combine_as_intersection(spots in spots_strategy(), filter in filter_strategy()) {
        let parkings = parkings();
        let singles = [
            SpotFilter { parking_id: filter.parking_id, ..SpotFilter::default() },
            SpotFilter { status_id: filter.status_id, ..SpotFilter::default() },
            SpotFilter { type_id: filter.type_id, ..SpotFilter::default() },
            SpotFilter { free_text: filter.free_text.clone(), ..SpotFilter::default() },
        ];
        let allowed: Vec<HashSet<u64>> = singles
            .iter()
            .map(|single| ids(&filter_spots(&spots, &parkings, single)).into_iter().collect())
            .collect();

        let expected: Vec<u64> = spots
            .iter()
            .map(|s| s.id)
            .filter(|id| allowed.iter().all(|set| set.contains(id)))
            .collect();
        prop_assert_eq!(ids(&filter_spots(&spots, &parkings, &filter)), expected);
    }

    #[test]
    fn inactive_filter_is_identity(spots in spots_strategy(), blank in proptest::option::of("[ \t]{0,3}")) {
        let filter = SpotFilter { free_text: blank, ..SpotFilter::default() };
        let all: Vec<u64> = spots.iter().map(|s| s.id).collect();
        prop_assert_eq!(ids(&filter_spots(&spots, &parkings(), &filter)), all);
    }

    #[test]
    fn derivation_is_pure(
        start in 0u64..3650,
        stay in 0u64..15,
        offset in 0u64..20,
    ) {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let check_in = base + Days::new(start);
        let check_out = check_in + Days::new(stay);
        let today = check_in + Days::new(offset);
        let check_in = check_in.format("%Y-%m-%d").to_string();
        let check_out = check_out.format("%Y-%m-%d").to_string();

        let first = derive_status(Some(&check_in), Some(&check_out), today);
        let second = derive_status(Some(&check_in), Some(&check_out), today);
        prop_assert_eq!(first, second);
        prop_assert!(first.is_some());
    }

    #[test]
    fn same_day_stay_is_always_arrival(day in 0u64..3650) {
        let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Days::new(day);
        let date = today.format("%Y-%m-%d").to_string();
        prop_assert_eq!(
            derive_status(Some(&date), Some(&date), today),
            Some(StatusCode::ArrivalToday)
        );
    }

    #[test]
    fn parent_resolution_never_fails(id in any::<u64>(), label in "[A-Za-z]{1,10}") {
        let parkings = parkings();
        let index = index_by_id(&parkings);
        let name = resolve_parent_name(id, &index, &label);
        if index.contains_key(&id) {
            prop_assert!(!name.contains('#'));
        } else {
            prop_assert_eq!(name, format!("{label} #{id}"));
        }
    }

    #[test]
    fn hotel_totals_match_owned_spots(spots in spots_strategy(), keep_second in any::<bool>()) {
        let mut hotels = vec![Hotel::new(1, "Philibert")];
        if keep_second {
            hotels.push(Hotel::new(2, "Seytour"));
        }
        let parkings = parkings();
        let stats = enrich_hotel_stats(&hotels, &parkings, &spots);

        let owned_parkings: HashSet<u64> = parkings
            .iter()
            .filter(|p| hotels.iter().any(|h| h.id == p.hotel_id))
            .map(|p| p.id)
            .collect();
        let owned_spots = spots.iter().filter(|s| owned_parkings.contains(&s.parking_id)).count();

        prop_assert_eq!(stats.iter().map(|h| h.spot_count).sum::<usize>(), owned_spots);
        prop_assert_eq!(stats.len(), hotels.len());
    }
}
