use super::{Criteria, TextQuery};
use crate::model::{Hotel, Parking};

/// Active filter fields of the parkings view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkingFilter {
    pub hotel_id: Option<u64>,
    pub free_text: Option<String>,
}

/// Hotels whose name or address contains `free_text`.
#[must_use]
pub fn filter_hotels<'h>(hotels: &'h [Hotel], free_text: Option<&str>) -> Vec<&'h Hotel> {
    Criteria::new()
        .when(TextQuery::parse(free_text), |hotel: &Hotel, q| {
            q.found_in(&hotel.name) || q.found_in_opt(hotel.address.as_deref())
        })
        .apply(hotels)
}

/// Parkings of the selected hotel whose name, description or location
/// contains the free text.
#[must_use]
pub fn filter_parkings<'p>(parkings: &'p [Parking], filter: &ParkingFilter) -> Vec<&'p Parking> {
    Criteria::new()
        .when(filter.hotel_id, |parking: &Parking, id| parking.hotel_id == *id)
        .when(
            TextQuery::parse(filter.free_text.as_deref()),
            |parking: &Parking, q| {
                q.found_in(&parking.name)
                    || q.found_in_opt(parking.description.as_deref())
                    || q.found_in_opt(parking.location.as_deref())
            },
        )
        .apply(parkings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hotels_match_name_or_address() {
        let mut seytour = Hotel::new(2, "Le Seytour");
        seytour.address = Some("12 rue Philibert".into());
        let hotels = vec![Hotel::new(1, "Philibert"), seytour, Hotel::new(3, "Negresco")];

        let names = |q: Option<&str>| -> Vec<u64> {
            filter_hotels(&hotels, q).iter().map(|h| h.id).collect()
        };
        assert_eq!(names(None), vec![1, 2, 3]);
        assert_eq!(names(Some("philibert")), vec![1, 2]);
        assert_eq!(names(Some("NEG")), vec![3]);
        assert_eq!(names(Some("zzz")), Vec::<u64>::new());
    }

    #[test]
    fn parkings_combine_hotel_and_text() {
        let mut underground = Parking::new(11, 1, "Sous-sol");
        underground.location = Some("Niveau -2".into());
        let mut annex = Parking::new(12, 2, "Annexe");
        annex.description = Some("Niveau visiteurs".into());
        let parkings = vec![Parking::new(10, 1, "Cour"), underground, annex];

        let ids = |filter: &ParkingFilter| -> Vec<u64> {
            filter_parkings(&parkings, filter).iter().map(|p| p.id).collect()
        };
        assert_eq!(ids(&ParkingFilter::default()), vec![10, 11, 12]);
        assert_eq!(
            ids(&ParkingFilter {
                hotel_id: Some(1),
                free_text: None
            }),
            vec![10, 11]
        );
        assert_eq!(
            ids(&ParkingFilter {
                hotel_id: None,
                free_text: Some("niveau".into())
            }),
            vec![11, 12]
        );
        assert_eq!(
            ids(&ParkingFilter {
                hotel_id: Some(1),
                free_text: Some("niveau".into())
            }),
            vec![11]
        );
    }
}
