use super::catalog::StatusCode;
use super::date::parse_date;
use crate::model::{Guest, Occupant};
use chrono::NaiveDate;

/// Derives the occupancy status of a stay relative to `today`.
///
/// Rules apply in priority order: arrival on `today`, then departure on
/// `today`, otherwise the guest is already in. A date that is missing or
/// cannot be parsed never matches its rule. When neither date is given at
/// all there is nothing to derive from and `None` is returned.
#[must_use]
pub fn derive_status(
    check_in: Option<&str>,
    check_out: Option<&str>,
    today: NaiveDate,
) -> Option<StatusCode> {
    let check_in = check_in.filter(|s| !s.trim().is_empty());
    let check_out = check_out.filter(|s| !s.trim().is_empty());

    if check_in.is_none() && check_out.is_none() {
        return None;
    }

    if check_in.and_then(parse_date) == Some(today) {
        return Some(StatusCode::ArrivalToday);
    }
    if check_out.and_then(parse_date) == Some(today) {
        return Some(StatusCode::LateCheckout);
    }
    Some(StatusCode::AlreadyIn)
}

/// Status for a slot occupant: absent record gives `None`, a record without
/// usable dates counts as already in.
#[must_use]
pub fn derive_occupant_status(occupant: Option<&Occupant>, today: NaiveDate) -> Option<StatusCode> {
    let occupant = occupant?;
    derive_status(
        occupant.check_in_date.as_deref(),
        occupant.check_out_date.as_deref(),
        today,
    )
    .or(Some(StatusCode::AlreadyIn))
}

impl Occupant {
    /// Pre-fills an occupant from a guest record with the derived status.
    #[must_use]
    pub fn from_guest(guest: &Guest, today: NaiveDate) -> Self {
        let mut occupant = Occupant {
            name: guest.name.clone(),
            room_number: guest.room_number.to_string(),
            check_in_date: guest.check_in_date.clone(),
            check_out_date: guest.check_out_date.clone(),
            ..Occupant::default()
        };
        occupant.status = derive_occupant_status(Some(&occupant), today);
        occupant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn arrival_wins_over_departure_on_same_day() {
        let today = ymd(2025, 5, 16);
        assert_eq!(
            derive_status(Some("2025-05-16"), Some("2025-05-16"), today),
            Some(StatusCode::ArrivalToday)
        );
    }

    #[test]
    fn stay_progression() {
        let (ci, co) = (Some("2025-05-16"), Some("2025-05-18"));
        assert_eq!(derive_status(ci, co, ymd(2025, 5, 16)), Some(StatusCode::ArrivalToday));
        assert_eq!(derive_status(ci, co, ymd(2025, 5, 17)), Some(StatusCode::AlreadyIn));
        assert_eq!(derive_status(ci, co, ymd(2025, 5, 18)), Some(StatusCode::LateCheckout));
    }

    #[test]
    fn time_of_day_is_ignored() {
        assert_eq!(
            derive_status(Some("2025-05-16T22:15:00"), None, ymd(2025, 5, 16)),
            Some(StatusCode::ArrivalToday)
        );
    }

    #[test]
    fn unparseable_dates_skip_their_rule() {
        let today = ymd(2025, 5, 18);
        assert_eq!(
            derive_status(Some("16-mai"), Some("2025-05-18"), today),
            Some(StatusCode::LateCheckout)
        );
        assert_eq!(
            derive_status(Some("garbage"), Some("garbage"), today),
            Some(StatusCode::AlreadyIn)
        );
    }

    #[test]
    fn no_dates_means_no_status() {
        let today = ymd(2025, 5, 18);
        assert_eq!(derive_status(None, None, today), None);
        assert_eq!(derive_status(Some(""), Some("  "), today), None);
    }

    #[test]
    fn occupant_status() {
        let today = ymd(2025, 5, 16);
        assert_eq!(derive_occupant_status(None, today), None);

        let undated = Occupant::default();
        assert_eq!(
            derive_occupant_status(Some(&undated), today),
            Some(StatusCode::AlreadyIn)
        );
    }

    #[test]
    fn from_guest_fills_fields_and_status() {
        let guest = Guest {
            room_number: 514,
            name: "THIRIET".into(),
            check_in_date: Some("2025-05-16".into()),
            check_out_date: Some("2025-05-18".into()),
        };
        let occupant = Occupant::from_guest(&guest, ymd(2025, 5, 18));
        assert_eq!(occupant.room_number, "514");
        assert_eq!(occupant.name, "THIRIET");
        assert_eq!(occupant.status, Some(StatusCode::LateCheckout));
    }
}
