use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy status codes known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    #[serde(rename = "personnel")]
    Personnel,
    #[serde(rename = "late_checkout", alias = "late-checkout")]
    LateCheckout,
    #[serde(rename = "arrival_today", alias = "arrival-today")]
    ArrivalToday,
    #[serde(rename = "already_in", alias = "already-in")]
    AlreadyIn,
    #[serde(rename = "contact_hotel", alias = "contact-hotel")]
    ContactHotel,
    #[serde(rename = "external_company", alias = "external-company")]
    ExternalCompany,
    #[serde(rename = "unknown_occupation", alias = "unknown-occupation")]
    UnknownOccupation,
}

/// Display attributes of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    pub color: &'static str,
    pub label: &'static str,
}

/// Color used for spots without any status.
pub const FREE_COLOR: &str = "#4CAF50";
pub const FREE_LABEL: &str = "Libre";

impl StatusCode {
    /// Every code, in catalog order.
    pub const ALL: [StatusCode; 7] = [
        StatusCode::Personnel,
        StatusCode::LateCheckout,
        StatusCode::ArrivalToday,
        StatusCode::AlreadyIn,
        StatusCode::ContactHotel,
        StatusCode::ExternalCompany,
        StatusCode::UnknownOccupation,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            StatusCode::Personnel => "personnel",
            StatusCode::LateCheckout => "late_checkout",
            StatusCode::ArrivalToday => "arrival_today",
            StatusCode::AlreadyIn => "already_in",
            StatusCode::ContactHotel => "contact_hotel",
            StatusCode::ExternalCompany => "external_company",
            StatusCode::UnknownOccupation => "unknown_occupation",
        }
    }

    #[must_use]
    pub const fn info(self) -> StatusInfo {
        let (color, label) = match self {
            StatusCode::Personnel => ("#F4CCCC", "Personnel hôtel"),
            StatusCode::LateCheckout => ("#FF9900", "Départ tardif"),
            StatusCode::ArrivalToday => ("#00FF00", "Arrivée du jour"),
            StatusCode::AlreadyIn => ("#D9A384", "Déjà présent"),
            StatusCode::ContactHotel => ("#FF00FF", "Contact hôtel/téléphone"),
            StatusCode::ExternalCompany => ("#FFFF00", "Société extérieure"),
            StatusCode::UnknownOccupation => ("#FF0000", "Occupation inconnue"),
        };
        StatusInfo { color, label }
    }

    /// Short role shown on an occupied slot of the guest board.
    #[must_use]
    pub const fn occupant_role(self) -> &'static str {
        match self {
            StatusCode::Personnel => "Personnel",
            StatusCode::ExternalCompany => "Société",
            StatusCode::UnknownOccupation => "Inconnu",
            _ => "Client",
        }
    }

    /// Parses a stable code; `-` and `_` separators are both accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('-', "_").to_lowercase();
        Self::ALL.into_iter().find(|c| c.code() == normalized)
    }

    /// Whether a spot carrying this code counts towards the occupancy rate.
    #[must_use]
    pub const fn is_guest_presence(self) -> bool {
        matches!(self, StatusCode::AlreadyIn | StatusCode::ArrivalToday)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// List display form of a status value: `already_in` becomes `already in`.
#[must_use]
pub fn display_value(value: &str) -> String {
    value.replace('_', " ")
}
