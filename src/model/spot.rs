use super::Identified;
use crate::status::StatusCode;
use serde::{Deserialize, Serialize};

/// A single parking space.
///
/// An empty `statuses` list means the spot is free; there is no stored
/// "free" status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: u64,
    pub parking_id: u64,
    pub number: u32,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeRef>,
    #[serde(default)]
    pub statuses: Vec<StatusRef>,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(flatten)]
    pub equipment: Equipment,
    #[serde(flatten)]
    pub pricing: Pricing,
}

impl Spot {
    #[must_use]
    pub fn new(id: u64, parking_id: u64, number: u32) -> Self {
        Self {
            id,
            parking_id,
            number,
            floor: None,
            section: None,
            address: None,
            types: Vec::new(),
            statuses: Vec::new(),
            dimensions: Dimensions::default(),
            equipment: Equipment::default(),
            pricing: Pricing::default(),
        }
    }

    #[must_use]
    pub fn with_statuses(mut self, statuses: Vec<StatusRef>) -> Self {
        self.statuses = statuses;
        self
    }

    #[must_use]
    pub fn with_types(mut self, types: Vec<TypeRef>) -> Self {
        self.types = types;
        self
    }
}

impl Identified for Spot {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Entry of the global status catalog as carried by a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRef {
    pub id: u64,
    pub value: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl StatusRef {
    #[must_use]
    pub fn new(id: u64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            color: String::new(),
            label: None,
        }
    }

    /// The catalog code this entry stands for, if it is one we know.
    #[must_use]
    pub fn code(&self) -> Option<StatusCode> {
        StatusCode::from_code(&self.value)
    }
}

/// Physical category of a spot (standard, PMR, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRef {
    pub id: u64,
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl TypeRef {
    #[must_use]
    pub fn new(id: u64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub surface: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub electric_charging: bool,
    #[serde(default)]
    pub camera: bool,
    #[serde(default)]
    pub sensor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub monthly_rate: Option<f64>,
}
