use super::{Identified, Named};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parking {
    pub id: u64,
    pub hotel_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl Parking {
    #[must_use]
    pub fn new(id: u64, hotel_id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            hotel_id,
            name: name.into(),
            description: None,
            location: None,
            capacity: None,
        }
    }
}

impl Identified for Parking {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Named for Parking {
    const KIND: &'static str = "Parking";

    fn name(&self) -> &str {
        &self.name
    }
}
