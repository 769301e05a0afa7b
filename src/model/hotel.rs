use super::{Identified, Named};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Hotel {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: None,
            description: None,
            city: None,
            country: None,
        }
    }
}

impl Identified for Hotel {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Named for Hotel {
    const KIND: &'static str = "Hotel";

    fn name(&self) -> &str {
        &self.name
    }
}

/// A hotel enriched with the size of its parking estate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelStats {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub parking_count: usize,
    pub spot_count: usize,
}
