use crate::map::models::LatLng;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A user-bookmarked geographic point with display metadata.
///
/// Fields never change once the entry is created; editing a bookmark is
/// modeled as remove + re-add. The serialized form is exactly these five
/// fields, in insertion order within the persisted array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    /// Persisted slots written by older tooling carry integer ids; both
    /// forms read back, new entries are always written as strings.
    #[serde(deserialize_with = "id_from_integer_or_string")]
    pub id: String,
    pub title: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl SavedLocation {
    pub fn new(title: &str, address: &str, position: LatLng) -> Self {
        SavedLocation {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            address: address.to_string(),
            lat: position.lat,
            lng: position.lng,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

fn id_from_integer_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Integer(i64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Integer(value) => value.to_string(),
        Id::Text(value) => value,
    })
}
