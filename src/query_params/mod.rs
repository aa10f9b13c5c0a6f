use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LatLngQueryParams {
    pub lat: f64,
    pub lng: f64,
}
